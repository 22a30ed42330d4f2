//! The rating value engine.
//!
//! [`RatingValueEngine`] owns the current rating, keeps it consistent with
//! the active [`RatingConfig`], maps pointer positions to ratings and keeps
//! the per-icon [`IconVisual`] list in sync. It knows nothing about views or
//! drawables, so it can be driven and tested without a toolkit.
//!
//! # Example
//!
//! ```
//! use horizon_rating::{IconVisual, PointerEvent, RatingConfig, RatingValueEngine};
//!
//! let mut engine = RatingValueEngine::new(RatingConfig::new().with_step_is_whole(false));
//!
//! // Touching 45 units in (icon 20 + gap 10 = 30 per unit) selects 2 stars.
//! engine.handle_pointer(&mut PointerEvent::down(45.0));
//! assert_eq!(engine.value(), 2.0);
//!
//! engine.set_value(3.5);
//! assert_eq!(engine.visuals()[3], IconVisual::Half);
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_rating_core::{rating_debug, rating_trace, rating_warn, targets};

use crate::config::RatingConfig;
use crate::pointer::PointerEvent;
use crate::visual::{IconVisual, visuals_for};

/// Callback invoked with the new rating whenever it changes.
pub type ChangeListener = Arc<dyn Fn(f32) + Send + Sync>;

/// Owns the rating value and derives everything displayed from it.
///
/// # Invariants
///
/// - `0 <= value() <= config().icon_count()` after every mutation
/// - `visuals()` always equals `visuals_for(value(), icon_count, step_is_whole)`
/// - the listener runs exactly once per actual change, never for a no-op
pub struct RatingValueEngine {
    config: RatingConfig,
    value: f32,
    visuals: Vec<IconVisual>,
    listener: Option<ChangeListener>,
}

impl RatingValueEngine {
    /// Create an engine with value 0 for `config`.
    ///
    /// The config is sanitized first, see [`RatingConfig::sanitized`].
    pub fn new(config: RatingConfig) -> Self {
        let config = config.sanitized();
        Self {
            visuals: visuals_for(0.0, config.icon_count(), config.step_is_whole()),
            config,
            value: 0.0,
            listener: None,
        }
    }

    /// The active (sanitized) configuration.
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// The icon list is rebuilt for the new icon count and the current value
    /// is re-clamped into `[0, icon_count]`. If that clamp changes the value
    /// the listener is notified. Returns whether the value changed.
    pub fn configure(&mut self, config: RatingConfig) -> bool {
        let config = config.sanitized();
        rating_debug!(
            target: targets::ENGINE,
            icon_count = config.icon_count(),
            step_is_whole = config.step_is_whole(),
            min_value = config.min_value(),
            "reconfiguring rating"
        );
        self.config = config;

        let clamped = self.clamp_value(self.value);
        let changed = clamped != self.value;
        self.value = clamped;
        self.recompute_visuals();
        if changed {
            self.notify(clamped);
        }
        changed
    }

    /// The current rating value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The current visual state of every icon, in index order.
    pub fn visuals(&self) -> &[IconVisual] {
        &self.visuals
    }

    /// Replace the change listener. `None` removes it.
    pub fn set_listener(&mut self, listener: Option<ChangeListener>) {
        self.listener = listener;
    }

    /// Whether a change listener is installed.
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Clamp `value` into `[0, icon_count]`.
    ///
    /// The configured minimum is *not* applied; only pointer input honours
    /// it. NaN clamps to 0.
    pub fn clamp_value(&self, value: f32) -> f32 {
        let max = self.config.icon_count() as f32;
        if value.is_nan() {
            rating_warn!(target: targets::ENGINE, "NaN rating treated as 0");
            0.0
        } else if value <= 0.0 {
            0.0
        } else if value >= max {
            max
        } else {
            value
        }
    }

    /// Set the rating value.
    ///
    /// The value is clamped into `[0, icon_count]`. If the clamped value is
    /// exactly equal to the current one nothing happens. Otherwise the value
    /// is stored, the visuals are recomputed and the listener is invoked
    /// inline. Returns whether the value changed.
    #[tracing::instrument(skip(self), target = "horizon_rating::engine", level = "trace")]
    pub fn set_value(&mut self, value: f32) -> bool {
        let clamped = self.clamp_value(value);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        self.recompute_visuals();
        self.notify(clamped);
        true
    }

    /// Map a pointer X coordinate to a candidate rating.
    ///
    /// The position is measured in half-unit steps (one unit is an icon plus
    /// its gap), rounded half away from zero, and offset by half an icon so
    /// that touching anywhere in the first half icon yields `0.5`. The result
    /// is not clamped. A degenerate zero-width unit always yields `0.5`.
    pub fn position_to_value(&self, pointer_x: f32) -> f32 {
        let unit_width = self.config.unit_width();
        if unit_width <= 0.0 {
            return 0.5;
        }
        let raw = pointer_x * 2.0 / unit_width;
        raw.round() / 2.0 + 0.5
    }

    /// Apply a pointer event to the rating.
    ///
    /// With input disabled the event is left unaccepted and `false` is
    /// returned. Otherwise down and move events select
    /// `max(position_to_value(x), min_value)`; every phase is consumed.
    /// A NaN position selects nothing, so pointer input never leaves the
    /// value below `min_value`.
    pub fn handle_pointer(&mut self, event: &mut PointerEvent) -> bool {
        if !self.config.click_enabled() {
            return false;
        }

        if event.phase.selects_value() {
            let candidate = self.position_to_value(event.position.x);
            let min_value = self.config.min_value();
            rating_trace!(
                target: targets::POINTER,
                phase = ?event.phase,
                x = event.position.x,
                candidate,
                "pointer selects rating"
            );
            if candidate.is_nan() {
                rating_warn!(target: targets::POINTER, phase = ?event.phase, "NaN pointer position ignored");
            } else if candidate < min_value {
                self.set_value(min_value);
            } else {
                self.set_value(candidate);
            }
        }

        event.accept();
        true
    }

    fn recompute_visuals(&mut self) {
        self.visuals = visuals_for(
            self.value,
            self.config.icon_count(),
            self.config.step_is_whole(),
        );
    }

    fn notify(&self, value: f32) {
        if let Some(listener) = &self.listener {
            listener(value);
        }
    }
}

impl Default for RatingValueEngine {
    fn default() -> Self {
        Self::new(RatingConfig::default())
    }
}

impl fmt::Debug for RatingValueEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingValueEngine")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("visuals", &self.visuals)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(RatingValueEngine: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IconVisual::{Empty, Full, Half};
    use crate::pointer::PointerPhase;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recording(engine: &mut RatingValueEngine) -> Arc<Mutex<Vec<f32>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        engine.set_listener(Some(Arc::new(move |v: f32| seen_clone.lock().push(v))));
        seen
    }

    #[test]
    fn test_engine_creation() {
        let engine = RatingValueEngine::default();
        assert_eq!(engine.value(), 0.0);
        assert_eq!(engine.visuals(), &[Empty; 5]);
        assert!(!engine.has_listener());
    }

    #[test]
    fn test_set_value_clamps() {
        let mut engine = RatingValueEngine::default();

        for (input, expected) in [(-3.0, 0.0), (2.5, 2.5), (5.0, 5.0), (12.0, 5.0), (0.0, 0.0)] {
            engine.set_value(input);
            assert_eq!(engine.value(), expected, "input {input}");
        }
    }

    #[test]
    fn test_set_value_nan_is_zero() {
        let mut engine = RatingValueEngine::default();
        engine.set_value(3.0);
        assert!(engine.set_value(f32::NAN));
        assert_eq!(engine.value(), 0.0);
        assert!(!engine.set_value(f32::NAN));
    }

    #[test]
    fn test_set_value_bypasses_minimum() {
        let mut engine = RatingValueEngine::new(RatingConfig::new().with_min_value(2.0));
        engine.set_value(0.5);
        assert_eq!(engine.value(), 0.5);
    }

    #[test]
    fn test_set_value_notifies_once() {
        let mut engine = RatingValueEngine::default();
        let seen = recording(&mut engine);

        assert!(engine.set_value(3.0));
        assert!(!engine.set_value(3.0));
        assert_eq!(*seen.lock(), vec![3.0]);
    }

    #[test]
    fn test_equality_checked_after_clamp() {
        let mut engine = RatingValueEngine::default();
        engine.set_value(5.0);
        let seen = recording(&mut engine);

        assert!(!engine.set_value(9.0));
        assert!(!engine.set_value(f32::INFINITY));
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_visuals_follow_value() {
        let mut engine = RatingValueEngine::new(RatingConfig::new().with_step_is_whole(false));
        engine.set_value(2.5);
        assert_eq!(engine.visuals(), &[Full, Full, Half, Empty, Empty]);

        engine.set_value(3.0);
        assert_eq!(engine.visuals(), &[Full, Full, Full, Empty, Empty]);
    }

    #[test]
    fn test_position_to_value() {
        let engine = RatingValueEngine::default();
        assert_eq!(engine.position_to_value(0.0), 0.5);
        assert_eq!(engine.position_to_value(15.0), 1.0);
        assert_eq!(engine.position_to_value(30.0), 1.5);
        assert_eq!(engine.position_to_value(7.0), 0.5);
        assert_eq!(engine.position_to_value(8.0), 1.0);
    }

    #[test]
    fn test_position_to_value_is_unclamped() {
        let engine = RatingValueEngine::default();
        assert_eq!(engine.position_to_value(300.0), 10.5);
        assert_eq!(engine.position_to_value(-30.0), -0.5);
    }

    #[test]
    fn test_position_to_value_zero_unit() {
        let engine = RatingValueEngine::new(
            RatingConfig::new().with_icon_size(0.0).with_icon_spacing(0.0),
        );
        assert_eq!(engine.position_to_value(100.0), 0.5);
    }

    #[test]
    fn test_pointer_respects_minimum() {
        let mut engine = RatingValueEngine::new(RatingConfig::new().with_min_value(1.0));
        let seen = recording(&mut engine);

        let mut event = PointerEvent::down(0.0);
        assert!(engine.handle_pointer(&mut event));
        assert!(event.is_accepted());
        assert_eq!(engine.value(), 1.0);
        assert_eq!(*seen.lock(), vec![1.0]);
    }

    #[test]
    fn test_nan_pointer_keeps_value_above_minimum() {
        let mut engine = RatingValueEngine::new(RatingConfig::new().with_min_value(1.0));
        engine.set_value(2.0);
        let seen = recording(&mut engine);

        let mut down = PointerEvent::down(f32::NAN);
        assert!(engine.handle_pointer(&mut down));
        assert!(down.is_accepted());
        engine.handle_pointer(&mut PointerEvent::moved(f32::NAN));

        assert_eq!(engine.value(), 2.0);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_infinite_pointer_positions_clamp() {
        let mut engine = RatingValueEngine::new(RatingConfig::new().with_min_value(1.0));

        engine.handle_pointer(&mut PointerEvent::down(f32::NEG_INFINITY));
        assert_eq!(engine.value(), 1.0);

        engine.handle_pointer(&mut PointerEvent::moved(f32::INFINITY));
        assert_eq!(engine.value(), 5.0);
    }

    #[test]
    fn test_pointer_move_updates_live() {
        let mut engine = RatingValueEngine::default();
        let seen = recording(&mut engine);

        for x in [0.0, 15.0, 30.0, 45.0, 60.0] {
            engine.handle_pointer(&mut PointerEvent::moved(x));
        }

        assert_eq!(*seen.lock(), vec![0.5, 1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_pointer_past_end_clamps() {
        let mut engine = RatingValueEngine::default();
        engine.handle_pointer(&mut PointerEvent::down(1000.0));
        assert_eq!(engine.value(), 5.0);
    }

    #[test]
    fn test_pointer_up_is_consumed_without_change() {
        let mut engine = RatingValueEngine::default();
        let seen = recording(&mut engine);

        let mut up = PointerEvent::up(45.0);
        assert!(engine.handle_pointer(&mut up));
        assert!(up.is_accepted());

        let mut cancel = PointerEvent::new(PointerPhase::Cancel, (45.0, 0.0).into());
        assert!(engine.handle_pointer(&mut cancel));

        assert_eq!(engine.value(), 0.0);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_pointer_ignored_when_disabled() {
        let mut engine = RatingValueEngine::new(RatingConfig::new().with_click_enabled(false));

        let mut event = PointerEvent::down(45.0);
        assert!(!engine.handle_pointer(&mut event));
        assert!(!event.is_accepted());
        assert_eq!(engine.value(), 0.0);
    }

    #[test]
    fn test_reconfigure_clamps_value() {
        let mut engine = RatingValueEngine::default();
        engine.set_value(4.5);
        let seen = recording(&mut engine);

        assert!(engine.configure(RatingConfig::new().with_icon_count(3)));
        assert_eq!(engine.value(), 3.0);
        assert_eq!(engine.visuals(), &[Full; 3]);
        assert_eq!(*seen.lock(), vec![3.0]);
    }

    #[test]
    fn test_reconfigure_keeps_value_in_range() {
        let mut engine = RatingValueEngine::default();
        engine.set_value(2.5);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        engine.set_listener(Some(Arc::new(move |_: f32| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        })));

        assert!(!engine.configure(
            RatingConfig::new().with_icon_count(8).with_step_is_whole(false)
        ));
        assert_eq!(engine.value(), 2.5);
        assert_eq!(engine.visuals().len(), 8);
        assert_eq!(engine.visuals()[2], Half);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_zero_icon_count_coerced() {
        let mut engine = RatingValueEngine::new(RatingConfig::new().with_icon_count(0));
        assert_eq!(engine.config().icon_count(), 1);
        engine.set_value(4.0);
        assert_eq!(engine.value(), 1.0);
        assert_eq!(engine.visuals(), &[Full]);
    }

    #[test]
    fn test_listener_removed() {
        let mut engine = RatingValueEngine::default();
        let seen = recording(&mut engine);
        engine.set_value(1.0);
        engine.set_listener(None);
        engine.set_value(2.0);
        assert_eq!(*seen.lock(), vec![1.0]);
    }

    #[test]
    #[should_panic(expected = "listener failure")]
    fn test_listener_panic_propagates() {
        let mut engine = RatingValueEngine::default();
        engine.set_listener(Some(Arc::new(|_: f32| panic!("listener failure"))));
        engine.set_value(1.0);
    }
}
