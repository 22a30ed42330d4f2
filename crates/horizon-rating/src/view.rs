//! The star-rating widget.
//!
//! [`StarRatingView`] adapts a [`RatingValueEngine`] to a toolkit: it lays
//! out the icon row, forwards pointer input, paints each icon with the
//! drawable for its [`IconVisual`] and re-emits every value change on
//! [`progress_changed`](StarRatingView::progress_changed).
//!
//! # Example
//!
//! ```
//! use horizon_rating::{IconSet, PointerEvent, RatingConfig, StarRatingView};
//!
//! let mut view = StarRatingView::new(
//!     RatingConfig::new().with_step_is_whole(false),
//!     IconSet::new("empty.png", "half.png", "full.png"),
//! );
//!
//! view.progress_changed.connect(|value| println!("rated {value}"));
//!
//! // Drag across the row: every move updates the rating.
//! view.handle_pointer(&mut PointerEvent::down(10.0));
//! view.handle_pointer(&mut PointerEvent::moved(60.0));
//! assert_eq!(view.progress(), 2.5);
//! ```
//!
//! # Signals
//!
//! - `progress_changed(f32)`: Emitted after the change listener whenever the
//!   rating changes

use std::fmt;

use horizon_rating_core::{PerfSpan, Signal, rating_debug, targets};

use crate::config::{RatingAttributes, RatingConfig};
use crate::engine::{ChangeListener, RatingValueEngine};
use crate::geometry::{Rect, Size};
use crate::layout;
use crate::pointer::PointerEvent;
use crate::visual::{IconSet, IconVisual};

/// Draws icons on behalf of a [`StarRatingView`].
///
/// Implemented by the toolkit's renderer. `drawable` is `None` when the icon
/// set has no drawable for the icon's visual state.
pub trait IconPainter<D> {
    /// Draw icon `index` inside `rect`.
    fn draw_icon(&mut self, index: usize, rect: Rect, drawable: Option<&D>);
}

/// One laid-out icon of the row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSlot {
    /// Icon index, which doubles as its id.
    pub id: usize,
    /// Where the icon is drawn, in widget-local coordinates.
    pub rect: Rect,
    /// Current visual state.
    pub visual: IconVisual,
}

/// A horizontal row of icons showing and editing a rating.
pub struct StarRatingView<D> {
    engine: RatingValueEngine,
    icons: IconSet<D>,
    rects: Vec<Rect>,

    /// Signal emitted when the rating changes.
    pub progress_changed: Signal<f32>,
}

impl<D> StarRatingView<D> {
    /// Create a view with value 0.
    pub fn new(config: RatingConfig, icons: IconSet<D>) -> Self {
        let engine = RatingValueEngine::new(config);
        let rects = layout::icon_rects(engine.config());
        Self {
            engine,
            icons,
            rects,
            progress_changed: Signal::new(),
        }
    }

    /// Create a view from an attribute document.
    ///
    /// Drawable names are mapped to handles through `resolver`. The initial
    /// progress is applied before anything can observe the view, so it
    /// produces no notification.
    pub fn from_attributes<F>(attrs: &RatingAttributes, resolver: F) -> Self
    where
        F: FnMut(&str) -> Option<D>,
    {
        let mut view = Self::new(attrs.config(), IconSet::resolve(attrs, resolver));
        view.engine.set_value(attrs.initial_progress());
        view
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The active configuration.
    pub fn config(&self) -> &RatingConfig {
        self.engine.config()
    }

    /// Replace the whole configuration, rebuilding the icon row.
    pub fn configure(&mut self, config: RatingConfig) {
        let _span = PerfSpan::new("rebuild_icon_row");
        let changed = self.engine.configure(config);
        self.rects = layout::icon_rects(self.engine.config());
        rating_debug!(target: targets::VIEW, icon_count = self.rects.len(), "icon row rebuilt");
        if changed {
            self.progress_changed.emit(self.engine.value());
        }
    }

    /// Set the number of icons. Rebuilds the row.
    pub fn set_star_count(&mut self, count: usize) -> &mut Self {
        let config = self.config().with_icon_count(count);
        self.configure(config);
        self
    }

    /// Set the minimum value pointer input may select.
    pub fn set_min_progress(&mut self, min: f32) -> &mut Self {
        let config = self.config().with_min_value(min);
        self.configure(config);
        self
    }

    /// Set whether a fractional rating shows a full or a half icon.
    pub fn set_step_is_whole(&mut self, step_is_whole: bool) -> &mut Self {
        let config = self.config().with_step_is_whole(step_is_whole);
        self.configure(config);
        self
    }

    /// Enable or disable pointer input.
    pub fn set_click_enabled(&mut self, enabled: bool) -> &mut Self {
        let config = self.config().with_click_enabled(enabled);
        self.configure(config);
        self
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// The current rating.
    pub fn progress(&self) -> f32 {
        self.engine.value()
    }

    /// Set the rating. See [`RatingValueEngine::set_value`].
    ///
    /// Returns whether the rating changed.
    pub fn set_progress(&mut self, progress: f32) -> bool {
        let changed = self.engine.set_value(progress);
        if changed {
            self.progress_changed.emit(self.engine.value());
        }
        changed
    }

    /// Set the rating using builder pattern.
    pub fn with_progress(mut self, progress: f32) -> Self {
        self.set_progress(progress);
        self
    }

    /// Replace the change listener. `None` removes it.
    pub fn on_progress_change(&mut self, listener: Option<ChangeListener>) -> &mut Self {
        self.engine.set_listener(listener);
        self
    }

    /// The underlying engine.
    pub fn engine(&self) -> &RatingValueEngine {
        &self.engine
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a pointer event.
    ///
    /// Returns `true` (and accepts the event) when pointer input is enabled;
    /// otherwise the event is left for the platform's default handling.
    pub fn handle_pointer(&mut self, event: &mut PointerEvent) -> bool {
        let before = self.engine.value();
        let handled = self.engine.handle_pointer(event);
        let after = self.engine.value();
        if after != before {
            self.progress_changed.emit(after);
        }
        handled
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The drawables used for each visual state.
    pub fn icon_set(&self) -> &IconSet<D> {
        &self.icons
    }

    /// Replace the drawables.
    pub fn set_icon_set(&mut self, icons: IconSet<D>) {
        self.icons = icons;
    }

    /// Every icon of the row, in index order.
    pub fn icons(&self) -> impl Iterator<Item = IconSlot> + '_ {
        self.rects
            .iter()
            .zip(self.engine.visuals())
            .enumerate()
            .map(|(id, (&rect, &visual))| IconSlot { id, rect, visual })
    }

    /// Paint the row: exactly one `draw_icon` call per icon.
    pub fn paint<P>(&self, painter: &mut P)
    where
        P: IconPainter<D>,
    {
        for slot in self.icons() {
            painter.draw_icon(slot.id, slot.rect, self.icons.drawable_for(slot.visual));
        }
    }

    /// Preferred size of the row.
    pub fn size_hint(&self) -> Size {
        layout::size_hint(self.engine.config())
    }
}

impl<D: fmt::Debug> fmt::Debug for StarRatingView<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarRatingView")
            .field("engine", &self.engine)
            .field("icons", &self.icons)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(StarRatingView<u32>: Send, Sync);
