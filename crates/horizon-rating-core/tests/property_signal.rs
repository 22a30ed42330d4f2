//! Integration tests pairing change detection with `Signal` notification.

use std::sync::Arc;

use horizon_rating_core::{PropertyMeta, Signal, rating_debug, targets};
use parking_lot::Mutex;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_rating_core=trace")
        .with_test_writer()
        .try_init();
}

struct Score {
    value: f32,
    value_changed: Signal<f32>,
}

impl Score {
    fn new() -> Self {
        Self {
            value: 0.0,
            value_changed: Signal::new(),
        }
    }

    fn set_value(&mut self, value: f32) {
        if self.value == value {
            return;
        }
        self.value = value;
        rating_debug!(target: targets::CORE, value, "score changed");
        self.value_changed.emit(value);
    }
}

#[test]
fn notifies_only_on_change() {
    setup();
    let mut score = Score::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_clone = seen.clone();
    score.value_changed.connect(move |&v| seen_clone.lock().push(v));

    score.set_value(1.5);
    score.set_value(1.5);
    score.set_value(2.0);

    assert_eq!(*seen.lock(), vec![1.5, 2.0]);
    assert_eq!(score.value, 2.0);
}

#[test]
fn disconnected_slot_stops_receiving() {
    setup();
    let mut score = Score::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_clone = seen.clone();
    let id = score.value_changed.connect(move |&v| seen_clone.lock().push(v));
    score.set_value(3.0);

    assert!(score.value_changed.disconnect(id));
    score.set_value(4.0);

    assert_eq!(*seen.lock(), vec![3.0]);
    assert_eq!(score.value_changed.connection_count(), 0);
}

#[test]
fn property_meta_describes_notify_signal() {
    let meta = PropertyMeta::new::<f32>("value", "f32", false, Some("value_changed"));
    assert!(format!("{meta:?}").contains("value_changed"));
}
