//! Core systems for Horizon Rating.
//!
//! This crate provides the reactive building blocks the rating widget is
//! assembled from:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Property Metadata**: Bindable attribute descriptions
//! - **Logging**: `tracing` targets and macros for every subsystem
//!
//! # Example
//!
//! ```
//! use horizon_rating_core::Signal;
//!
//! struct Counter {
//!     value: i32,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn set_value(&mut self, value: i32) {
//!         if self.value != value {
//!             self.value = value;
//!             self.value_changed.emit(value);
//!         }
//!     }
//! }
//!
//! let mut counter = Counter { value: 0, value_changed: Signal::new() };
//! counter.value_changed.connect(|v| println!("counter is now {v}"));
//! counter.set_value(1);
//! assert_eq!(counter.value, 1);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::{PerfSpan, targets};
pub use property::PropertyMeta;
pub use signal::{ConnectionId, Signal};
