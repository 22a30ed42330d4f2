//! Horizon Rating - a star-rating widget.
//!
//! A row of icons showing a numeric rating with optional half steps, edited
//! by tapping or dragging across the row, with a change listener and a
//! two-way binding bridge so external state stays in sync.
//!
//! The crate is layered:
//!
//! - [`RatingValueEngine`] owns the value, maps pointer positions to ratings
//!   and derives the per-icon [`IconVisual`]s. It has no toolkit dependency.
//! - [`StarRatingView`] adapts the engine to a toolkit: layout, painting
//!   through an [`IconPainter`], and the `progress_changed` signal.
//! - [`binding`] connects the view to data-binding frameworks.
//!
//! # Example
//!
//! ```
//! use horizon_rating::prelude::*;
//!
//! let attrs = RatingAttributes::from_toml_str(r#"
//!     iconCount = 5
//!     stepIsWhole = false
//!     minProgress = 1
//! "#)?;
//!
//! let mut view = StarRatingView::from_attributes(&attrs, |name| Some(name.to_owned()));
//!
//! // A tap on the very first half icon still selects the minimum.
//! view.handle_pointer(&mut PointerEvent::down(2.0));
//! assert_eq!(view.progress(), 1.0);
//! # Ok::<(), horizon_rating::Error>(())
//! ```

pub mod binding;
mod config;
mod engine;
mod error;
pub mod geometry;
pub mod layout;
mod pointer;
pub mod prelude;
mod view;
mod visual;

pub use config::{
    DEFAULT_ICON_COUNT, DEFAULT_ICON_SIZE, DEFAULT_ICON_SPACING, RatingAttributes, RatingConfig,
};
pub use engine::{ChangeListener, RatingValueEngine};
pub use error::{Error, Result};
pub use pointer::{PointerEvent, PointerPhase};
pub use view::{IconPainter, IconSlot, StarRatingView};
pub use visual::{IconSet, IconVisual, visuals_for};
