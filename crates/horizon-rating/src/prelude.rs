//! Prelude module for Horizon Rating.
//!
//! ```ignore
//! use horizon_rating::prelude::*;
//! ```
//!
//! This provides access to:
//! - The widget and its engine (`StarRatingView`, `RatingValueEngine`)
//! - Configuration (`RatingConfig`, `RatingAttributes`)
//! - Rendering seams (`IconSet`, `IconVisual`, `IconPainter`)
//! - Pointer input (`PointerEvent`, `PointerPhase`)
//! - Signal/slot system (`Signal`, `ConnectionId`)

pub use crate::{
    ChangeListener, IconPainter, IconSet, IconSlot, IconVisual, PointerEvent, PointerPhase,
    RatingAttributes, RatingConfig, RatingValueEngine, StarRatingView,
};

pub use crate::binding::InverseBindingListener;
pub use crate::geometry::{Point, Rect, Size};

pub use horizon_rating_core::{ConnectionId, Signal};
