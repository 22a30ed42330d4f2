//! Horizontal layout of the icon row.
//!
//! Every icon is a square of `round(icon_size)` units (never smaller than
//! [`MIN_ICON_EXTENT`]) followed by a right margin of `round(icon_spacing)`.
//! The last icon keeps its margin, so the row is `icon_count` equal cells
//! wide.

use crate::config::RatingConfig;
use crate::geometry::{Rect, Size};

/// Smallest edge length an icon is laid out with.
pub const MIN_ICON_EXTENT: f32 = 10.0;

/// Edge length of one laid-out icon.
pub fn icon_extent(config: &RatingConfig) -> f32 {
    config.icon_size().round().max(MIN_ICON_EXTENT)
}

/// Right margin after each laid-out icon.
pub fn icon_margin(config: &RatingConfig) -> f32 {
    config.icon_spacing().round().max(0.0)
}

/// The rectangle of every icon, in index order.
pub fn icon_rects(config: &RatingConfig) -> Vec<Rect> {
    let extent = icon_extent(config);
    let step = extent + icon_margin(config);
    (0..config.icon_count())
        .map(|index| Rect::new(index as f32 * step, 0.0, extent, extent))
        .collect()
}

/// The preferred size of the whole row.
pub fn size_hint(config: &RatingConfig) -> Size {
    let extent = icon_extent(config);
    let step = extent + icon_margin(config);
    Size::new(config.icon_count() as f32 * step, extent)
}
