//! Per-icon visual states and the drawables that represent them.

use horizon_rating_core::{rating_warn, targets};

use crate::config::RatingAttributes;

/// The display state of one icon in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconVisual {
    /// The icon is not selected.
    #[default]
    Empty,
    /// The icon is half selected.
    Half,
    /// The icon is fully selected.
    Full,
}

impl IconVisual {
    /// Whether the icon shows any selection at all.
    pub fn is_filled(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Compute the visual state of every icon for a rating value.
///
/// Icons below `floor(value)` are [`Full`](IconVisual::Full) and the rest are
/// [`Empty`](IconVisual::Empty). If the value has a fractional part, the icon
/// at index `floor(value)` shows [`Full`](IconVisual::Full) in whole-step mode
/// or [`Half`](IconVisual::Half) in half-step mode.
///
/// The fractional part is read from the value's decimal representation, so a
/// whole value never shows a fractional icon because of binary rounding.
/// Zero, negative and NaN values render every icon empty; values above
/// `icon_count` render every icon full.
///
/// ```
/// use horizon_rating::{IconVisual::*, visuals_for};
///
/// assert_eq!(visuals_for(2.5, 5, false), vec![Full, Full, Half, Empty, Empty]);
/// assert_eq!(visuals_for(2.5, 5, true), vec![Full, Full, Full, Empty, Empty]);
/// ```
pub fn visuals_for(value: f32, icon_count: usize, step_is_whole: bool) -> Vec<IconVisual> {
    let mut visuals = vec![IconVisual::Empty; icon_count];
    if value.is_nan() || value <= 0.0 {
        return visuals;
    }

    let floor = value.floor();
    let whole = if floor >= icon_count as f32 {
        icon_count
    } else {
        floor as usize
    };
    visuals[..whole].fill(IconVisual::Full);

    if whole < icon_count && decimal_fraction(value) > 0.0 {
        visuals[whole] = if step_is_whole {
            IconVisual::Full
        } else {
            IconVisual::Half
        };
    }

    visuals
}

/// Fractional part of a non-negative finite value, taken from its shortest
/// decimal representation rather than by binary subtraction.
fn decimal_fraction(value: f32) -> f32 {
    let repr = value.to_string();
    match repr.split_once('.') {
        Some((_, digits)) if digits.bytes().any(|b| b != b'0') => {
            format!("0.{digits}").parse().unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// The three drawables a rating row shows, one per [`IconVisual`].
///
/// `D` is an opaque handle (texture id, image path, icon reference...). The
/// rating code never interprets it, it only picks which one to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSet<D> {
    /// Drawable for [`IconVisual::Empty`].
    pub empty: Option<D>,
    /// Drawable for [`IconVisual::Half`].
    pub half: Option<D>,
    /// Drawable for [`IconVisual::Full`].
    pub full: Option<D>,
}

impl<D> Default for IconSet<D> {
    fn default() -> Self {
        Self {
            empty: None,
            half: None,
            full: None,
        }
    }
}

impl<D> IconSet<D> {
    /// Create an icon set with all three drawables.
    pub fn new(empty: D, half: D, full: D) -> Self {
        Self {
            empty: Some(empty),
            half: Some(half),
            full: Some(full),
        }
    }

    /// Resolve the drawable names in `attrs` through `resolver`.
    ///
    /// Names the resolver does not know are logged and left unset.
    pub fn resolve<F>(attrs: &RatingAttributes, mut resolver: F) -> Self
    where
        F: FnMut(&str) -> Option<D>,
    {
        let mut lookup = |slot: &'static str, name: Option<&String>| {
            let name = name?;
            let drawable = resolver(name);
            if drawable.is_none() {
                rating_warn!(target: targets::VIEW, slot, name = %name, "unresolved icon drawable");
            }
            drawable
        };

        Self {
            empty: lookup("empty", attrs.empty_icon.as_ref()),
            half: lookup("half", attrs.half_icon.as_ref()),
            full: lookup("full", attrs.full_icon.as_ref()),
        }
    }

    /// The drawable to show for `visual`, if one was supplied.
    pub fn drawable_for(&self, visual: IconVisual) -> Option<&D> {
        match visual {
            IconVisual::Empty => self.empty.as_ref(),
            IconVisual::Half => self.half.as_ref(),
            IconVisual::Full => self.full.as_ref(),
        }
    }
}
