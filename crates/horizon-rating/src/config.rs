//! Rating configuration and attribute documents.
//!
//! [`RatingConfig`] is the immutable configuration a [`RatingValueEngine`]
//! works against. It is replaced wholesale, never edited in place.
//!
//! [`RatingAttributes`] is the configuration *source*: a serde document that
//! can be loaded from TOML or JSON, carrying the config fields plus the
//! initial progress and the names of the three icon drawables.
//!
//! # Example
//!
//! ```
//! use horizon_rating::RatingAttributes;
//!
//! let attrs = RatingAttributes::from_toml_str(r#"
//!     iconCount = 10
//!     progress = 3.5
//!     stepIsWhole = false
//!     fullIcon = "star_full"
//! "#).unwrap();
//!
//! let config = attrs.config();
//! assert_eq!(config.icon_count(), 10);
//! assert!(!config.step_is_whole());
//! assert_eq!(attrs.initial_progress(), 3.5);
//! ```
//!
//! [`RatingValueEngine`]: crate::RatingValueEngine

use horizon_rating_core::{rating_debug, rating_warn, targets};
use serde::Deserialize;

use crate::error::Result;

/// Default number of icons in the row.
pub const DEFAULT_ICON_COUNT: usize = 5;
/// Default icon edge length, in layout units.
pub const DEFAULT_ICON_SIZE: f32 = 20.0;
/// Default gap after each icon, in layout units.
pub const DEFAULT_ICON_SPACING: f32 = 10.0;

/// Configuration of a rating row.
///
/// Construct with [`RatingConfig::default`] and the `with_*` builders. Values
/// outside their valid ranges are accepted here and coerced by
/// [`sanitized`](Self::sanitized), which the engine applies on every
/// (re)configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingConfig {
    icon_count: usize,
    icon_size: f32,
    icon_spacing: f32,
    min_value: f32,
    step_is_whole: bool,
    click_enabled: bool,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            icon_count: DEFAULT_ICON_COUNT,
            icon_size: DEFAULT_ICON_SIZE,
            icon_spacing: DEFAULT_ICON_SPACING,
            min_value: 0.0,
            step_is_whole: true,
            click_enabled: true,
        }
    }
}

impl RatingConfig {
    /// Create the default configuration: five 20-unit icons, 10 units apart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of icons in the row.
    pub fn icon_count(&self) -> usize {
        self.icon_count
    }

    /// Edge length of each (square) icon.
    pub fn icon_size(&self) -> f32 {
        self.icon_size
    }

    /// Gap after each icon.
    pub fn icon_spacing(&self) -> f32 {
        self.icon_spacing
    }

    /// Lowest value pointer input may select.
    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    /// Whether a fractional value renders as a full extra icon (`true`) or a
    /// half icon (`false`).
    pub fn step_is_whole(&self) -> bool {
        self.step_is_whole
    }

    /// Whether pointer input changes the rating.
    pub fn click_enabled(&self) -> bool {
        self.click_enabled
    }

    /// Width of one icon plus its trailing gap.
    pub fn unit_width(&self) -> f32 {
        self.icon_size + self.icon_spacing
    }

    /// Set the icon count using builder pattern.
    pub fn with_icon_count(mut self, icon_count: usize) -> Self {
        self.icon_count = icon_count;
        self
    }

    /// Set the icon size using builder pattern.
    pub fn with_icon_size(mut self, icon_size: f32) -> Self {
        self.icon_size = icon_size;
        self
    }

    /// Set the icon spacing using builder pattern.
    pub fn with_icon_spacing(mut self, icon_spacing: f32) -> Self {
        self.icon_spacing = icon_spacing;
        self
    }

    /// Set the minimum pointer-selectable value using builder pattern.
    pub fn with_min_value(mut self, min_value: f32) -> Self {
        self.min_value = min_value;
        self
    }

    /// Set the step mode using builder pattern.
    pub fn with_step_is_whole(mut self, step_is_whole: bool) -> Self {
        self.step_is_whole = step_is_whole;
        self
    }

    /// Enable or disable pointer input using builder pattern.
    pub fn with_click_enabled(mut self, click_enabled: bool) -> Self {
        self.click_enabled = click_enabled;
        self
    }

    /// Return a copy with every field coerced into its valid range.
    ///
    /// - `icon_count` below 1 becomes 1
    /// - negative or non-finite sizes become 0
    /// - `min_value` becomes 0 if non-finite, then is clamped to
    ///   `[0, icon_count]`
    pub fn sanitized(self) -> Self {
        let mut config = self;

        if config.icon_count == 0 {
            rating_warn!(target: targets::CONFIG, "icon count of 0 coerced to 1");
            config.icon_count = 1;
        }

        config.icon_size = non_negative("icon_size", config.icon_size);
        config.icon_spacing = non_negative("icon_spacing", config.icon_spacing);

        let max = config.icon_count as f32;
        let min_value = if config.min_value.is_finite() {
            config.min_value.clamp(0.0, max)
        } else {
            0.0
        };
        if min_value != config.min_value {
            rating_warn!(
                target: targets::CONFIG,
                requested = config.min_value,
                applied = min_value,
                "minimum value clamped"
            );
            config.min_value = min_value;
        }

        config
    }
}

fn non_negative(field: &'static str, value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        rating_warn!(target: targets::CONFIG, field, requested = value, "length coerced to 0");
        0.0
    }
}

/// Rating attributes as supplied by a layout or style document.
///
/// Keys are camelCase. The `star*` attribute names used by earlier layouts
/// are accepted as aliases. Missing keys take their defaults; unknown keys
/// are an error.
///
/// | Key | Alias | Default |
/// |---|---|---|
/// | `iconCount` | `starCount` | 5 |
/// | `progress` | `starProgress` | 0 |
/// | `minProgress` | `starMinProgress` | 0 |
/// | `iconSize` | `starSize` | 20 |
/// | `iconSpacing` | `starSpace` | 10 |
/// | `stepIsWhole` | `starStepFull` | true |
/// | `clickEnabled` | `starClickable` | true |
/// | `emptyIcon` | `starEmpty` | none |
/// | `halfIcon` | `starHalf` | none |
/// | `fullIcon` | `starFill` | none |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RatingAttributes {
    /// Number of icons. Negative counts are treated like 0 and coerced to 1.
    #[serde(alias = "starCount")]
    pub icon_count: i64,
    /// Initial rating value.
    #[serde(alias = "starProgress")]
    pub progress: f32,
    /// Lowest value pointer input may select.
    #[serde(alias = "starMinProgress")]
    pub min_progress: f32,
    /// Icon edge length.
    #[serde(alias = "starSize")]
    pub icon_size: f32,
    /// Gap after each icon.
    #[serde(alias = "starSpace")]
    pub icon_spacing: f32,
    /// Step mode.
    #[serde(alias = "starStepFull")]
    pub step_is_whole: bool,
    /// Whether pointer input changes the rating.
    #[serde(alias = "starClickable")]
    pub click_enabled: bool,
    /// Drawable shown for empty icons.
    #[serde(alias = "starEmpty")]
    pub empty_icon: Option<String>,
    /// Drawable shown for half icons.
    #[serde(alias = "starHalf")]
    pub half_icon: Option<String>,
    /// Drawable shown for full icons.
    #[serde(alias = "starFill")]
    pub full_icon: Option<String>,
}

impl Default for RatingAttributes {
    fn default() -> Self {
        Self {
            icon_count: DEFAULT_ICON_COUNT as i64,
            progress: 0.0,
            min_progress: 0.0,
            icon_size: DEFAULT_ICON_SIZE,
            icon_spacing: DEFAULT_ICON_SPACING,
            step_is_whole: true,
            click_enabled: true,
            empty_icon: None,
            half_icon: None,
            full_icon: None,
        }
    }
}

impl RatingAttributes {
    /// Parse attributes from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let attrs = toml::from_str(source)?;
        rating_debug!(target: targets::CONFIG, ?attrs, "loaded TOML rating attributes");
        Ok(attrs)
    }

    /// Parse attributes from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let attrs = serde_json::from_str(source)?;
        rating_debug!(target: targets::CONFIG, ?attrs, "loaded JSON rating attributes");
        Ok(attrs)
    }

    /// Build the (unsanitized) configuration described by these attributes.
    pub fn config(&self) -> RatingConfig {
        RatingConfig::new()
            .with_icon_count(usize::try_from(self.icon_count).unwrap_or(0))
            .with_icon_size(self.icon_size)
            .with_icon_spacing(self.icon_spacing)
            .with_min_value(self.min_progress)
            .with_step_is_whole(self.step_is_whole)
            .with_click_enabled(self.click_enabled)
    }

    /// The rating value the widget starts with.
    pub fn initial_progress(&self) -> f32 {
        self.progress
    }
}
