//! Property metadata for Horizon Rating.
//!
//! Widgets advertise their bindable attributes through [`PropertyMeta`]: the
//! attribute name, its value type and the event fired when it changes.
//! Binding bridges read this to wire external state to a widget.
//!
//! # Example
//!
//! ```
//! use horizon_rating_core::PropertyMeta;
//!
//! let meta = PropertyMeta::new::<f32>("progress", "f32", false, Some("progressAttrChanged"));
//! assert!(meta.is_type::<f32>());
//! assert_eq!(meta.notify_signal, Some("progressAttrChanged"));
//! ```

use std::any::TypeId;
use std::fmt;

/// Metadata for a property, used for runtime introspection.
///
/// Binding bridges use this to advertise which attribute a widget exposes
/// and which event fires when that attribute changes.
#[derive(Clone)]
pub struct PropertyMeta {
    /// The property name.
    pub name: &'static str,
    /// The type name (for debugging/serialization).
    pub type_name: &'static str,
    /// The TypeId for runtime type checking.
    pub type_id: TypeId,
    /// Whether this property is read-only.
    pub read_only: bool,
    /// The name of the signal emitted when this property changes (if any).
    pub notify_signal: Option<&'static str>,
}

impl PropertyMeta {
    /// Create metadata for a property.
    pub fn new<T: 'static>(
        name: &'static str,
        type_name: &'static str,
        read_only: bool,
        notify_signal: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            type_name,
            type_id: TypeId::of::<T>(),
            read_only,
            notify_signal,
        }
    }

    /// Check whether this property holds values of type `T`.
    pub fn is_type<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl fmt::Debug for PropertyMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyMeta")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("read_only", &self.read_only)
            .field("notify_signal", &self.notify_signal)
            .finish()
    }
}

static_assertions::assert_impl_all!(PropertyMeta: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_meta() {
        let meta = PropertyMeta::new::<f32>("progress", "f32", false, Some("progress_changed"));

        assert_eq!(meta.name, "progress");
        assert_eq!(meta.type_name, "f32");
        assert!(!meta.read_only);
        assert_eq!(meta.notify_signal, Some("progress_changed"));
        assert!(meta.is_type::<f32>());
        assert!(!meta.is_type::<f64>());
    }

    #[test]
    fn test_read_only_meta_without_signal() {
        let meta = PropertyMeta::new::<usize>("iconCount", "usize", true, None);

        assert!(meta.read_only);
        assert!(meta.notify_signal.is_none());
        assert!(meta.is_type::<usize>());
        assert!(format!("{meta:?}").contains("iconCount"));
    }
}
