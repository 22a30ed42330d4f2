//! Two-way data-binding bridge.
//!
//! Binding frameworks observe a widget attribute through an
//! "attribute changed" event and read the new value back through a getter.
//! For the rating widget the attribute is [`PROGRESS_ATTRIBUTE`], the event is
//! [`PROGRESS_CHANGED_EVENT`] and the getter is [`progress_for_binding`].
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use horizon_rating::binding::{self, InverseBindingListener};
//! use horizon_rating::{IconSet, RatingConfig, StarRatingView};
//!
//! let mut view: StarRatingView<()> = StarRatingView::new(RatingConfig::new(), IconSet::default());
//! let changes = Arc::new(AtomicUsize::new(0));
//!
//! let counter = changes.clone();
//! let on_change: Arc<dyn InverseBindingListener> = Arc::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//! binding::set_value_changed_listener(&mut view, None, Some(on_change));
//!
//! view.set_progress(4.0);
//! assert_eq!(changes.load(Ordering::SeqCst), 1);
//! assert_eq!(binding::progress_for_binding(&view), 4.0);
//! ```

use std::sync::Arc;

use horizon_rating_core::{PropertyMeta, rating_debug, targets};

use crate::engine::ChangeListener;
use crate::view::StarRatingView;

/// Name of the bindable rating attribute.
pub const PROGRESS_ATTRIBUTE: &str = "progress";

/// Name of the event fired when the bindable rating changes.
pub const PROGRESS_CHANGED_EVENT: &str = "progressAttrChanged";

/// Notified by the widget whenever a bound attribute changes, so the binding
/// framework can read the new value back.
pub trait InverseBindingListener: Send + Sync {
    /// The bound attribute changed.
    fn on_change(&self);
}

impl<F> InverseBindingListener for F
where
    F: Fn() + Send + Sync,
{
    fn on_change(&self) {
        self()
    }
}

/// Metadata describing the bindable rating attribute.
pub fn progress_property() -> PropertyMeta {
    PropertyMeta::new::<f32>(PROGRESS_ATTRIBUTE, "f32", false, Some(PROGRESS_CHANGED_EVENT))
}

/// Install the view's change listener on behalf of a binding framework.
///
/// Without a binding listener, `listener` is installed as is (`None` removes
/// any listener). With one, the installed listener first calls `listener`
/// (if any) and then notifies `binding`.
pub fn set_value_changed_listener<D>(
    view: &mut StarRatingView<D>,
    listener: Option<ChangeListener>,
    binding: Option<Arc<dyn InverseBindingListener>>,
) {
    let Some(binding) = binding else {
        view.on_progress_change(listener);
        return;
    };

    rating_debug!(
        target: targets::VIEW,
        attribute = PROGRESS_ATTRIBUTE,
        has_listener = listener.is_some(),
        "installing inverse binding"
    );
    view.on_progress_change(Some(Arc::new(move |progress: f32| {
        if let Some(listener) = &listener {
            listener(progress);
        }
        binding.on_change();
    })));
}

/// The getter a binding framework calls after [`InverseBindingListener::on_change`].
pub fn progress_for_binding<D>(view: &StarRatingView<D>) -> f32 {
    view.progress()
}
