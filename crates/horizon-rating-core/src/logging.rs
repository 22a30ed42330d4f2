//! Logging facilities for Horizon Rating.
//!
//! Horizon Rating uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_rating=debug")
//!         .init();
//! }
//! ```
//!
//! Every subsystem logs under one of the [`targets`], so filters can be as
//! narrow as a single concern (e.g. `horizon_rating::pointer=trace`).
//!
//! The [`rating_trace!`](crate::rating_trace), [`rating_debug!`](crate::rating_debug)
//! and [`rating_warn!`](crate::rating_warn) macros log under
//! [`targets::CORE`] unless a `target:` is given first:
//!
//! ```
//! use horizon_rating_core::{rating_debug, targets};
//!
//! rating_debug!("core message");
//! rating_debug!(target: targets::ENGINE, value = 2.5, "engine message");
//! ```

#[doc(hidden)]
pub use tracing as __tracing;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_rating_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_rating_core::signal";
    /// Rating value engine target.
    pub const ENGINE: &str = "horizon_rating::engine";
    /// Configuration and attribute parsing target.
    pub const CONFIG: &str = "horizon_rating::config";
    /// Pointer input handling target.
    pub const POINTER: &str = "horizon_rating::pointer";
    /// Widget adapter target (layout, painting, binding).
    pub const VIEW: &str = "horizon_rating::view";
    /// Performance spans.
    pub const PERF: &str = "horizon_rating::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations such as a full
/// icon rebuild or a paint pass.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` crate macros with
/// consistent target naming.
#[macro_export]
macro_rules! rating_trace {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::logging::__tracing::trace!(target: $target, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::logging::__tracing::trace!(target: $crate::logging::targets::CORE, $($arg)+)
    };
}

#[macro_export]
macro_rules! rating_debug {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::logging::__tracing::debug!(target: $target, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::logging::__tracing::debug!(target: $crate::logging::targets::CORE, $($arg)+)
    };
}

#[macro_export]
macro_rules! rating_warn {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::logging::__tracing::warn!(target: $target, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::logging::__tracing::warn!(target: $crate::logging::targets::CORE, $($arg)+)
    };
}
