#![forbid(unsafe_code)]

//! Structured logging hooks.
//!
//! With the `tracing` feature, this module re-exports the `tracing` macros
//! used by the crate. Without it, same-named no-op macros are exported at
//! the crate root so call sites need no `cfg` of their own:
//!
//! ```ignore
//! #[cfg(feature = "tracing")]
//! use crate::logging::trace;
//! #[cfg(not(feature = "tracing"))]
//! use crate::trace;
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

/// No-op stand-in for `tracing::trace!`.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// No-op stand-in for `tracing::debug!`.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
