#![forbid(unsafe_code)]

//! Keep floating elements visible.
//!
//! # Role
//! `clampos` positions tooltips, context menus, and drag previews at the
//! pointer while keeping them on screen. It is a pure function over plain
//! geometry; the host measures its elements, calls [`normalize()`], and applies
//! the returned coordinates itself.
//!
//! # Modules
//! - [`geometry`]: `Point`, `Size`, and `Rect` value types.
//! - [`normalize`](mod@normalize): the clamp, its overflow report, and [`PositionNormalizer`].
//! - [`measure`]: traits for reading geometry from live elements.
//! - [`error`]: opt-in validation of malformed measurements.
//!
//! # Logging
//! Enable the `tracing` feature to get a `trace!` event for every call that
//! corrects the pointer position.

pub mod error;
pub mod geometry;
pub mod logging;
pub mod measure;
pub mod normalize;

pub use error::{GeometryError, validate};
pub use geometry::{Point, Rect, Size};
pub use measure::{Measure, ScopeMeasure, ViewportMeasure, normalize_position};
pub use normalize::{
    ClampedPoint, Normalized, Overflow, PositionNormalizer, normalize, normalize_detailed,
};
