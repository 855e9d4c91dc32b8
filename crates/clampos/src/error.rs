#![forbid(unsafe_code)]

//! Opt-in input validation.
//!
//! [`normalize`](crate::normalize::normalize) is total and never reports
//! malformed geometry. Callers that want to reject bad measurements before
//! positioning can run [`validate`] first, or use
//! [`PositionNormalizer::normalize_checked`](crate::PositionNormalizer::normalize_checked).

use thiserror::Error;

use crate::geometry::{Point, Rect, Size};

#[cfg(feature = "tracing")]
use crate::logging::debug;
#[cfg(not(feature = "tracing"))]
use crate::debug;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must not be negative (got {value})")]
    NegativeSize { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, GeometryError>;

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { field })
    }
}

fn extent(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(GeometryError::NegativeSize { field, value });
    }
    Ok(())
}

fn check(pointer: Point, target: Size, scope: Rect, viewport: Size) -> Result<()> {
    finite("pointer.x", pointer.x)?;
    finite("pointer.y", pointer.y)?;
    extent("target.width", target.width)?;
    extent("target.height", target.height)?;
    finite("scope.left", scope.left)?;
    finite("scope.top", scope.top)?;
    extent("scope.width", scope.width)?;
    extent("scope.height", scope.height)?;
    extent("viewport.width", viewport.width)?;
    extent("viewport.height", viewport.height)
}

/// Reject non-finite coordinates and negative or non-finite sizes.
///
/// Offsets (pointer, scope origin) may be negative; only extents may not.
/// The first offending field is reported.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn validate(pointer: Point, target: Size, scope: Rect, viewport: Size) -> Result<()> {
    let outcome = check(pointer, target, scope, viewport);
    if let Err(err) = &outcome {
        debug!(error = %err, "rejected position geometry");
    }
    outcome
}
