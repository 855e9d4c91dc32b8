#![forbid(unsafe_code)]

//! Pointer-anchored position clamping.
//!
//! Given a pointer location, [`normalize`] computes where a floating element
//! (tooltip, context menu, drag preview) should be drawn so that it stays
//! visible. Two boundaries are considered:
//!
//! - the **scope**, a soft preferred container such as a panel;
//! - the **viewport**, a hard boundary that nothing can be drawn outside.
//!
//! By default the element sits exactly at the pointer. On each axis,
//! independently, an overflow past the scope's far edge right-aligns (or
//! bottom-aligns) the element inside the scope, and then an overflow past the
//! viewport's far edge aligns it inside the viewport instead. All four
//! overflow checks use the raw pointer, never a partially corrected
//! one, so the viewport correction always wins a conflict even if it leaves
//! the element outside the scope.
//!
//! Only the far edges are checked. A target larger than the viewport
//! produces a negative coordinate, which is passed through as is.
//!
//! # Example
//!
//! ```
//! use clampos::{normalize, Point, Rect, Size};
//!
//! let at = normalize(
//!     Point::new(950.0, 100.0),
//!     Size::new(200.0, 50.0),
//!     Rect::from_size(800.0, 600.0),
//!     Size::new(1024.0, 768.0),
//! );
//! assert_eq!((at.normalized_x, at.normalized_y), (824.0, 100.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{self, GeometryError};
use crate::geometry::{Point, Rect, Size};

#[cfg(feature = "tracing")]
use crate::logging::trace;
#[cfg(not(feature = "tracing"))]
use crate::trace;

/// Corrected top-left position for the target.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClampedPoint {
    pub normalized_x: f64,
    pub normalized_y: f64,
}

impl ClampedPoint {
    #[inline]
    pub const fn new(normalized_x: f64, normalized_y: f64) -> Self {
        Self {
            normalized_x,
            normalized_y,
        }
    }

    #[inline]
    pub const fn as_tuple(self) -> (f64, f64) {
        (self.normalized_x, self.normalized_y)
    }
}

impl From<ClampedPoint> for Point {
    fn from(p: ClampedPoint) -> Self {
        Point::new(p.normalized_x, p.normalized_y)
    }
}

/// Which far edges the target would cross if placed at the raw pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overflow {
    pub scope_x: bool,
    pub scope_y: bool,
    pub viewport_x: bool,
    pub viewport_y: bool,
}

impl Overflow {
    /// Evaluate all four conditions against the un-clamped pointer.
    pub fn detect(pointer: Point, target: Size, scope: Rect, viewport: Size) -> Self {
        let scope_rel_x = pointer.x - scope.left;
        let scope_rel_y = pointer.y - scope.top;
        Self {
            scope_x: scope_rel_x + target.width > scope.width,
            scope_y: scope_rel_y + target.height > scope.height,
            viewport_x: pointer.x + target.width > viewport.width,
            viewport_y: pointer.y + target.height > viewport.height,
        }
    }

    /// Whether any correction fires.
    #[inline]
    pub const fn any(&self) -> bool {
        self.scope_x || self.scope_y || self.viewport_x || self.viewport_y
    }

    /// Both boundaries overflowed on X; the viewport alignment is used.
    #[inline]
    pub const fn viewport_overrides_scope_x(&self) -> bool {
        self.scope_x && self.viewport_x
    }

    /// Both boundaries overflowed on Y; the viewport alignment is used.
    #[inline]
    pub const fn viewport_overrides_scope_y(&self) -> bool {
        self.scope_y && self.viewport_y
    }
}

/// A clamped point together with the overflow flags that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Normalized {
    pub point: ClampedPoint,
    pub overflow: Overflow,
}

/// Compute where to draw `target` for the given pointer.
///
/// Total over all `f64` inputs: no validation, no panics. NaN propagates
/// into the result.
#[inline]
pub fn normalize(pointer: Point, target: Size, scope: Rect, viewport: Size) -> ClampedPoint {
    normalize_detailed(pointer, target, scope, viewport).point
}

/// Like [`normalize`], but also reports which corrections fired.
pub fn normalize_detailed(
    pointer: Point,
    target: Size,
    scope: Rect,
    viewport: Size,
) -> Normalized {
    let overflow = Overflow::detect(pointer, target, scope, viewport);

    let mut x = pointer.x;
    let mut y = pointer.y;

    // Scope first, viewport second: the order is the policy.
    if overflow.scope_x {
        x = scope.right() - target.width;
    }
    if overflow.viewport_x {
        x = viewport.width - target.width;
    }

    if overflow.scope_y {
        y = scope.bottom() - target.height;
    }
    if overflow.viewport_y {
        y = viewport.height - target.height;
    }

    let point = ClampedPoint::new(x, y);
    if overflow.any() {
        trace!(
            pointer_x = pointer.x,
            pointer_y = pointer.y,
            scope_x = overflow.scope_x,
            scope_y = overflow.scope_y,
            viewport_x = overflow.viewport_x,
            viewport_y = overflow.viewport_y,
            normalized_x = x,
            normalized_y = y,
            "clamped position"
        );
    }

    Normalized { point, overflow }
}

/// A scope/viewport pair held fixed across repeated calls, e.g. for the
/// lifetime of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionNormalizer {
    pub scope: Rect,
    pub viewport: Size,
}

impl PositionNormalizer {
    pub const fn new(scope: Rect, viewport: Size) -> Self {
        Self { scope, viewport }
    }

    /// Replace the viewport, e.g. after a resize.
    #[must_use]
    pub const fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub const fn with_scope(mut self, scope: Rect) -> Self {
        self.scope = scope;
        self
    }

    #[inline]
    pub fn normalize(&self, pointer: Point, target: Size) -> ClampedPoint {
        normalize(pointer, target, self.scope, self.viewport)
    }

    #[inline]
    pub fn normalize_detailed(&self, pointer: Point, target: Size) -> Normalized {
        normalize_detailed(pointer, target, self.scope, self.viewport)
    }

    /// Validate all inputs, then normalize.
    ///
    /// Valid inputs give exactly the result of [`Self::normalize`].
    pub fn normalize_checked(
        &self,
        pointer: Point,
        target: Size,
    ) -> Result<ClampedPoint, GeometryError> {
        error::validate(pointer, target, self.scope, self.viewport)?;
        Ok(self.normalize(pointer, target))
    }
}
