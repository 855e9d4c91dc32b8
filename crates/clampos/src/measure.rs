#![forbid(unsafe_code)]

//! Measurement collaborators.
//!
//! The clamp itself works on plain values. Hosts with a live layout tree
//! implement these traits on their element handles and call
//! [`normalize_position`], which reads each collaborator once and then
//! delegates to [`normalize`].
//!
//! Scroll offsets are whatever the host's bounding-rectangle query already
//! reflects; nothing here adjusts for them.

use crate::geometry::{Point, Rect, Size};
use crate::normalize::{ClampedPoint, normalize};

/// Anything with a rendered box size.
pub trait Measure {
    /// Rendered inner width and height.
    fn client_size(&self) -> Size;
}

/// A container whose position in the viewport is known.
pub trait ScopeMeasure: Measure {
    /// Viewport-relative top-left corner.
    fn offset(&self) -> Point;

    /// Viewport-relative bounding rectangle.
    fn bounding_rect(&self) -> Rect {
        let origin = self.offset();
        let size = self.client_size();
        Rect::new(origin.x, origin.y, size.width, size.height)
    }
}

/// The visible display area.
pub trait ViewportMeasure {
    fn inner_size(&self) -> Size;
}

impl Measure for Size {
    fn client_size(&self) -> Size {
        *self
    }
}

impl ViewportMeasure for Size {
    fn inner_size(&self) -> Size {
        *self
    }
}

impl Measure for Rect {
    fn client_size(&self) -> Size {
        self.size()
    }
}

impl ScopeMeasure for Rect {
    fn offset(&self) -> Point {
        self.origin()
    }

    fn bounding_rect(&self) -> Rect {
        *self
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn client_size(&self) -> Size {
        (**self).client_size()
    }
}

impl<T: ScopeMeasure + ?Sized> ScopeMeasure for &T {
    fn offset(&self) -> Point {
        (**self).offset()
    }

    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }
}

impl<T: ViewportMeasure + ?Sized> ViewportMeasure for &T {
    fn inner_size(&self) -> Size {
        (**self).inner_size()
    }
}

/// Clamp `target` for `pointer` using live measurements.
///
/// The scope offset comes from [`ScopeMeasure::bounding_rect`]; the scope
/// extent comes from [`Measure::client_size`]. The two can differ when the
/// host's bounding box includes borders that the client box does not.
pub fn normalize_position<T, S, V>(
    pointer: Point,
    target: &T,
    scope: &S,
    viewport: &V,
) -> ClampedPoint
where
    T: Measure + ?Sized,
    S: ScopeMeasure + ?Sized,
    V: ViewportMeasure + ?Sized,
{
    let bounds = scope.bounding_rect();
    let extent = scope.client_size();
    let scope_rect = Rect::new(bounds.left, bounds.top, extent.width, extent.height);
    normalize(pointer, target.client_size(), scope_rect, viewport.inner_size())
}
