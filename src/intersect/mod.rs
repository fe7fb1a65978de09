//! Triangle/triangle intersection, including inputs that collapse to a
//! point or a segment.
//!
//! [`triangle_triangle`] classifies both inputs and hands each pair to the
//! matching predicate in [`degenerate`], [`coplanar`] or [`general`]. The
//! crate-level [`intersects`] family wraps it for flat coordinate arrays.

pub mod coplanar;
pub mod degenerate;
pub mod general;

use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::{classify, DegenerateKind, Triangle3};
use crate::math::Tolerance;

/// Whether two triangles share at least one point.
///
/// Either input may be degenerate. Vertex order and argument order do not
/// affect the result, up to floating-point round-off in the tolerant tests.
#[must_use]
pub fn triangle_triangle(t1: &Triangle3, t2: &Triangle3, eps: f64) -> bool {
    use DegenerateKind::{Point, Proper, Segment};

    match (classify(t1), classify(t2)) {
        (Point(a), Point(b)) => {
            trace!("point/point");
            degenerate::point_point(&a, &b)
        }
        (Point(p), Segment(s)) | (Segment(s), Point(p)) => {
            trace!("segment/point");
            degenerate::segment_point(&s, &p)
        }
        (Point(p), Proper(t)) | (Proper(t), Point(p)) => {
            trace!("triangle/point");
            degenerate::triangle_point(&t, &p, eps)
        }
        (Segment(a), Segment(b)) => {
            trace!("segment/segment");
            degenerate::segment_segment(&a, &b, eps)
        }
        (Segment(s), Proper(t)) | (Proper(t), Segment(s)) => {
            trace!("triangle/segment");
            degenerate::triangle_segment(&t, &s, eps)
        }
        (Proper(a), Proper(b)) => {
            trace!("triangle/triangle");
            general::proper_triangles(&a, &b, eps)
        }
    }
}

/// Whether two triangles, each given as nine coordinates
/// `[x0, y0, z0, x1, y1, z1, x2, y2, z2]`, intersect.
///
/// Uses the default [`Tolerance`].
///
/// # Examples
///
/// ```
/// let a = [3.0, 3.0, 4.0, 3.0, -1.0, 4.0, 1.5, 1.5, 4.0];
/// let b = [10.0, 5.0, 4.0, -1.0, 0.0, 4.0, 7.0, -3.0, 4.0];
/// assert!(tritri::intersects(&a, &b));
/// ```
#[must_use]
pub fn intersects(t1: &[f64; 9], t2: &[f64; 9]) -> bool {
    intersects_with(t1, t2, Tolerance::default())
}

/// Same as [`intersects`] with an explicit tolerance.
#[must_use]
pub fn intersects_with(t1: &[f64; 9], t2: &[f64; 9], tolerance: Tolerance) -> bool {
    triangle_triangle(
        &Triangle3::from_coords(t1),
        &Triangle3::from_coords(t2),
        tolerance.value(),
    )
}

/// Checked variant of [`intersects_with`] for caller buffers of unknown
/// length.
///
/// # Errors
///
/// Returns `InputError::CoordinateCount` if either slice does not hold
/// exactly nine values, or `InputError::NonFinite` if any coordinate is NaN
/// or infinite.
///
/// # Examples
///
/// ```
/// use tritri::{try_intersects, Tolerance};
///
/// let point = [1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0];
/// let floor = [0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0];
/// assert!(try_intersects(&point, &floor, Tolerance::default()).unwrap());
/// assert!(try_intersects(&point[..6], &floor, Tolerance::default()).is_err());
/// ```
pub fn try_intersects(t1: &[f64], t2: &[f64], tolerance: Tolerance) -> Result<bool> {
    let parse = |coords: &[f64]| {
        Triangle3::try_from(coords).inspect_err(|err| debug!(%err, "rejected triangle input"))
    };
    let (a, b) = (parse(t1)?, parse(t2)?);
    Ok(triangle_triangle(&a, &b, tolerance.value()))
}
