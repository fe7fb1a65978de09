use crate::math::vector::length;
use crate::math::Point3;

use super::{Segment3, Triangle3};

/// What a three-vertex input actually describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DegenerateKind {
    /// All three vertices coincide.
    Point(Point3),
    /// The vertices are collinear; holds the two extreme vertices.
    Segment(Segment3),
    /// A non-degenerate triangle.
    Proper(Triangle3),
}

/// Classifies a triangle as a point, a segment or a proper triangle.
///
/// Collinearity is decided by exact equality of one edge length with the
/// sum of the other two, so floating-point round-off can make an exactly
/// collinear triple come out [`Proper`](DegenerateKind::Proper), or a
/// slightly bent one come out [`Segment`](DegenerateKind::Segment).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn classify(t: &Triangle3) -> DegenerateKind {
    let [v0, v1, v2] = *t.vertices();
    if v0 == v1 && v0 == v2 {
        return DegenerateKind::Point(v0);
    }

    let l1 = length(&v0, &v1);
    let l2 = length(&v0, &v2);
    let l3 = length(&v1, &v2);

    if l2 == l1 + l3 {
        // v1 is the middle vertex
        DegenerateKind::Segment(Segment3::new(v0, v2))
    } else if l3 == l1 + l2 {
        // v0 is the middle vertex
        DegenerateKind::Segment(Segment3::new(v2, v1))
    } else if l1 == l2 + l3 {
        DegenerateKind::Segment(Segment3::new(v0, v1))
    } else {
        DegenerateKind::Proper(*t)
    }
}
