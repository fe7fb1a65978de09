//! Predicates for pairs where at least one input has collapsed to a point
//! or a segment.

use crate::geometry::{Segment3, Triangle3};
use crate::math::projection::{dominant_axis, project_point, project_triangle};
use crate::math::vector::{cross, det2, dot, length};
use crate::math::{Point2, Point3};

/// Exact point equality.
#[must_use]
pub fn point_point(a: &Point3, b: &Point3) -> bool {
    a == b
}

/// Whether `p` lies on the segment.
///
/// Uses the exact distance identity `|ab| == |ap| + |pb|`, so points that
/// are on the segment only up to round-off are rejected.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_point(s: &Segment3, p: &Point3) -> bool {
    length(&s.start, &s.end) == length(&s.start, p) + length(p, &s.end)
}

/// Whether `p` lies in the closed triangle.
///
/// The point must be within `eps` of the triangle's plane (measured as the
/// triple product with the unnormalized normal); containment is then
/// decided in the dominant-axis projection.
#[must_use]
pub fn triangle_point(t: &Triangle3, p: &Point3, eps: f64) -> bool {
    let v0 = t.vertices()[0];
    if dot(&(p - v0), &t.normal()).abs() >= eps {
        return false;
    }

    let axis = dominant_axis(t);
    let [a, b, c] = *project_triangle(t, axis).vertices();
    let q = project_point(p, axis);

    inside_or_on(&a, &b, &c, &q) && inside_or_on(&b, &c, &a, &q) && inside_or_on(&c, &a, &b, &q)
}

/// Whether `p` is on the same side of the line `e0e1` as `reference`, or on
/// the line itself.
#[allow(clippy::float_cmp)]
fn inside_or_on(e0: &Point2, e1: &Point2, reference: &Point2, p: &Point2) -> bool {
    let dr = det2(e0, e1, reference);
    let dp = det2(e0, e1, p);
    dp == 0.0 || (dr > 0.0 && dp > 0.0) || (dr < 0.0 && dp < 0.0)
}

/// Whether two segments touch, within `eps`.
///
/// Solves for the closest points of the two carrier lines. For (nearly)
/// parallel segments every endpoint is pinned in turn and the closest
/// point on the other segment is tried instead.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn segment_segment(s1: &Segment3, s2: &Segment3, eps: f64) -> bool {
    let dir1 = s1.direction();
    let dir2 = s2.direction();
    let v = s1.start - s2.start;

    let a = dot(&dir1, &dir1);
    let b = dot(&dir1, &dir2);
    let c = dot(&dir2, &dir2);
    let d = dot(&dir1, &v);
    let e = dot(&dir2, &v);
    let det = a * c - b * b;

    let touches = |coef1: f64, coef2: f64| {
        if !(0.0..=1.0).contains(&coef1) || !(0.0..=1.0).contains(&coef2) {
            return false;
        }
        let gap = v + dir1 * coef1 - dir2 * coef2;
        dot(&gap, &gap) <= eps * eps
    };

    if det < eps {
        // Lines are almost parallel.
        return touches(0.0, e / c)
            || touches(1.0, (e + b) / c)
            || touches(-d / a, 0.0)
            || touches((b - d) / a, 1.0);
    }

    touches((b * e - c * d) / det, (a * e - b * d) / det)
}

/// Whether a segment meets the closed triangle, within `eps`.
///
/// Möller–Trumbore with the segment as a bounded ray. A segment parallel
/// to the triangle's plane only intersects when it lies in that plane, in
/// which case it is tested against the triangle's interior and edges.
#[must_use]
pub fn triangle_segment(t: &Triangle3, s: &Segment3, eps: f64) -> bool {
    let v0 = t.vertices()[0];
    let [e01, _, e02] = t.edges();
    let edge1 = e01.direction();
    let edge2 = e02.direction();
    let dir = s.direction();

    let p = cross(&dir, &edge2);
    let det = dot(&edge1, &p);

    if det.abs() < eps {
        if dot(&(s.start - v0), &t.normal()).abs() >= eps {
            return false;
        }
        return triangle_point(t, &s.start, eps)
            || triangle_point(t, &s.end, eps)
            || t.edges().iter().any(|edge| segment_segment(edge, s, eps));
    }

    let inv_det = 1.0 / det;
    let origin = s.start - v0;

    let u = dot(&origin, &p) * inv_det;
    if u < -eps || u > 1.0 + eps {
        return false;
    }

    let q = cross(&origin, &edge1);
    let v = dot(&dir, &q) * inv_det;
    if v < -eps || u + v > 1.0 + eps {
        return false;
    }

    let r = dot(&edge2, &q) * inv_det;
    (-eps..=1.0 + eps).contains(&r)
}
