//! Scalar and vector primitives shared by every predicate.
//!
//! The determinant sign convention is the contract the higher predicates
//! rely on: a positive [`det2`] means `(a, b, c)` turns counter-clockwise.

use super::{Point2, Point3, Vector3};

/// Dot product of two vectors.
#[must_use]
pub fn dot(u: &Vector3, v: &Vector3) -> f64 {
    u.dot(v)
}

/// Cross product of two vectors.
#[must_use]
pub fn cross(u: &Vector3, v: &Vector3) -> Vector3 {
    u.cross(v)
}

/// Euclidean distance from `p` to `q`.
#[must_use]
pub fn length(p: &Point3, q: &Point3) -> f64 {
    (q - p).norm()
}

/// Signed volume of the tetrahedron `(a, b, c, d)`, times six.
///
/// Computed as the determinant of the rows `a - d`, `b - d`, `c - d`,
/// expanded term by term (`aei + bfg + cdh - ceg - bdi - afh`) so that
/// integer-valued inputs of moderate size give exact results.
#[must_use]
pub fn det3(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> f64 {
    let r0 = a - d;
    let r1 = b - d;
    let r2 = c - d;

    (r0.x * r1.y * r2.z) + (r0.y * r1.z * r2.x) + (r0.z * r1.x * r2.y)
        - (r0.z * r1.y * r2.x)
        - (r0.y * r1.x * r2.z)
        - (r0.x * r1.z * r2.y)
}

/// Signed area of the triangle `(a, b, c)`, times two.
///
/// Determinant of the rows `a - c`, `b - c`.
#[must_use]
pub fn det2(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let r0 = a - c;
    let r1 = b - c;
    r0.x * r1.y - r0.y * r1.x
}
