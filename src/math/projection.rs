use crate::geometry::{Triangle2, Triangle3};

use super::{Point2, Point3};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Returns the axis most aligned with the triangle's normal.
///
/// Dropping this axis gives the best-conditioned 2D projection. Ties go to
/// the later axis.
#[must_use]
pub fn dominant_axis(t: &Triangle3) -> Axis {
    let n = t.normal();
    let (x, y, z) = (n.x.abs(), n.y.abs(), n.z.abs());

    if x > y {
        if x > z {
            Axis::X
        } else {
            Axis::Z
        }
    } else if y > z {
        Axis::Y
    } else {
        Axis::Z
    }
}

/// Drops the `axis` coordinate of a point.
#[must_use]
pub fn project_point(p: &Point3, axis: Axis) -> Point2 {
    match axis {
        Axis::X => Point2::new(p.y, p.z),
        Axis::Y => Point2::new(p.x, p.z),
        Axis::Z => Point2::new(p.x, p.y),
    }
}

/// Drops the `axis` coordinate of every vertex of a triangle.
#[must_use]
pub fn project_triangle(t: &Triangle3, axis: Axis) -> Triangle2 {
    let [a, b, c] = t.vertices();
    Triangle2::new(
        project_point(a, axis),
        project_point(b, axis),
        project_point(c, axis),
    )
}
