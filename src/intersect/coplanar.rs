//! Overlap test for two triangles lying in the same plane.
//!
//! Both triangles are projected to 2D and made counter-clockwise. The first
//! vertex of triangle 1 is located relative to triangle 2 (inside, beyond
//! one edge, or in a vertex wedge), triangle 2 is rotated into the
//! canonical position for that region, and a fixed tree of orientation
//! tests decides the overlap (Guigue–Devillers).

use crate::geometry::{Triangle2, Triangle3};
use crate::math::projection::{dominant_axis, project_triangle};
use crate::math::vector::det2;
use crate::math::Point2;

/// Cyclic permutation applied to triangle 2 before the region test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    /// `(p2, q2, r2)`
    None,
    /// `(q2, r2, p2)`
    Once,
    /// `(r2, p2, q2)`
    Twice,
}

impl Rotation {
    fn apply(self, [p, q, r]: [Point2; 3]) -> [Point2; 3] {
        match self {
            Rotation::None => [p, q, r],
            Rotation::Once => [q, r, p],
            Rotation::Twice => [r, p, q],
        }
    }
}

/// Where `p1` falls relative to a counter-clockwise triangle 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    /// Inside or on the boundary.
    Inside,
    /// Beyond the edge that becomes `r2p2` after rotation.
    Edge(Rotation),
    /// In the wedge of the vertex that becomes `r2` after rotation.
    Vertex(Rotation),
}

impl Region {
    /// Classifies from the signed areas of `p1` against the edges `p2q2`,
    /// `q2r2` and `r2p2`.
    fn locate(d: [f64; 3]) -> Self {
        match (d[0] >= 0.0, d[1] >= 0.0, d[2] >= 0.0) {
            (true, true, true) => Region::Inside,
            (true, true, false) => Region::Edge(Rotation::None),
            (false, true, true) => Region::Edge(Rotation::Once),
            (true, false, true) => Region::Edge(Rotation::Twice),
            (true, false, false) => Region::Vertex(Rotation::None),
            (false, true, false) => Region::Vertex(Rotation::Once),
            (false, false, _) => Region::Vertex(Rotation::Twice),
        }
    }
}

/// Whether two coplanar triangles overlap, boundaries included.
///
/// Both are projected along the first triangle's dominant axis.
#[must_use]
pub fn coplanar_triangles(t1: &Triangle3, t2: &Triangle3) -> bool {
    let axis = dominant_axis(t1);
    triangles_overlap_2d(&project_triangle(t1, axis), &project_triangle(t2, axis))
}

/// Whether two 2D triangles overlap, boundaries included.
///
/// Winding of either input is normalized first.
#[must_use]
pub fn triangles_overlap_2d(t1: &Triangle2, t2: &Triangle2) -> bool {
    let [p1, q1, r1] = *t1.counter_clockwise().vertices();
    let [p2, q2, r2] = *t2.counter_clockwise().vertices();

    let d = [det2(&p2, &q2, &p1), det2(&q2, &r2, &p1), det2(&r2, &p2, &p1)];

    match Region::locate(d) {
        Region::Inside => true,
        Region::Edge(rotation) => {
            let [p2, q2, r2] = rotation.apply([p2, q2, r2]);
            edge_region_overlap([p1, q1, r1], [p2, q2, r2])
        }
        Region::Vertex(rotation) => {
            let [p2, q2, r2] = rotation.apply([p2, q2, r2]);
            vertex_region_overlap([p1, q1, r1], [p2, q2, r2])
        }
    }
}

/// `p1` lies beyond the edge `r2p2` and on the inner side of the other two.
fn edge_region_overlap([p1, q1, r1]: [Point2; 3], [p2, _q2, r2]: [Point2; 3]) -> bool {
    if det2(&r2, &p2, &q1) >= 0.0 {
        if det2(&p1, &p2, &q1) >= 0.0 {
            return det2(&p1, &q1, &r2) >= 0.0;
        }
        return det2(&q1, &r1, &p2) >= 0.0 && det2(&r1, &p1, &p2) >= 0.0;
    }

    if det2(&r2, &p2, &r1) >= 0.0 && det2(&p1, &p2, &r1) >= 0.0 {
        return det2(&p1, &r1, &r2) >= 0.0 || det2(&q1, &r1, &r2) >= 0.0;
    }
    false
}

/// `p1` lies in the wedge beyond vertex `r2`.
fn vertex_region_overlap([p1, q1, r1]: [Point2; 3], [p2, q2, r2]: [Point2; 3]) -> bool {
    if det2(&r2, &p2, &q1) >= 0.0 {
        if det2(&r2, &q2, &q1) <= 0.0 {
            if det2(&p1, &p2, &q1) > 0.0 {
                return det2(&p1, &q2, &q1) <= 0.0;
            }
            return det2(&p1, &p2, &r1) >= 0.0 && det2(&q1, &r1, &p2) >= 0.0;
        }
        return det2(&p1, &q2, &q1) <= 0.0
            && det2(&r2, &q2, &r1) <= 0.0
            && det2(&q1, &r1, &q2) >= 0.0;
    }

    if det2(&r2, &p2, &r1) >= 0.0 {
        if det2(&q1, &r1, &r2) >= 0.0 {
            return det2(&p1, &p2, &r1) >= 0.0;
        }
        return det2(&q1, &r1, &q2) >= 0.0 && det2(&r2, &r1, &q2) >= 0.0;
    }
    false
}
