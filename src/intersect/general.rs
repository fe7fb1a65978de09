//! Intersection of two proper triangles in general position.
//!
//! Each triangle is first tested against the other's supporting plane. If
//! neither plane separates them, both triangles are rotated so that the
//! vertex alone on its side of the other plane comes first, and two
//! orientation tests compare the intervals the triangles cut on the line
//! where the planes meet (Guigue–Devillers).

use tracing::trace;

use crate::geometry::Triangle3;
use crate::math::vector::det3;

use super::coplanar::coplanar_triangles;

/// Side of a plane a vertex lies on, from the sign of an orientation
/// determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Positive,
    Negative,
    On,
}

impl Side {
    /// Exact sign; NaN counts as [`Side::On`].
    fn of(d: f64) -> Self {
        if d > 0.0 {
            Side::Positive
        } else if d < 0.0 {
            Side::Negative
        } else {
            Side::On
        }
    }

    fn opposite(self) -> Self {
        match self {
            Side::Positive => Side::Negative,
            Side::Negative => Side::Positive,
            Side::On => Side::On,
        }
    }
}

/// Orientation of each vertex of `t` against the plane of `plane`.
fn orientations(plane: &Triangle3, t: &Triangle3) -> [f64; 3] {
    let [a, b, c] = plane.vertices();
    let vertices = *t.vertices();
    vertices.map(|v| det3(a, b, c, &v))
}

/// All three vertices strictly on the same side.
fn separated(d: [f64; 3]) -> bool {
    d.iter().all(|&x| x > 0.0) || d.iter().all(|&x| x < 0.0)
}

/// Finds the vertex that is alone on its side of the other plane.
///
/// Returns its index and the side it is taken to be on. When the other two
/// vertices share a strict side and this one lies on the plane, the
/// on-plane vertex is the isolated one and counts as being on the opposite
/// side. `None` when every vertex is on the plane.
fn isolated_vertex(d: [f64; 3]) -> Option<(usize, Side)> {
    let sides = d.map(Side::of);

    let strict = (0..3).find(|&i| {
        let s = sides[i];
        s != Side::On && sides[(i + 1) % 3] != s && sides[(i + 2) % 3] != s
    });
    if let Some(i) = strict {
        return Some((i, sides[i]));
    }

    (0..3).find_map(|i| {
        let (j, k) = (sides[(i + 1) % 3], sides[(i + 2) % 3]);
        (sides[i] == Side::On && j == k && j != Side::On).then_some((i, j.opposite()))
    })
}

/// Whether two proper triangles intersect, boundaries included.
///
/// `eps` only relaxes the two final interval comparisons; the plane
/// separation and coplanarity tests use exact signs.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn proper_triangles(t1: &Triangle3, t2: &Triangle3, eps: f64) -> bool {
    let d1 = orientations(t2, t1);
    if d1.iter().all(|&x| x == 0.0) {
        trace!("triangles are coplanar");
        return coplanar_triangles(t1, t2);
    }
    if separated(d1) {
        trace!(?d1, "plane of second triangle separates");
        return false;
    }

    let d2 = orientations(t1, t2);
    if separated(d2) {
        trace!(?d2, "plane of first triangle separates");
        return false;
    }

    let (Some((i1, side1)), Some((i2, side2))) = (isolated_vertex(d1), isolated_vertex(d2))
    else {
        // Only reachable when round-off puts one triangle inside the
        // other's plane but not the reverse.
        trace!(?d1, ?d2, "no isolated vertex, falling back to coplanar test");
        return coplanar_triangles(t1, t2);
    };

    let mut a = t1.rotated(i1);
    let mut b = t2.rotated(i2);
    if side2 == Side::Positive {
        a = a.flipped();
    }
    if side1 == Side::Positive {
        b = b.flipped();
    }

    let [p1, q1, r1] = a.vertices();
    let [p2, q2, r2] = b.vertices();
    let lower = det3(p1, q1, p2, q2);
    let upper = det3(p1, r1, r2, p2);
    trace!(lower, upper, "interval test");

    lower >= -eps && upper >= -eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPS;

    fn t(c: [f64; 9]) -> Triangle3 {
        Triangle3::from_coords(&c)
    }

    /// Every vertex order of both triangles, in both argument orders.
    fn all_orders(a: [f64; 9], b: [f64; 9]) -> Vec<bool> {
        const PERMS: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        let (a, b) = (t(a), t(b));
        let reorder = |tri: &Triangle3, [i, j, k]: [usize; 3]| {
            let v = tri.vertices();
            Triangle3::new(v[i], v[j], v[k])
        };

        let mut out = Vec::new();
        for pa in PERMS {
            for pb in PERMS {
                let (x, y) = (reorder(&a, pa), reorder(&b, pb));
                out.push(proper_triangles(&x, &y, EPS));
                out.push(proper_triangles(&y, &x, EPS));
            }
        }
        out
    }

    fn always(a: [f64; 9], b: [f64; 9], expected: bool) {
        assert!(all_orders(a, b).into_iter().all(|r| r == expected));
    }

    const FLOOR: [f64; 9] = [0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0];

    // ── Side / isolated_vertex ──

    #[test]
    fn side_of_uses_exact_sign() {
        assert_eq!(Side::of(1e-300), Side::Positive);
        assert_eq!(Side::of(-1e-300), Side::Negative);
        assert_eq!(Side::of(0.0), Side::On);
        assert_eq!(Side::of(-0.0), Side::On);
        assert_eq!(Side::of(f64::NAN), Side::On);
    }

    #[test]
    fn isolated_vertex_alone_on_strict_side() {
        assert_eq!(isolated_vertex([1.0, -1.0, -1.0]), Some((0, Side::Positive)));
        assert_eq!(isolated_vertex([-1.0, -1.0, 2.0]), Some((2, Side::Positive)));
        assert_eq!(isolated_vertex([3.0, -2.0, 3.0]), Some((1, Side::Negative)));
    }

    #[test]
    fn isolated_vertex_with_one_on_plane_and_others_split() {
        assert_eq!(isolated_vertex([0.0, 1.0, -1.0]), Some((1, Side::Positive)));
    }

    #[test]
    fn isolated_vertex_with_two_on_plane() {
        assert_eq!(isolated_vertex([0.0, 0.0, -2.0]), Some((2, Side::Negative)));
    }

    #[test]
    fn on_plane_vertex_is_isolated_when_others_agree() {
        assert_eq!(isolated_vertex([0.0, 1.0, 1.0]), Some((0, Side::Negative)));
        assert_eq!(isolated_vertex([-4.0, 0.0, -4.0]), Some((1, Side::Positive)));
    }

    #[test]
    fn no_isolated_vertex_when_all_on_plane() {
        assert_eq!(isolated_vertex([0.0, 0.0, 0.0]), None);
        assert_eq!(isolated_vertex([f64::NAN; 3]), None);
    }

    // ── plane separation ──

    #[test]
    fn triangle_above_plane_is_separated() {
        always([0.0, 0.0, 1.0, 1.0, 0.0, 2.0, 0.0, 1.0, 3.0], FLOOR, false);
    }

    #[test]
    fn second_triangle_beside_first_plane_is_separated() {
        let wall = [0.0, 0.0, -1.0, 0.0, 4.0, -1.0, 0.0, 0.0, 1.0];
        let floor = [1.0, 0.0, 0.0, 3.0, 0.0, 0.0, 1.0, 3.0, 0.0];
        always(wall, floor, false);
    }

    // ── interval test ──

    #[test]
    fn crossing_triangles_intersect() {
        always([1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0, -3.0, 0.0], FLOOR, true);
    }

    #[test]
    fn disjoint_intervals_on_shared_line() {
        always([3.0, 3.0, -1.0, 3.0, 3.0, 1.0, 5.0, 5.0, 0.0], FLOOR, false);
    }

    #[test]
    fn vertex_touching_face_intersects() {
        always([1.0, 1.0, 0.0, 1.0, 1.0, 2.0, 2.0, 1.0, 3.0], FLOOR, true);
    }

    #[test]
    fn edge_lying_on_face_intersects() {
        always([1.0, 1.0, 0.0, 3.0, 1.0, 0.0, 1.0, 1.0, 2.0], FLOOR, true);
    }

    #[test]
    fn large_crossing_triangles_intersect() {
        always(
            [-78.0, 99.0, 40.0, -21.0, -72.0, 63.0, -19.0, -78.0, -83.0],
            [9.0, 5.0, -21.0, 96.0, 77.0, -51.0, -95.0, -1.0, -16.0],
            true,
        );
    }

    // ── coplanar dispatch ──

    #[test]
    fn coplanar_pair_goes_to_coplanar_test() {
        always([1.0, 1.0, 0.0, 5.0, 1.0, 0.0, 1.0, 5.0, 0.0], FLOOR, true);
        always([5.0, 5.0, 0.0, 9.0, 5.0, 0.0, 5.0, 9.0, 0.0], FLOOR, false);
    }
}
