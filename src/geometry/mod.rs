pub mod classify;

pub use classify::{classify, DegenerateKind};

use crate::error::{InputError, IntersectError};
use crate::math::vector::det2;
use crate::math::{Point2, Point3, Vector3};

/// A line segment between two points in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3 {
    pub start: Point3,
    pub end: Point3,
}

impl Segment3 {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Builds a segment from two consecutive `(x, y, z)` triples.
    #[must_use]
    pub fn from_coords(c: &[f64; 6]) -> Self {
        Self::new(
            Point3::new(c[0], c[1], c[2]),
            Point3::new(c[3], c[4], c[5]),
        )
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.end - self.start
    }
}

/// A triangle in 3D space, with vertices in caller-supplied order.
///
/// The winding is not assumed; predicates that need a particular
/// orientation work on reordered copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3 {
    vertices: [Point3; 3],
}

impl Triangle3 {
    /// Creates a triangle from three vertices.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Builds a triangle from three consecutive `(x, y, z)` triples.
    #[must_use]
    pub fn from_coords(c: &[f64; 9]) -> Self {
        Self::new(
            Point3::new(c[0], c[1], c[2]),
            Point3::new(c[3], c[4], c[5]),
            Point3::new(c[6], c[7], c[8]),
        )
    }

    /// Returns the three vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Unnormalized normal `(v1 - v0) × (v2 - v0)`.
    ///
    /// Zero for degenerate triangles.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a))
    }

    /// The edges `v0v1`, `v1v2` and `v0v2`.
    #[must_use]
    pub fn edges(&self) -> [Segment3; 3] {
        let [a, b, c] = self.vertices;
        [Segment3::new(a, b), Segment3::new(b, c), Segment3::new(a, c)]
    }

    /// Cyclic permutation moving vertex `start` to position 0.
    pub(crate) fn rotated(self, start: usize) -> Self {
        let v = self.vertices;
        Self {
            vertices: [v[start % 3], v[(start + 1) % 3], v[(start + 2) % 3]],
        }
    }

    /// Reverses the winding by swapping vertices 1 and 2.
    pub(crate) fn flipped(self) -> Self {
        let [a, b, c] = self.vertices;
        Self {
            vertices: [a, c, b],
        }
    }
}

impl TryFrom<&[f64]> for Triangle3 {
    type Error = IntersectError;

    /// Builds a triangle from a slice of nine finite coordinates.
    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        let coords: &[f64; 9] = coords.try_into().map_err(|_| InputError::CoordinateCount {
            expected: 9,
            actual: coords.len(),
        })?;
        if let Some((index, &value)) = coords.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InputError::NonFinite { index, value }.into());
        }
        Ok(Self::from_coords(coords))
    }
}

/// A triangle projected onto an axis-aligned plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2 {
    vertices: [Point2; 3],
}

impl Triangle2 {
    /// Creates a 2D triangle from three vertices.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Twice the signed area; non-negative for counter-clockwise winding.
    #[must_use]
    pub fn signed_area2(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        det2(a, b, c)
    }

    /// Returns the triangle with counter-clockwise winding, swapping the
    /// last two vertices if needed.
    #[must_use]
    pub fn counter_clockwise(self) -> Self {
        if self.signed_area2() < 0.0 {
            let [a, b, c] = self.vertices;
            Self::new(a, c, b)
        } else {
            self
        }
    }
}
