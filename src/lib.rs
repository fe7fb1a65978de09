//! Boolean intersection test for two triangles in 3D space.
//!
//! Inputs whose vertices coincide or are collinear are treated as the point
//! or segment they collapse to, so every pairing of point, segment and
//! triangle is answered.
//!
//! ```
//! let a = [-1.0, 4.0, 3.0, 3.0, 5.0, -2.0, -4.0, -7.0, 1.0];
//! let b = [3.0, -5.0, -4.0, -2.5, -5.7, 0.0, 6.0, 1.6, 2.0];
//! assert!(!tritri::intersects(&a, &b));
//! ```

pub mod error;
pub mod geometry;
pub mod intersect;
pub mod math;

pub use error::{IntersectError, Result};
pub use geometry::{classify, DegenerateKind, Segment3, Triangle3};
pub use intersect::{intersects, intersects_with, triangle_triangle, try_intersects};
pub use math::{Tolerance, EPS};
