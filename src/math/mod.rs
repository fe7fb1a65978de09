pub mod projection;
pub mod vector;

use crate::error::{ConfigError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Absolute tolerance for near-zero determinants.
///
/// Governs the coplanarity test of point/triangle and segment/triangle,
/// the parallelism test of segment/segment and segment/triangle, the
/// closest-point distance of segment/segment, and the final interval
/// comparison of the general triangle/triangle test.
pub const EPS: f64 = 1e-12;

/// A validated absolute tolerance.
///
/// Defaults to [`EPS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a tolerance from an absolute epsilon.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTolerance` unless `eps` is finite and
    /// strictly positive. The near-zero tests are strict comparisons, so a
    /// zero tolerance would reject every coplanar configuration.
    pub fn new(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::InvalidTolerance(eps).into());
        }
        Ok(Self(eps))
    }

    /// Returns the epsilon value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(EPS)
    }
}
