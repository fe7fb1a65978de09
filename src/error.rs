use thiserror::Error;

/// Top-level error type for the checked entry points.
///
/// The predicates themselves never fail; errors only arise when validating
/// caller-supplied buffers or configuration.
#[derive(Debug, Error)]
pub enum IntersectError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to caller-supplied coordinate buffers.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("expected {expected} coordinates, got {actual}")]
    CoordinateCount { expected: usize, actual: usize },

    #[error("coordinate {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
}

/// Errors related to predicate configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`IntersectError`].
pub type Result<T> = std::result::Result<T, IntersectError>;
