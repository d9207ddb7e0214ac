//! Error types for curve and transform computations.

use thiserror::Error;

/// Precondition failures. Every fallible operation fails fast with one of
/// these and returns no partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EctError {
    /// No points were given, so there is no Euler characteristic to track.
    #[error("point path is empty")]
    EmptyInput,

    /// The sweep direction is the zero vector or has a non-finite component.
    #[error("invalid sweep direction {0:?}: must be finite and non-zero")]
    InvalidDirection([f32; 3]),

    /// `end_time` is negative, non-finite, or too large to step through.
    #[error("invalid end time {end_time}: must be finite and within [0, {max}]")]
    InvalidRange { end_time: f32, max: f32 },

    /// A point of the path has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    /// The sweep starting point has a NaN or infinite coordinate.
    #[error("starting point {0:?} has a non-finite coordinate")]
    NonFiniteStartingPoint([f32; 3]),

    /// A transform was requested over an empty set of directions.
    #[error("at least one sweep direction is required")]
    NoDirections,

    /// Two feature vectors of different length were compared.
    #[error("feature vectors differ in length ({left} vs {right})")]
    ShapeMismatch { left: usize, right: usize },

    /// A stored transform whose values do not split into one non-empty curve
    /// per direction.
    #[error("transform holds {values} values, expected {directions} x {samples}, both non-zero")]
    MalformedTransform {
        directions: usize,
        samples: usize,
        values: usize,
    },
}

/// Result type for curve and transform operations.
pub type Result<T> = std::result::Result<T, EctError>;
