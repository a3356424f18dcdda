//! Validation errors

use crate::float_types::Real;
use nalgebra::Point3;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidCoordinate) A vertex has a NaN or infinite coordinate
    #[error("(InvalidCoordinate) Vertex {vertex} of triangle {triangle} has a NaN or infinite coordinate: {point}")]
    InvalidCoordinate {
        triangle: usize,
        vertex: usize,
        point: Point3<Real>,
    },
    /// (NonPositiveDimension) A shape parameter is zero, negative or not finite
    #[error("(NonPositiveDimension) {name} must be a finite value > 0, got {value}")]
    NonPositiveDimension { name: &'static str, value: Real },
}

impl ValidationError {
    /// Check that a builder parameter is finite and strictly positive.
    pub(crate) fn check_dimension(name: &'static str, value: Real) -> Result<Real, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(ValidationError::NonPositiveDimension { name, value })
        }
    }
}
