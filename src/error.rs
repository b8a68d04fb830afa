//! Error types for footprint calculation and input handling

use std::path::PathBuf;
use thiserror::Error;

use crate::profile::Field;

/// Errors that can occur while accepting input or computing a footprint
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FootprintError {
    /// Car efficiency must be strictly positive (miles per gallon)
    #[error("Invalid car efficiency: {0} mpg (must be > 0)")]
    InvalidEfficiency(f64),

    #[error("Non-finite value for {field}")]
    NonFiniteInput { field: Field },

    /// Value outside the slider range, only raised with strict bounds enabled
    #[error("Value {value} for {field} is outside [{min}, {max}]")]
    OutOfBounds {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Failed to read profile {path}: {message}")]
    ProfileRead { path: PathBuf, message: String },

    #[error("Failed to parse profile: {0}")]
    ProfileParse(String),
}

/// Result type for footprint operations
pub type Result<T> = std::result::Result<T, FootprintError>;
