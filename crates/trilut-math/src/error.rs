//! Interpolation error types.

use thiserror::Error;

/// Result type for interpolation operations.
pub type InterpResult<T> = Result<T, InterpError>;

/// Errors that can occur during interpolation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpError {
    /// Wrong number of corner points for the interpolation order.
    #[error("expected {expected} corner points, got {found}")]
    Arity {
        /// Required number of corners
        expected: usize,
        /// Number of corners supplied
        found: usize,
    },

    /// Query coordinate is not bounded by the supplied endpoints.
    #[error("coordinate {x} is outside [{low}, {high}]")]
    OutOfRange {
        /// Query coordinate
        x: f64,
        /// Low endpoint coordinate
        low: f64,
        /// High endpoint coordinate
        high: f64,
    },

    /// Corners that must share a coordinate do not.
    #[error("misaligned corners: {0}")]
    Misaligned(String),
}
