//! Grid error types.

use thiserror::Error;
use trilut_math::InterpError;

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while loading or sampling a grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// Invalid grid size or data length.
    #[error("invalid grid size: {0}")]
    InvalidSize(String),

    /// Grid index outside `[0, size - 1]`.
    #[error("index {index} out of range on axis {axis} (grid size {size})")]
    IndexOutOfRange {
        /// Axis the index belongs to (0, 1 or 2)
        axis: usize,
        /// Offending index
        index: i64,
        /// Grid resolution
        size: usize,
    },

    /// Query coordinate that cannot be placed on the grid.
    #[error("query coordinate {value} on axis {axis} is not finite")]
    NonFinite {
        /// Axis of the coordinate
        axis: usize,
        /// Offending value
        value: f64,
    },

    /// Source coordinate range that is not a positive finite number.
    #[error("invalid source extent: {0}")]
    InvalidExtent(f64),

    /// Parse error when loading LUT text.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Interpolation failed.
    #[error(transparent)]
    Interp(#[from] InterpError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
