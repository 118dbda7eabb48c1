//! Error types for gridcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridcalc-core
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed A1-style cell reference
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    /// Malformed range syntax, or a range used where a single cell is required
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds for the current grid
    #[error("Row index {0} out of bounds (rows: {1})")]
    RowOutOfBounds(usize, usize),

    /// Column index out of bounds for the current grid
    #[error("Column index {0} out of bounds (columns: {1})")]
    ColumnOutOfBounds(usize, usize),
}
