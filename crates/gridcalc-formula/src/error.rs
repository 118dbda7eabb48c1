//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
///
/// These never escape the engine: the evaluator maps every variant to the
/// `#ERROR` display convention at its outer boundary. The taxonomy stays
/// precise internally so tests can distinguish failure modes.
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Reference or range resolution failure, including out-of-grid access
    #[error(transparent)]
    Ref(#[from] gridcalc_core::Error),

    /// Formula keyword not in the supported set
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Argument list does not match the function's expected pattern
    #[error("Malformed arguments: {0}")]
    MalformedArguments(String),

    /// Structural parse failure (missing marker or parentheses)
    #[error("Parse error: {0}")]
    Parse(String),
}
