//! Convenience re-exports for common usage
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use gridcalc_core::{Cell, CellAddress, CellRange, CellStyle, DataType, Grid};
pub use gridcalc_formula::{evaluate_cell, recompute, RecomputeStats, ERROR_MARKER};
