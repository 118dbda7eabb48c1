//! # gridcalc-formula
//!
//! Formula parser, function library, and evaluation driver for gridcalc.
//!
//! This crate provides:
//! - Formula parsing (raw cell text → [`Formula`])
//! - The fixed function set (SUM, AVERAGE, MIN, MAX, COUNT, TRIM, UPPER,
//!   LOWER, FIND_AND_REPLACE, REMOVE_DUPLICATES)
//! - The single-pass recompute driver
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellAddress, Grid};
//! use gridcalc_formula::recompute;
//!
//! let mut grid = Grid::new();
//! grid.set_raw(CellAddress::parse("A1").unwrap(), "5").unwrap();
//! grid.set_raw(CellAddress::parse("B1").unwrap(), "=SUM(A1:A1)").unwrap();
//! recompute(&mut grid);
//! assert_eq!(grid.display_value(CellAddress::parse("B1").unwrap()).unwrap(), "5");
//! ```

pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;

pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate_cell, evaluate_raw, recompute, RecomputeStats, ERROR_MARKER};
pub use parser::{is_formula, parse_formula, Formula, FORMULA_MARKER};
