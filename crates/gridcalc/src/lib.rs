//! # gridcalc
//!
//! A spreadsheet formula evaluation engine: a rectangular grid of cells
//! holding literal text or formulas, a fixed function set over A1-style
//! references and ranges, and an eager whole-grid recompute model.
//!
//! The engine is the computational core only. Rendering, selection UI, file
//! I/O, and styling decisions belong to the caller, which talks to the
//! engine through cell coordinates and receives cell records back.
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut grid = Grid::new();
//! grid.set_raw(CellAddress::parse("A1").unwrap(), "10").unwrap();
//! grid.set_raw(CellAddress::parse("A2").unwrap(), "32").unwrap();
//! grid.set_raw(CellAddress::parse("A3").unwrap(), "=SUM(A1:A2)").unwrap();
//!
//! recompute(&mut grid);
//! assert_eq!(grid.display_value(CellAddress::parse("A3").unwrap()).unwrap(), "42");
//! ```

pub mod prelude;

pub use gridcalc_core::{
    Cell, CellAddress, CellRange, CellStyle, DataType, Error, Grid, Result, DEFAULT_COLS,
    DEFAULT_ROWS,
};
pub use gridcalc_formula::{
    evaluate_cell, evaluate_raw, is_formula, parse_formula, recompute, Formula, FormulaError,
    FormulaResult, RecomputeStats, ERROR_MARKER, FORMULA_MARKER,
};
