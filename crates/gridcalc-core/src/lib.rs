//! # gridcalc-core
//!
//! Core data structures for the gridcalc spreadsheet engine.
//!
//! This crate provides the fundamental types used throughout gridcalc:
//! - [`Cell`] - A cell record (raw value, computed display value, validation)
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing and ranges
//! - [`Grid`] - The rectangular 2-D cell store
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellAddress, Grid};
//!
//! let mut grid = Grid::new();
//! let a1 = CellAddress::parse("A1").unwrap();
//! grid.set_raw(a1, "hello").unwrap();
//! assert_eq!(grid.get(a1).unwrap().raw_value, "hello");
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod grid;

// Re-exports for convenience
pub use address::{CellAddress, CellRange};
pub use cell::{Cell, CellStyle, DataType};
pub use error::{Error, Result};
pub use grid::Grid;

/// Default number of rows in a freshly constructed grid
pub const DEFAULT_ROWS: usize = 30;

/// Default number of columns in a freshly constructed grid
pub const DEFAULT_COLS: usize = 26;
