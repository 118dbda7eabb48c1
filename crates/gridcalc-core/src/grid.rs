//! Grid store: the rectangular 2-D array of cells

use crate::address::{CellAddress, CellRange};
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::{DEFAULT_COLS, DEFAULT_ROWS};

/// The 2-D array of cells
///
/// Always rectangular: every row has the same length. Dimensions change only
/// through duplicate-row removal (which preserves the row count by appending
/// blanks) or through a full replacement via [`Grid::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    cols: usize,
}

impl Grid {
    /// Create a grid with the default dimensions (30 rows x 26 columns), all
    /// cells blank
    pub fn new() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create a blank grid with explicit dimensions
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            cells: (0..rows).map(|_| vec![Cell::new(); cols]).collect(),
            cols,
        }
    }

    /// Replace the entire grid with caller-supplied rows of raw text
    ///
    /// Dimensions become whatever is supplied; ragged input is padded with
    /// blank cells so the grid stays rectangular. Each cell's display value
    /// is set to its raw text; the caller is expected to recompute.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let cells = rows
            .into_iter()
            .map(|row| {
                let mut out: Vec<Cell> = row.into_iter().map(Cell::from_raw).collect();
                out.resize(cols, Cell::new());
                out
            })
            .collect();
        Self { cells, cols }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn check(&self, addr: CellAddress) -> Result<()> {
        if addr.row >= self.rows() {
            return Err(Error::RowOutOfBounds(addr.row, self.rows()));
        }
        if addr.col >= self.cols {
            return Err(Error::ColumnOutOfBounds(addr.col, self.cols));
        }
        Ok(())
    }

    /// Get a cell by address
    ///
    /// Out-of-range access is an error, never silent clamping.
    pub fn get(&self, addr: CellAddress) -> Result<&Cell> {
        self.check(addr)?;
        Ok(&self.cells[addr.row][addr.col])
    }

    /// Get a mutable cell by address
    pub fn get_mut(&mut self, addr: CellAddress) -> Result<&mut Cell> {
        self.check(addr)?;
        Ok(&mut self.cells[addr.row][addr.col])
    }

    /// Set a cell's raw value and re-run its data-type validation
    ///
    /// Does not recompute display values; recomputation is a separate,
    /// explicit call by the owner of the grid.
    pub fn set_raw<S: Into<String>>(&mut self, addr: CellAddress, text: S) -> Result<()> {
        let cell = self.get_mut(addr)?;
        cell.raw_value = text.into();
        cell.validate();
        Ok(())
    }

    /// Get a cell's display value
    pub fn display_value(&self, addr: CellAddress) -> Result<&str> {
        Ok(&self.get(addr)?.display_value)
    }

    /// Collect the display values covered by a range, rows outer and columns
    /// inner, inclusive bounds
    ///
    /// The whole range must lie within the grid.
    pub fn range_values(&self, range: &CellRange) -> Result<Vec<String>> {
        self.check(range.end)?;
        Ok(range
            .cells()
            .map(|addr| self.cells[addr.row][addr.col].display_value.clone())
            .collect())
    }

    /// Remove a single row, shifting later rows up
    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        if index >= self.rows() {
            return Err(Error::RowOutOfBounds(index, self.rows()));
        }
        self.cells.remove(index);
        Ok(())
    }

    /// Append a blank row at the bottom
    pub fn append_blank_row(&mut self) {
        self.cells.push(vec![Cell::new(); self.cols]);
    }

    /// Remove several rows at once, then append blank rows to restore the
    /// original row count
    ///
    /// The new row sequence is built by filtering, so callers never deal with
    /// index shifting; duplicate indices are ignored.
    pub fn remove_rows(&mut self, indices: &[usize]) -> Result<()> {
        for &index in indices {
            if index >= self.rows() {
                return Err(Error::RowOutOfBounds(index, self.rows()));
            }
        }

        let before = self.rows();
        let mut row_idx = 0;
        self.cells.retain(|_| {
            let keep = !indices.contains(&row_idx);
            row_idx += 1;
            keep
        });
        while self.rows() < before {
            self.append_blank_row();
        }
        Ok(())
    }

    /// Snapshot every cell's display value, for bulk export
    ///
    /// Quoting and escaping are the caller's responsibility.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.display_value.clone()).collect())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
