//! Cell address and range types

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "B12")
///
/// Addresses combine a column letter run (A, B, ... Z, AA, AB, ...) with a
/// 1-based row number. Internally both coordinates are 0-based. There is no
/// upper bound on the letter-run length beyond what fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ..., Z=25, AA=26)
    pub col: usize,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// The letter run is case-insensitive. A missing letter run or digit run
    /// is an error, as is row number 0.
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 0);
    ///
    /// let addr = CellAddress::parse("aa10").unwrap();
    /// assert_eq!(addr.row, 9);
    /// assert_eq!(addr.col, 26);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidReference("empty reference".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == 0 {
            return Err(Error::InvalidReference(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[..pos])?;

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidReference(format!("no row number in '{}'", s)));
        }

        let row: usize = row_str
            .parse()
            .map_err(|_| Error::InvalidReference(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in A1 notation, 0-based internally
        if row == 0 {
            return Err(Error::InvalidReference(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Convert column letters to an index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<usize> {
        if letters.is_empty() {
            return Err(Error::InvalidReference("empty column letters".into()));
        }

        let mut col: usize = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidReference(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add(c.to_ascii_uppercase() as usize - 'A' as usize + 1))
                .ok_or_else(|| {
                    Error::InvalidReference(format!("column too large: '{}'", letters))
                })?;
        }

        Ok(col - 1)
    }

    /// Convert a column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Format as an A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// An inclusive rectangular range of cells (e.g., "A1:B10")
///
/// Ranges are normalized on construction: `start` is always the top-left
/// corner and `end` the bottom-right, regardless of the order the corners
/// were given in. A range never owns cells; it is resolved against a grid at
/// evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalizing corner order
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse a range from "A1:B10" notation
    ///
    /// A single reference ("C3") becomes a single-cell range. More than one
    /// colon is an error.
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::CellRange;
    ///
    /// let range = CellRange::parse("C5:A1").unwrap();
    /// assert_eq!(range, CellRange::parse("A1:C5").unwrap());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let parts: Vec<&str> = s.split(':').collect();

        match parts.as_slice() {
            [single] => Ok(Self::single(CellAddress::parse(single)?)),
            [start, end] => Ok(Self::new(
                CellAddress::parse(start)?,
                CellAddress::parse(end)?,
            )),
            _ => Err(Error::InvalidRange(format!(
                "expected at most one ':' in '{}'",
                s
            ))),
        }
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> usize {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> usize {
        self.end.col - self.start.col + 1
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Iterate over all cell addresses in the range (rows outer, columns inner)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
            done: false,
        }
    }

    /// Format as an "A1:B10" string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    current_row: usize,
    current_col: usize,
    done: bool,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let addr = CellAddress::new(self.current_row, self.current_col);

        if self.current_col < self.range.end.col {
            self.current_col += 1;
        } else if self.current_row < self.range.end.row {
            self.current_col = self.range.start.col;
            self.current_row += 1;
        } else {
            self.done = true;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let total = self.range.row_count() * self.range.col_count();
        let consumed = (self.current_row - self.range.start.row) * self.range.col_count()
            + (self.current_col - self.range.start.col);
        (total - consumed, Some(total - consumed))
    }
}

impl ExactSizeIterator for CellRangeIterator {}
