//! Grid-mutating functions
//!
//! FIND_AND_REPLACE and REMOVE_DUPLICATES edit the grid as a side effect of
//! evaluation and return a human-readable count message instead of a value.
//! FIND_AND_REPLACE writes raw values directly, bypassing display values, so
//! its effect is visible on the *next* recompute pass.

use crate::error::FormulaResult;
use ahash::AHashSet;
use gridcalc_core::{CellAddress, CellRange, Grid};

/// Replace every occurrence of `find` in the raw values of `range`
///
/// The count in the returned message is the number of cells touched, with
/// exact substring matching.
pub fn find_and_replace(
    grid: &mut Grid,
    range: &CellRange,
    find: &str,
    replace: &str,
) -> FormulaResult<String> {
    // Whole range must be in bounds before any cell is rewritten
    grid.get(range.end)?;

    let mut replaced = 0;
    for addr in range.cells() {
        let cell = grid.get_mut(addr)?;
        if cell.raw_value.contains(find) {
            cell.raw_value = cell.raw_value.replace(find, replace);
            cell.validate();
            replaced += 1;
        }
    }

    Ok(format!("Replaced {} occurrence(s) of \"{}\"", replaced, find))
}

/// Remove rows within `range` whose column-slice of display values repeats an
/// earlier row's slice (first seen wins)
///
/// Removed rows are deleted from the grid entirely; a blank row is appended
/// per removal so the total row count is preserved.
pub fn remove_duplicates(grid: &mut Grid, range: &CellRange) -> FormulaResult<String> {
    grid.get(range.end)?;

    let mut seen: AHashSet<Vec<String>> = AHashSet::new();
    let mut to_remove = Vec::new();

    // Signature is the ordered tuple of display values in the range's
    // columns, scanned top to bottom
    for row in range.start.row..=range.end.row {
        let mut signature = Vec::with_capacity(range.col_count());
        for col in range.start.col..=range.end.col {
            signature.push(grid.get(CellAddress::new(row, col))?.display_value.clone());
        }
        if !seen.insert(signature) {
            to_remove.push(row);
        }
    }

    let removed = to_remove.len();
    grid.remove_rows(&to_remove)?;

    Ok(format!("Removed {} duplicates", removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    fn range(s: &str) -> CellRange {
        CellRange::parse(s).unwrap()
    }

    #[test]
    fn test_find_and_replace_rewrites_raw_values() {
        let mut grid = Grid::new();
        grid.set_raw(addr("A1"), "hello world").unwrap();
        grid.set_raw(addr("A2"), "say hello").unwrap();

        let message = find_and_replace(&mut grid, &range("A1:A2"), "hello", "hi").unwrap();
        assert_eq!(message, "Replaced 2 occurrence(s) of \"hello\"");
        assert_eq!(grid.get(addr("A1")).unwrap().raw_value, "hi world");
        assert_eq!(grid.get(addr("A2")).unwrap().raw_value, "say hi");

        // Display values are untouched until the next recompute
        assert_eq!(grid.get(addr("A1")).unwrap().display_value, "");
    }

    #[test]
    fn test_find_and_replace_counts_cells_not_occurrences() {
        let mut grid = Grid::new();
        grid.set_raw(addr("A1"), "ab ab ab").unwrap();

        let message = find_and_replace(&mut grid, &range("A1:A1"), "ab", "x").unwrap();
        assert_eq!(message, "Replaced 1 occurrence(s) of \"ab\"");
        assert_eq!(grid.get(addr("A1")).unwrap().raw_value, "x x x");
    }

    #[test]
    fn test_find_and_replace_zero_matches() {
        let mut grid = Grid::new();
        let message = find_and_replace(&mut grid, &range("A1:B2"), "missing", "x").unwrap();
        assert_eq!(message, "Replaced 0 occurrence(s) of \"missing\"");
    }

    #[test]
    fn test_find_and_replace_out_of_bounds() {
        let mut grid = Grid::with_size(2, 2);
        assert!(find_and_replace(&mut grid, &range("A1:C5"), "a", "b").is_err());
    }

    #[test]
    fn test_remove_duplicates_first_seen_wins() {
        let mut grid = Grid::new();
        for (reference, value) in [
            ("A1", "x"),
            ("B1", "y"),
            ("A2", "x"),
            ("B2", "y"),
            ("A3", "z"),
            ("B3", "w"),
        ] {
            let a = addr(reference);
            grid.set_raw(a, value).unwrap();
            grid.get_mut(a).unwrap().display_value = value.to_string();
        }

        let message = remove_duplicates(&mut grid, &range("A1:B3")).unwrap();
        assert_eq!(message, "Removed 1 duplicates");

        // Row 2 (index 1) is gone, later rows shifted up, count preserved
        assert_eq!(grid.rows(), 30);
        assert_eq!(grid.get(addr("A1")).unwrap().raw_value, "x");
        assert_eq!(grid.get(addr("A2")).unwrap().raw_value, "z");
        assert_eq!(grid.get(addr("A30")).unwrap().raw_value, "");
    }

    #[test]
    fn test_remove_duplicates_compares_only_range_columns() {
        let mut grid = Grid::new();
        // Column A matches across both rows; column C differs but is outside
        // the compared range
        for (reference, value) in [("A1", "dup"), ("C1", "one"), ("A2", "dup"), ("C2", "two")] {
            let a = addr(reference);
            grid.set_raw(a, value).unwrap();
            grid.get_mut(a).unwrap().display_value = value.to_string();
        }

        let message = remove_duplicates(&mut grid, &range("A1:A2")).unwrap();
        assert_eq!(message, "Removed 1 duplicates");
        assert_eq!(grid.get(addr("C1")).unwrap().raw_value, "one");
        // The whole duplicate row was removed, including cells outside the range
        assert_eq!(grid.get(addr("C2")).unwrap().raw_value, "");
    }

    #[test]
    fn test_remove_duplicates_none_found() {
        let mut grid = Grid::new();
        let message = remove_duplicates(&mut grid, &range("A1:B2")).unwrap();
        // All-blank rows are duplicates of each other; craft distinct rows
        // to assert the zero path separately below
        assert_eq!(message, "Removed 1 duplicates");

        let mut grid = Grid::new();
        for (reference, value) in [("A1", "a"), ("A2", "b")] {
            let a = addr(reference);
            grid.set_raw(a, value).unwrap();
            grid.get_mut(a).unwrap().display_value = value.to_string();
        }
        let message = remove_duplicates(&mut grid, &range("A1:B2")).unwrap();
        assert_eq!(message, "Removed 0 duplicates");
    }
}
