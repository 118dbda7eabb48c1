//! Evaluation driver
//!
//! One recompute pass sweeps the grid in row-major order, refreshing each
//! cell's display value from its current raw value. Cross-cell references
//! read other cells' *display* values, and the pass has no dependency
//! ordering: a formula referencing a cell later in row-major order reads that
//! cell's previous-pass (stale) value, while references to earlier cells see
//! fresh values. This ordering sensitivity is an inherent property of the
//! single-pass model and is deliberately preserved.

use crate::error::{FormulaError, FormulaResult};
use crate::functions::{aggregate, format_number, mutate, text};
use crate::parser::{is_formula, parse_formula, Formula};
use gridcalc_core::{CellAddress, Grid};

/// Display text for a cell whose formula failed to parse or evaluate
pub const ERROR_MARKER: &str = "#ERROR";

/// Statistics from one recompute pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecomputeStats {
    /// Cells visited
    pub cells: usize,
    /// Cells whose raw value was a formula
    pub formulas: usize,
    /// Formulas that produced an error marker
    pub errors: usize,
}

/// Compute the display value for one cell from its current raw value
///
/// Total over all inputs: any internal error is converted to display text at
/// this boundary (`#ERROR`, or `#ERROR: <detail>` for argument-pattern
/// failures) and never propagates to the caller. Non-formula text evaluates
/// to itself verbatim.
pub fn evaluate_cell(grid: &mut Grid, addr: CellAddress) -> String {
    let raw = match grid.get(addr) {
        Ok(cell) => cell.raw_value.clone(),
        Err(_) => return ERROR_MARKER.to_string(),
    };
    evaluate_raw(grid, &raw)
}

/// Evaluate raw cell text against the grid
pub fn evaluate_raw(grid: &mut Grid, raw: &str) -> String {
    if !is_formula(raw) {
        return raw.to_string();
    }
    match try_evaluate(grid, raw) {
        Ok(value) => value,
        Err(FormulaError::MalformedArguments(detail)) => {
            format!("{}: {}", ERROR_MARKER, detail)
        }
        Err(_) => ERROR_MARKER.to_string(),
    }
}

fn try_evaluate(grid: &mut Grid, raw: &str) -> FormulaResult<String> {
    match parse_formula(raw)? {
        Formula::Sum(range) => Ok(format_number(aggregate::sum(&grid.range_values(&range)?))),
        Formula::Average(range) => {
            Ok(format_number(aggregate::average(&grid.range_values(&range)?)))
        }
        Formula::Min(range) => Ok(format_number(aggregate::min(&grid.range_values(&range)?))),
        Formula::Max(range) => Ok(format_number(aggregate::max(&grid.range_values(&range)?))),
        Formula::Count(range) => Ok(aggregate::count(&grid.range_values(&range)?).to_string()),
        Formula::Trim(addr) => Ok(text::trim(grid.display_value(addr)?)),
        Formula::Upper(addr) => Ok(text::upper(grid.display_value(addr)?)),
        Formula::Lower(addr) => Ok(text::lower(grid.display_value(addr)?)),
        Formula::FindReplace {
            range,
            find,
            replace,
        } => mutate::find_and_replace(grid, &range, &find, &replace),
        Formula::RemoveDuplicates(range) => mutate::remove_duplicates(grid, &range),
    }
}

/// Run one full recompute pass over the grid
///
/// Every cell's display value is rewritten from its current raw value, in
/// row-major order. One bad formula never aborts the pass or corrupts
/// sibling cells. Mutating formulas (FIND_AND_REPLACE, REMOVE_DUPLICATES)
/// rewrite raw values mid-pass; their effect shows up on the next pass.
pub fn recompute(grid: &mut Grid) -> RecomputeStats {
    let mut stats = RecomputeStats::default();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let addr = CellAddress::new(row, col);
            let raw = match grid.get(addr) {
                Ok(cell) => cell.raw_value.clone(),
                Err(_) => continue,
            };
            stats.cells += 1;

            let display = if is_formula(&raw) {
                stats.formulas += 1;
                let value = evaluate_raw(grid, &raw);
                if value.starts_with(ERROR_MARKER) {
                    stats.errors += 1;
                    log::warn!("{}: {:?} evaluated to {}", addr, raw.trim(), value);
                }
                value
            } else {
                raw
            };

            if let Ok(cell) = grid.get_mut(addr) {
                cell.display_value = display;
            }
        }
    }

    log::debug!(
        "recompute pass: {} cells, {} formulas, {} errors",
        stats.cells,
        stats.formulas,
        stats.errors
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    /// Grid with raw values set and displays settled
    ///
    /// Two passes, so formulas referencing cells later in row-major order
    /// also see computed values.
    fn grid_with(values: &[(&str, &str)]) -> Grid {
        let mut grid = Grid::new();
        for (reference, value) in values {
            grid.set_raw(addr(reference), *value).unwrap();
        }
        recompute(&mut grid);
        recompute(&mut grid);
        grid
    }

    #[test]
    fn test_literal_is_verbatim() {
        let grid = grid_with(&[("A1", "  spaced  "), ("A2", "MiXeD Case")]);
        assert_eq!(grid.display_value(addr("A1")).unwrap(), "  spaced  ");
        assert_eq!(grid.display_value(addr("A2")).unwrap(), "MiXeD Case");
    }

    #[test]
    fn test_sum_single_cell() {
        let grid = grid_with(&[("A1", "5"), ("B1", "=SUM(A1:A1)")]);
        assert_eq!(grid.display_value(addr("B1")).unwrap(), "5");

        let grid = grid_with(&[("B1", "=SUM(A1:A1)")]);
        assert_eq!(grid.display_value(addr("B1")).unwrap(), "0");
    }

    #[test]
    fn test_average_of_blanks_is_zero() {
        let grid = grid_with(&[("D1", "=AVERAGE(A1:A3)")]);
        assert_eq!(grid.display_value(addr("D1")).unwrap(), "0");
    }

    #[test]
    fn test_fractional_average() {
        let grid = grid_with(&[("A1", "1"), ("A2", "2"), ("D1", "=AVERAGE(A1:A2)")]);
        assert_eq!(grid.display_value(addr("D1")).unwrap(), "1.5");
    }

    #[test]
    fn test_count_skips_non_numeric() {
        let grid = grid_with(&[("A1", "1"), ("A2", "x"), ("A3", "3"), ("D1", "=COUNT(A1:A3)")]);
        assert_eq!(grid.display_value(addr("D1")).unwrap(), "2");
    }

    #[test]
    fn test_text_functions_use_display_values() {
        let grid = grid_with(&[
            ("A1", "  Hello  "),
            ("B1", "=TRIM(A1)"),
            ("B2", "=UPPER(A1)"),
            ("B3", "=LOWER(A1)"),
        ]);
        assert_eq!(grid.display_value(addr("B1")).unwrap(), "Hello");
        assert_eq!(grid.display_value(addr("B2")).unwrap(), "  HELLO  ");
        assert_eq!(grid.display_value(addr("B3")).unwrap(), "  hello  ");
    }

    #[test]
    fn test_unknown_function_is_error_marker() {
        let grid = grid_with(&[("A1", "7"), ("B1", "=UNKNOWNFUNC(A1)")]);
        assert_eq!(grid.display_value(addr("B1")).unwrap(), "#ERROR");
        // Sibling cells are unaffected
        assert_eq!(grid.display_value(addr("A1")).unwrap(), "7");
    }

    #[test]
    fn test_malformed_arguments_carry_detail() {
        let grid = grid_with(&[("A1", "=FIND_AND_REPLACE(A2:A3, nope)")]);
        assert_eq!(
            grid.display_value(addr("A1")).unwrap(),
            "#ERROR: FIND_AND_REPLACE syntax"
        );
    }

    #[test]
    fn test_out_of_grid_reference_is_error_not_origin_fallback() {
        // AZ999 is outside the default 30x26 grid; the defect to avoid is
        // silently reading A1 instead
        let grid = grid_with(&[("A1", "42"), ("B1", "=SUM(AZ999:AZ999)")]);
        assert_eq!(grid.display_value(addr("B1")).unwrap(), "#ERROR");
    }

    #[test]
    fn test_evaluate_cell_is_total() {
        let mut grid = Grid::with_size(2, 2);
        grid.set_raw(addr("A1"), "=BROKEN(").unwrap();
        assert_eq!(evaluate_cell(&mut grid, addr("A1")), "#ERROR");
        assert_eq!(evaluate_cell(&mut grid, CellAddress::new(9, 9)), "#ERROR");

        grid.set_raw(addr("B1"), "plain").unwrap();
        assert_eq!(evaluate_cell(&mut grid, addr("B1")), "plain");
    }

    #[test]
    fn test_recompute_stats() {
        let mut grid = Grid::with_size(2, 2);
        grid.set_raw(addr("A1"), "1").unwrap();
        grid.set_raw(addr("B1"), "=SUM(A1:A1)").unwrap();
        grid.set_raw(addr("A2"), "=NOPE(A1)").unwrap();

        let stats = recompute(&mut grid);
        assert_eq!(stats.cells, 4);
        assert_eq!(stats.formulas, 2);
        assert_eq!(stats.errors, 1);
    }
}
