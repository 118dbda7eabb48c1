//! Formula parser and dispatcher
//!
//! Turns a cell's raw text into a [`Formula`]: a closed set of supported
//! functions with typed arguments. The evaluator matches on the result
//! exhaustively, so adding a function is a new variant plus a handler,
//! enforced at compile time.

use crate::error::{FormulaError, FormulaResult};
use gridcalc_core::{CellAddress, CellRange, Error};
use lazy_regex::regex_captures;

/// The formula marker that distinguishes formulas from literal text
pub const FORMULA_MARKER: char = '=';

/// A parsed formula
///
/// Function keywords are matched case-insensitively, and references are
/// case-insensitive through [`CellAddress::parse`]. Quoted string arguments
/// are preserved exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// Sum of numeric-parseable values in a range
    Sum(CellRange),
    /// Sum divided by the number of cells in the range
    Average(CellRange),
    /// Smallest of the parsed-or-zero values in a range
    Min(CellRange),
    /// Largest of the parsed-or-zero values in a range
    Max(CellRange),
    /// Count of values in a range that parse as numeric
    Count(CellRange),
    /// Whitespace-trim of a single cell's display value
    Trim(CellAddress),
    /// Uppercase of a single cell's display value
    Upper(CellAddress),
    /// Lowercase of a single cell's display value
    Lower(CellAddress),
    /// Substring replacement across a range's raw values
    FindReplace {
        range: CellRange,
        find: String,
        replace: String,
    },
    /// Removal of duplicate rows within a range
    RemoveDuplicates(CellRange),
}

/// Check whether raw cell text is a formula
///
/// Anything that does not begin with the marker (after leading whitespace)
/// evaluates to itself verbatim.
pub fn is_formula(raw: &str) -> bool {
    raw.trim_start().starts_with(FORMULA_MARKER)
}

/// Parse raw formula text (including the leading marker) into a [`Formula`]
///
/// # Examples
/// ```
/// use gridcalc_formula::{parse_formula, Formula};
/// use gridcalc_core::CellRange;
///
/// let formula = parse_formula("=sum(A1:B2)").unwrap();
/// assert_eq!(formula, Formula::Sum(CellRange::parse("A1:B2").unwrap()));
/// ```
pub fn parse_formula(raw: &str) -> FormulaResult<Formula> {
    let body = raw
        .trim()
        .strip_prefix(FORMULA_MARKER)
        .ok_or_else(|| FormulaError::Parse("formula must start with '='".into()))?;

    let open = body
        .find('(')
        .ok_or_else(|| FormulaError::Parse("missing '(' after function keyword".into()))?;
    let keyword = body[..open].trim().to_ascii_uppercase();
    let args = &body[open + 1..];

    match keyword.as_str() {
        "SUM" => Ok(Formula::Sum(range_arg(args)?)),
        "AVERAGE" => Ok(Formula::Average(range_arg(args)?)),
        "MIN" => Ok(Formula::Min(range_arg(args)?)),
        "MAX" => Ok(Formula::Max(range_arg(args)?)),
        "COUNT" => Ok(Formula::Count(range_arg(args)?)),
        "TRIM" => Ok(Formula::Trim(cell_arg(args)?)),
        "UPPER" => Ok(Formula::Upper(cell_arg(args)?)),
        "LOWER" => Ok(Formula::Lower(cell_arg(args)?)),
        "FIND_AND_REPLACE" => find_replace_args(args),
        "REMOVE_DUPLICATES" => Ok(Formula::RemoveDuplicates(range_arg(args)?)),
        _ => Err(FormulaError::UnknownFunction(keyword)),
    }
}

/// Argument substring up to the first close paren
fn inner_args(args: &str) -> FormulaResult<&str> {
    let close = args
        .find(')')
        .ok_or_else(|| FormulaError::Parse("missing ')'".into()))?;
    Ok(args[..close].trim())
}

fn range_arg(args: &str) -> FormulaResult<CellRange> {
    Ok(CellRange::parse(inner_args(args)?)?)
}

/// Single-cell argument; a range here is an error, since only first-cell
/// semantics would be defined
fn cell_arg(args: &str) -> FormulaResult<CellAddress> {
    let text = inner_args(args)?;
    if text.contains(':') {
        return Err(Error::InvalidRange(format!(
            "expected a single cell reference, got '{}'",
            text
        ))
        .into());
    }
    Ok(CellAddress::parse(text)?)
}

/// FIND_AND_REPLACE takes `<range>, "<find>", "<replace>"`
///
/// The argument substring runs to the *last* close paren so quoted strings
/// may themselves contain parentheses. The quoted arguments are kept exactly
/// as typed.
fn find_replace_args(args: &str) -> FormulaResult<Formula> {
    let close = args
        .rfind(')')
        .ok_or_else(|| FormulaError::Parse("missing ')'".into()))?;
    let args = args[..close].trim();

    let (_, range_text, find, replace) =
        regex_captures!(r#"^([^,]+)\s*,\s*"(.*?)"\s*,\s*"(.*?)"$"#, args)
            .ok_or_else(|| FormulaError::MalformedArguments("FIND_AND_REPLACE syntax".into()))?;

    Ok(Formula::FindReplace {
        range: CellRange::parse(range_text.trim())?,
        find: find.to_string(),
        replace: replace.to_string(),
    })
}
