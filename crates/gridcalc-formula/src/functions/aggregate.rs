//! Aggregate functions over range values
//!
//! All of these treat non-numeric values as 0 (COUNT excepted, which skips
//! them) and return 0 for an empty value list rather than NaN or an error.

use super::parse_number;

fn parse_or_zero(value: &str) -> f64 {
    parse_number(value).unwrap_or(0.0)
}

/// SUM: sum of the numeric-parseable values
pub fn sum(values: &[String]) -> f64 {
    values.iter().map(|v| parse_or_zero(v)).sum()
}

/// AVERAGE: sum divided by the number of cells (blanks included in the count)
pub fn average(values: &[String]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// MIN: smallest of the parsed-or-zero values
pub fn min(values: &[String]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values
        .iter()
        .map(|v| parse_or_zero(v))
        .fold(f64::INFINITY, f64::min)
}

/// MAX: largest of the parsed-or-zero values
pub fn max(values: &[String]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values
        .iter()
        .map(|v| parse_or_zero(v))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// COUNT: number of values that parse as numeric
pub fn count(values: &[String]) -> usize {
    values.iter().filter(|v| parse_number(v).is_some()).count()
}
