//! Text functions over a single cell's display value

/// TRIM: strip leading and trailing whitespace
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// UPPER: uppercase the whole value
pub fn upper(value: &str) -> String {
    value.to_uppercase()
}

/// LOWER: lowercase the whole value
pub fn lower(value: &str) -> String {
    value.to_lowercase()
}
