//! Cell record and data-type validation

use chrono::NaiveDate;

/// Declared validation type for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// Free-form text (never fails validation)
    #[default]
    Text,
    /// Numeric value
    Number,
    /// Calendar date
    Date,
}

/// Presentation metadata carried opaquely with a cell
///
/// The engine never consults these fields; they exist so a host UI can store
/// formatting alongside the values it round-trips through the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStyle {
    pub bold: bool,
    pub italic: bool,
    pub color: Option<String>,
    pub font_size: Option<u32>,
}

/// A single cell of the grid
///
/// `raw_value` is authoritative: exactly what the user typed, with empty
/// string meaning blank. `display_value` is cache data, always derivable from
/// the current grid's raw values by one recompute pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// What the user typed
    pub raw_value: String,
    /// Last computed output; equals `raw_value` verbatim for non-formulas
    pub display_value: String,
    /// Declared validation type
    pub data_type: DataType,
    /// Set when `raw_value` fails to satisfy `data_type`
    pub validation_error: Option<String>,
    /// Presentation metadata
    pub style: CellStyle,
}

/// Date formats accepted by [`DataType::Date`] validation
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

impl Cell {
    /// Create a blank cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell whose raw and display values are both `text`
    ///
    /// Used by bulk load, where the caller recomputes afterwards.
    pub fn from_raw<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        Self {
            display_value: text.clone(),
            raw_value: text,
            ..Self::default()
        }
    }

    /// Check whether the cell is blank
    pub fn is_blank(&self) -> bool {
        self.raw_value.is_empty()
    }

    /// Re-check `raw_value` against `data_type`, updating `validation_error`
    ///
    /// Blank cells always pass. Number cells require the whole trimmed text
    /// to parse as a number; date cells must match one of [`DATE_FORMATS`].
    pub fn validate(&mut self) {
        let raw = self.raw_value.trim();
        if raw.is_empty() {
            self.validation_error = None;
            return;
        }

        self.validation_error = match self.data_type {
            DataType::Text => None,
            DataType::Number => {
                if raw.parse::<f64>().is_ok() {
                    None
                } else {
                    Some("Must be a numeric value".to_string())
                }
            }
            DataType::Date => {
                let parses = DATE_FORMATS
                    .iter()
                    .any(|fmt| NaiveDate::parse_from_str(raw, fmt).is_ok());
                if parses {
                    None
                } else {
                    Some("Invalid date".to_string())
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_cells_never_flagged() {
        let mut cell = Cell::from_raw("anything at all");
        cell.validate();
        assert_eq!(cell.validation_error, None);
    }

    #[test]
    fn test_number_validation() {
        let mut cell = Cell::from_raw("12.5");
        cell.data_type = DataType::Number;
        cell.validate();
        assert_eq!(cell.validation_error, None);

        cell.raw_value = "12abc".to_string();
        cell.validate();
        assert_eq!(
            cell.validation_error.as_deref(),
            Some("Must be a numeric value")
        );

        // Fixing the value clears the error
        cell.raw_value = "-3".to_string();
        cell.validate();
        assert_eq!(cell.validation_error, None);
    }

    #[test]
    fn test_date_validation() {
        let mut cell = Cell::from_raw("2024-02-29");
        cell.data_type = DataType::Date;
        cell.validate();
        assert_eq!(cell.validation_error, None);

        cell.raw_value = "12/31/2024".to_string();
        cell.validate();
        assert_eq!(cell.validation_error, None);

        cell.raw_value = "not a date".to_string();
        cell.validate();
        assert_eq!(cell.validation_error.as_deref(), Some("Invalid date"));

        cell.raw_value = "2023-02-29".to_string();
        cell.validate();
        assert_eq!(cell.validation_error.as_deref(), Some("Invalid date"));
    }

    #[test]
    fn test_blank_always_passes() {
        let mut cell = Cell::new();
        cell.data_type = DataType::Number;
        cell.validate();
        assert_eq!(cell.validation_error, None);
    }
}
