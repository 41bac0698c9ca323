// File: crates/series-core/src/schema.rs
// Summary: Column schema (date column + named value columns) and parse settings.

use crate::error::{Result, SeriesError};

/// Date pattern of the embedded blobs, e.g. `01-May-20`.
pub const DEFAULT_DATE_FORMAT: &str = "%d-%b-%y";

/// Describes how one line of delimited text maps onto a point.
/// Contract: at least one value column; all names non-empty and unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    date_column: String,
    value_columns: Vec<String>,
    delimiter: u8,
    date_format: String,
}

impl Schema {
    /// Build a schema with the default delimiter and date format.
    pub fn new<I, S>(date_column: impl Into<String>, value_columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let date_column = date_column.into();
        let value_columns: Vec<String> = value_columns.into_iter().map(Into::into).collect();
        if value_columns.is_empty() {
            return Err(SeriesError::EmptySchema);
        }
        if date_column.trim().is_empty() {
            return Err(SeriesError::EmptyColumnName);
        }
        for (i, name) in value_columns.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(SeriesError::EmptyColumnName);
            }
            if *name == date_column || value_columns[..i].contains(name) {
                return Err(SeriesError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self {
            date_column,
            value_columns,
            delimiter: b',',
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        })
    }

    /// Single `close` series.
    pub fn close() -> Self {
        Self::fixed(&["close"])
    }

    /// Two series sharing one date column: `close` then `open`.
    pub fn close_open() -> Self {
        Self::fixed(&["close", "open"])
    }

    // Known-valid column sets only.
    fn fixed(value_columns: &[&str]) -> Self {
        Self {
            date_column: "date".to_string(),
            value_columns: value_columns.iter().map(|c| c.to_string()).collect(),
            delimiter: b',',
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Override the chrono pattern used for the date column.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn date_column(&self) -> &str { &self.date_column }
    pub fn value_columns(&self) -> &[String] { &self.value_columns }
    pub fn delimiter(&self) -> u8 { self.delimiter }
    pub fn date_format(&self) -> &str { &self.date_format }

    /// Number of fields a well-formed line carries (date + values).
    pub fn width(&self) -> usize { 1 + self.value_columns.len() }
}

impl Default for Schema {
    fn default() -> Self {
        Self::close()
    }
}
