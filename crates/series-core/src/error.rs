// File: crates/series-core/src/error.rs
// Summary: Error type for schema configuration and reader plumbing.
// Malformed data never surfaces here: bad dates become `None` and bad numbers `NaN`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("schema needs at least one value column")]
    EmptySchema,

    #[error("column name must not be empty")]
    EmptyColumnName,

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("unknown dataset '{0}' (expected one of: close, dual)")]
    UnknownDataset(String),

    #[error("reading records failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SeriesError>;
