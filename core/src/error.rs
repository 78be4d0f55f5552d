use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading a training log document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("training log not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("missing required field '{field}' in {}", path.display())]
    MissingField { field: &'static str, path: PathBuf },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures raised while building or summarising tables.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("column '{column}' holds non-numeric value {value:?} in row {row}")]
    NonNumericCell {
        column: String,
        row: usize,
        value: String,
    },

    #[error("row {row} has {found} cells but the table has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}
