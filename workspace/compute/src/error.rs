use thiserror::Error;
use tracing::error;

/// Result alias used across the compute crate.
pub type Result<T> = std::result::Result<T, ComputeError>;

/// Error types for the compute crate.
///
/// The variants separate the three failure kinds the loader can hit
/// (unreadable file, missing column, unparsable date) from generic
/// DataFrame failures.
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The source file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A column the contract declares is absent from the table.
    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    /// A declared date column did not parse into a calendar date.
    #[error("date error: {0}")]
    Date(String),

    /// Error from Polars DataFrame operations.
    #[error("dataframe error: {0}")]
    DataFrame(String),

    /// Error serializing a table back to CSV.
    #[error("csv serialization error: {0}")]
    Csv(String),
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(source: polars::error::PolarsError) -> Self {
        use polars::error::PolarsError;

        let err = match &source {
            PolarsError::ColumnNotFound(name) => ComputeError::MissingColumn {
                column: name.to_string(),
            },
            PolarsError::NoData(_) => ComputeError::DataFrame(format!("no data: {source}")),
            PolarsError::SchemaMismatch(_) | PolarsError::ShapeMismatch(_) => {
                ComputeError::DataFrame(format!("schema mismatch: {source}"))
            }
            _ => ComputeError::DataFrame(source.to_string()),
        };
        error!(?err, "polars operation failed");
        err
    }
}
