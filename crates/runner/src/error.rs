use thiserror::Error;

use common::error::Error as BenchError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write timing table: {0}")]
    CsvError(#[from] csv::Error),

    #[error("No step unit was given on standard input.")]
    MissingStepUnit,

    #[error("Step unit must be a positive integer, got {0:?}.")]
    InvalidStepUnit(String),

    #[error("Benchmark error: {0}")]
    BenchError(#[from] BenchError),
}
