//! Error types for kde-simulation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("KDE core error: {0}")]
    Core(#[from] kde_core::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
