use thiserror::Error;

/// Acquisition-layer failures. The aggregation engine itself never errors;
/// everything here happens before records reach it.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed request failed with status {0}")]
    Status(u16),
}
