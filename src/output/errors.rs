use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Output error: CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("Output error: JSON write failed: {0}")]
    Json(#[from] serde_json::Error)
}
