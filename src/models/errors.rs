use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Page error: response has no pageInfo at {path}")]
    MissingPageInfo {
        path: &'static str
    },
    #[error("Page error: pageInfo could not be read: {0}")]
    InvalidPageInfo(#[from] serde_json::Error)
}
