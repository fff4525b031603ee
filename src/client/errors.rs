use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Response code: {} Response body: {body}", .status.as_u16())]
    Request {
        status: StatusCode,
        body: String
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Access token contains characters that cannot be sent in a header")]
    InvalidToken
}

pub(crate) fn is_auth_status(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}
