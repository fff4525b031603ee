use thiserror::Error;

use crate::client::FetchError;
use crate::models::PageError;
use crate::output::SinkError;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Page [{page}] could not be read: {source}")]
    Page {
        page: usize,
        #[source]
        source: PageError
    },
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("Page [{page}] reports another page but carries no endCursor")]
    MissingCursor {
        page: usize
    }
}
