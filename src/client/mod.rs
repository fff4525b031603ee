mod errors;
mod graphql_fetcher;
mod redact;

use std::future::Future;

use serde_json::Value;

pub use errors::FetchError;
pub use graphql_fetcher::{build_request_body, GraphqlFetcher};
pub use redact::unauthorized_diagnostic;
#[cfg(test)]
pub use redact::redact_token;

/// Retrieves one raw page of the transaction feed.
///
/// `cursor` is the `endCursor` of the previous page, or `None` for the first page.
/// Implementations return the decoded response body without inspecting its shape.
pub trait PageFetcher {
    fn fetch_page(&self, cursor: Option<&str>) -> impl Future<Output = Result<Value, FetchError>> + Send;
}
