use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::client::errors::{is_auth_status, FetchError};
use crate::client::{unauthorized_diagnostic, PageFetcher};
use crate::config::Settings;

/// Builds the POST body for one page. Category, date and account filters are always left unset.
pub fn build_request_body(query: &str, cursor: Option<&str>) -> Value {
    json!({
        "query": query,
        "variables": {
            "input": {
                "paginationInput": {
                    "afterCursor": cursor
                },
                "categoryInput": {
                    "categoryId": null,
                    "primeCategoryType": null
                },
                "datePeriodInput": {
                    "datePeriod": null
                },
                "accountInput": {}
            }
        }
    })
}

/// `PageFetcher` that talks to the GraphQL endpoint with a bearer token.
pub struct GraphqlFetcher {
    http: reqwest::Client,
    endpoint: String,
    query: &'static str,
    token: String,
    help_message: String
}

impl GraphqlFetcher {
    pub fn new(settings: &Settings) -> Result<Self, FetchError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", settings.token))
            .map_err(|_| FetchError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        let mut builder = reqwest::Client::builder().default_headers(headers);

        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: settings.api_url.clone(),
            query: settings.query,
            token: settings.token.clone(),
            help_message: settings.help_message.clone()
        })
    }
}

impl PageFetcher for GraphqlFetcher {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Value, FetchError> {
        debug!("Requesting page after cursor {cursor:?}");

        let body = build_request_body(self.query, cursor);
        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            if is_auth_status(status) {
                error!("{}", unauthorized_diagnostic(&self.token, &self.help_message));
            }

            return Err(FetchError::Request { status, body: text });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
