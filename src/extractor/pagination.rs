use std::io::Write;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::client::PageFetcher;
use crate::extractor::errors::ExtractError;
use crate::extractor::Limits;
use crate::models::{flatten, FlatRecord, Page};
use crate::output::OutputSink;

/// Walks the transaction feed page by page and streams every transaction to the sink.
pub struct Extractor<F, C: Write, J: Write> {
    fetcher: F,
    sink: OutputSink<C, J>,
    limits: Limits,
    start_cursor: Option<String>,
    help_message: String
}

impl<F: PageFetcher, C: Write, J: Write> Extractor<F, C, J> {
    pub fn new(fetcher: F, sink: OutputSink<C, J>, limits: Limits, start_cursor: Option<String>) -> Self {
        Self {
            fetcher,
            sink,
            limits,
            start_cursor,
            help_message: String::new()
        }
    }

    /// Hint logged next to responses that carry no transaction list.
    pub fn with_help_message(mut self, help_message: impl Into<String>) -> Self {
        self.help_message = help_message.into();
        self
    }

    /// Fetches every page from the start cursor on, returning the flattened records in feed order.
    ///
    /// Records are written to the sink as each page arrives, and the sink is flushed after every page.
    ///
    /// # Errors
    /// Returns `ExtractError` if:
    /// - A request fails (non-success status, transport or JSON error).
    /// - A response carries no readable `pageInfo`.
    /// - A page announces a next page without an `endCursor`.
    /// - Either output file cannot be written.
    pub async fn extract_all(&mut self) -> Result<Vec<FlatRecord>, ExtractError> {
        let started = Instant::now();
        let mut cursor = self.start_cursor.clone();
        let mut records = Vec::new();
        let mut pages = 0;

        loop {
            let response = self.fetcher.fetch_page(cursor.as_deref()).await?;
            pages += 1;

            if !Page::has_transaction_list(&response) {
                warn!("Page [{pages}] has no transaction list, treating it as empty. {} Response: {response}", self.help_message);
            }

            let page = Page::from_response(&response)
                .map_err(|source| ExtractError::Page { page: pages, source })?;
            let transactions = page.transactions.unwrap_or_default();

            for raw in &transactions {
                let record = flatten(raw);
                debug!("{} | {} | {} | {}", record.date, record.description, record.amount, record.transaction_type);

                self.sink.append(raw, &record)?;
                records.push(record);
            }

            self.sink.flush()?;
            info!("Transactions page {pages} extracted, {} transactions - Has next page: {}", transactions.len(), page.page_info.has_next_page);

            if !page.page_info.has_next_page {
                break;
            }

            cursor = match page.page_info.end_cursor {
                Some(end_cursor) => Some(end_cursor),
                None => return Err(ExtractError::MissingCursor { page: pages })
            };

            if self.limits.max_pages.is_some_and(|max_pages| pages >= max_pages) {
                warn!("Stopped after the page limit of {pages} pages. Resume with CREDITKARMA_START_CURSOR={}", cursor.as_deref().unwrap_or_default());
                break;
            }

            if self.limits.deadline.is_some_and(|deadline| started.elapsed() >= deadline) {
                warn!("Stopped after {:?} deadline. Resume with CREDITKARMA_START_CURSOR={}", started.elapsed(), cursor.as_deref().unwrap_or_default());
                break;
            }
        }

        info!("Transactions extracted: {} across {pages} pages", records.len());

        Ok(records)
    }

    #[cfg(test)]
    pub fn into_sink(self) -> OutputSink<C, J> {
        self.sink
    }
}
