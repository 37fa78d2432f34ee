use crate::api::{ApiClient, Page};
use crate::error::{ExportError, Result};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// Cursor over the pages of a logs query, newest page first.
///
/// Each call to [`LogPaginator::next_page`] fetches the page the cursor
/// points at and moves the cursor to that page's `previous` link. The
/// sequence ends when `previous` is missing or equal to the URL just fetched.
/// Relative `previous` links are resolved against the URL they came from.
pub struct LogPaginator<'a> {
    client: &'a ApiClient,
    next_url: Option<String>,
    visited: HashSet<String>,
    pages_fetched: usize,
    max_pages: usize,
}

impl<'a> LogPaginator<'a> {
    pub fn new(client: &'a ApiClient, start_url: impl Into<String>, max_pages: usize) -> Self {
        Self {
            client,
            next_url: Some(start_url.into()),
            visited: HashSet::new(),
            pages_fetched: 0,
            max_pages,
        }
    }

    /// Fetch the next page, or `None` once the chain is exhausted
    pub async fn next_page(&mut self) -> Result<Option<Page>> {
        let Some(url) = self.next_url.take() else {
            return Ok(None);
        };

        if self.pages_fetched >= self.max_pages {
            return Err(ExportError::PageLimitExceeded {
                limit: self.max_pages,
            });
        }

        // A link back to any earlier page would never terminate
        if !self.visited.insert(url.clone()) {
            return Err(ExportError::PaginationLoop { url });
        }

        let page = self.fetch_page(&url).await?;
        self.pages_fetched += 1;
        debug!(
            "Fetched page {} with {} records",
            self.pages_fetched,
            page.results.len()
        );

        self.next_url = match page.previous.as_deref() {
            Some(previous) => {
                let previous = Url::parse(&url)?.join(previous)?;
                (previous.as_str() != url).then(|| previous.to_string())
            }
            None => None,
        };

        Ok(Some(page))
    }

    async fn fetch_page(&self, url: &str) -> Result<Page> {
        let value: Value = self.client.get_json(url).await?;

        if !value.get("results").is_some_and(Value::is_array) {
            return Err(ExportError::MalformedPage {
                url: url.to_string(),
                body: value.to_string(),
            });
        }

        let body = value.to_string();
        serde_json::from_value(value).map_err(|e| ExportError::InvalidResponse {
            url: url.to_string(),
            reason: e.to_string(),
            body,
        })
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}
