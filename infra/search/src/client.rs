use crate::{QueryResponse, SearchError, SearchIndex, SearchQuery};
use mdc_domain::content::ContentId;
use std::sync::Arc;
use tracing::trace;

/// Executes queries against a [`SearchIndex`] and hands out lazily paged results.
#[derive(Debug, Clone)]
pub struct SearchClient {
    index: Arc<dyn SearchIndex>,
}

impl SearchClient {
    #[must_use]
    pub fn new(index: Arc<dyn SearchIndex>) -> Self {
        Self { index }
    }

    /// Prepares `query` for paging with `page_size` documents per page. Nothing is sent
    /// until [`SearchResult::next_page`] is called.
    #[must_use]
    pub fn search(&self, query: SearchQuery, page_size: u64) -> SearchResult {
        SearchResult {
            index: Arc::clone(&self.index),
            query,
            page_size: page_size.max(1),
            page: 0,
            exhausted: false,
        }
    }
}

/// Cursor over the pages of one query.
#[derive(Debug)]
pub struct SearchResult {
    index: Arc<dyn SearchIndex>,
    query: SearchQuery,
    page_size: u64,
    page: u64,
    exhausted: bool,
}

impl SearchResult {
    /// Fetches the next page, or `None` once the result set is exhausted.
    ///
    /// The walk ends on an empty page or when the page reaches the reported hit count.
    ///
    /// # Errors
    /// Propagates the index error of the failed request.
    pub async fn next_page(&mut self) -> Result<Option<SearchResultPage>, SearchError> {
        if self.exhausted {
            return Ok(None);
        }

        let start = self.page * self.page_size;
        let query = self.query.clone().window(start, self.page_size);
        let response = self.index.query(&query).await?;
        trace!(page = self.page, docs = response.docs.len(), "Search result page");
        self.page += 1;

        if response.docs.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }
        if start + response.docs.len() as u64 >= response.num_found {
            self.exhausted = true;
        }

        Ok(Some(SearchResultPage { response }))
    }

    /// Drains every remaining page, keeping page order and in-page order.
    ///
    /// # Errors
    /// Fails on the first index error or malformed hit.
    pub async fn collect_hits(mut self) -> Result<Vec<ContentId>, SearchError> {
        let mut hits = Vec::new();
        while let Some(page) = self.next_page().await? {
            hits.extend(page.hits()?);
        }
        Ok(hits)
    }
}

/// One fetched page of a [`SearchResult`].
#[derive(Debug, Clone)]
pub struct SearchResultPage {
    response: QueryResponse,
}

impl SearchResultPage {
    /// Total number of hits the index reported for the query.
    #[must_use]
    pub const fn num_found(&self) -> u64 {
        self.response.num_found
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.response.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.response.docs.is_empty()
    }

    /// Content identifiers of the page's documents, in index order.
    ///
    /// # Errors
    /// [`SearchError::MalformedDocument`] for a document without a usable `id`.
    pub fn hits(&self) -> Result<Vec<ContentId>, SearchError> {
        self.response.hits()
    }
}
