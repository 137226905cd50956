use crate::{QueryResponse, SearchError, SearchErrorExt, SearchIndex, SearchQuery};
use async_trait::async_trait;
use mdc_domain::config::SearchConfig;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Deserialize)]
struct SelectEnvelope {
    response: QueryResponse,
}

/// Solr core reached over HTTP (`GET {url}/{core}/select?wt=json`).
#[derive(Debug, Clone)]
pub struct SolrIndex {
    client: Client,
    select_url: Url,
    core: String,
}

impl SolrIndex {
    /// Builds a client for `core` on the Solr server at `url`.
    ///
    /// # Errors
    /// [`SearchError::InvalidConfiguration`] if the resulting URL does not parse, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(url: &str, core: &str, timeout: Duration) -> Result<Self, SearchError> {
        let base = core_url(url, core);
        let select_url = Url::parse(&format!("{base}/select")).map_err(|e| {
            SearchError::InvalidConfiguration {
                message: format!("'{base}': {e}").into(),
                context: Some("Solr core URL".into()),
            }
        })?;

        let client = Client::builder().timeout(timeout).build().context("Building Solr client")?;

        Ok(Self { client, select_url, core: core.to_owned() })
    }

    /// Builds a client for `core` using the server URL and timeout from `config`.
    ///
    /// # Errors
    /// See [`SolrIndex::new`].
    pub fn from_config(config: &SearchConfig, core: &str) -> Result<Self, SearchError> {
        Self::new(&config.url, core, Duration::from_secs(config.timeout_seconds))
    }

    #[must_use]
    pub fn core(&self) -> &str {
        &self.core
    }

    #[must_use]
    pub const fn select_url(&self) -> &Url {
        &self.select_url
    }
}

#[async_trait]
impl SearchIndex for SolrIndex {
    #[instrument(skip(self, query), fields(core = %self.core, q = query.q(), start = query.start()))]
    async fn query(&self, query: &SearchQuery) -> Result<QueryResponse, SearchError> {
        let mut params = query.to_params();
        params.push(("wt".to_owned(), "json".to_owned()));

        let response = self
            .client
            .get(self.select_url.clone())
            .query(&params)
            .send()
            .await
            .context("Sending select request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                message: format!("{status}: {body}").into(),
                context: Some(self.core.clone().into()),
            });
        }

        let envelope: SelectEnvelope =
            response.json().await.context("Decoding select response")?;
        debug!(
            num_found = envelope.response.num_found,
            docs = envelope.response.docs.len(),
            "Search page fetched"
        );
        Ok(envelope.response)
    }
}

fn core_url(url: &str, core: &str) -> String {
    if url.ends_with('/') { format!("{url}{core}") } else { format!("{url}/{core}") }
}
