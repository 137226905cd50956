use crate::{SearchError, SearchQuery};
use async_trait::async_trait;
use mdc_domain::content::ContentId;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Document field holding the content identifier of a hit.
const ID_FIELD: &str = "id";

/// One page of raw documents as returned by the index.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub num_found: u64,
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub docs: Vec<Map<String, Value>>,
}

impl QueryResponse {
    /// Content identifiers of the documents, in index order.
    ///
    /// # Errors
    /// [`SearchError::MalformedDocument`] for a document without a usable `id`.
    pub fn hits(&self) -> Result<Vec<ContentId>, SearchError> {
        self.docs
            .iter()
            .map(|doc| {
                doc.get(ID_FIELD).and_then(Value::as_str).and_then(ContentId::parse).ok_or_else(
                    || SearchError::MalformedDocument {
                        message: format!("missing or invalid '{ID_FIELD}' in {doc:?}").into(),
                        context: None,
                    },
                )
            })
            .collect()
    }
}

/// A queryable search index. Implementations execute exactly one request per call.
#[async_trait]
pub trait SearchIndex: Send + Sync + std::fmt::Debug {
    async fn query(&self, query: &SearchQuery) -> Result<QueryResponse, SearchError>;
}
