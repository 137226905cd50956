//! # Search Gateway
//!
//! Scoped, paginated queries against the content search index.
//!
//! * [`SearchIndex`] executes one raw page; [`SolrIndex`] is the HTTP implementation.
//! * [`SearchQuery`] models `q`, filter queries, projections, sort and the page window.
//!   [`QueryDecorator`]s such as [`WithSecurityParent`] narrow a query before it runs.
//! * [`SearchClient`] turns a query into a [`SearchResult`] that walks pages lazily and
//!   yields [`ContentId`](mdc_domain::content::ContentId) hits.
//!
//! ```rust,ignore
//! use mdc_search::{SearchClient, SearchQuery, SolrIndex, WithSecurityParent};
//!
//! let index = SolrIndex::new("http://localhost:8983/solr", "public", timeout)?;
//! let client = SearchClient::new(Arc::new(index));
//! let query = SearchQuery::new("*:*").decorate(&WithSecurityParent::new(parent));
//! let hits = client.search(query, 255).collect_hits().await?;
//! ```

mod client;
mod error;
mod index;
mod query;
mod solr;

pub use client::{SearchClient, SearchResult, SearchResultPage};
pub use error::{SearchError, SearchErrorExt};
pub use index::{QueryResponse, SearchIndex};
pub use query::{QueryDecorator, SearchQuery, SortOrder, WithSecurityParent};
pub use solr::SolrIndex;
