//! # Content Repository
//!
//! Resolves content identifiers against the content-management API.
//!
//! - **Policies**: [`ContentRepository::resolve_policy`] returns a [`Policy`], either a
//!   generic record of component fields or one that also carries named reference lists.
//! - **Versioned content**: [`ContentRepository::resolve_version`] pins an identifier to its
//!   current version; [`ContentRepository::get_aspect`] reads one aspect of that version.
//!
//! [`ContentApiClient`] is the HTTP implementation.
//!
//! ```rust,ignore
//! use mdc_content::{ContentApiClient, ContentRepository, Subject};
//!
//! let client = ContentApiClient::builder()
//!     .api_url("http://localhost:8080/onecms")
//!     .auth_token("secret")
//!     .build()?;
//!
//! let version = client.resolve_version(&id, &Subject::nobody()).await?;
//! let aspect = client.get_aspect(&version, "contentData", &Subject::nobody()).await?;
//! ```

mod error;
mod http;
mod model;

pub use error::{ContentError, ContentErrorExt};
pub use http::{ContentApiClient, ContentApiClientBuilder};
pub use model::{AspectData, ContentReference, ContentVersionId, Policy, PolicyRecord, Subject};

use async_trait::async_trait;
use mdc_domain::content::ContentId;

/// Read access to policies and versioned content.
#[async_trait]
pub trait ContentRepository: Send + Sync + std::fmt::Debug {
    /// Loads the current policy of `id`.
    async fn resolve_policy(&self, id: &ContentId) -> Result<Policy, ContentError>;

    /// Resolves `id` to its latest version as seen by `subject`.
    async fn resolve_version(
        &self,
        id: &ContentId,
        subject: &Subject,
    ) -> Result<ContentVersionId, ContentError>;

    /// Reads aspect `aspect` of the given content version.
    async fn get_aspect(
        &self,
        version: &ContentVersionId,
        aspect: &str,
        subject: &Subject,
    ) -> Result<AspectData, ContentError>;
}
