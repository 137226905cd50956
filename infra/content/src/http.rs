use crate::{
    AspectData, ContentError, ContentErrorExt, ContentReference, ContentRepository,
    ContentVersionId, Policy, PolicyRecord, Subject,
};
use async_trait::async_trait;
use mdc_domain::config::ContentConfig;
use mdc_domain::content::ContentId;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

const PRINCIPAL_HEADER: &str = "X-Principal-Id";
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolicyDocument {
    #[serde(flatten)]
    record: PolicyRecord,
    lists: Option<BTreeMap<String, Vec<ContentReference>>>,
}

impl From<PolicyDocument> for Policy {
    fn from(doc: PolicyDocument) -> Self {
        match doc.lists {
            Some(lists) => Self::ReferenceListCapable { record: doc.record, lists },
            None => Self::Generic(doc.record),
        }
    }
}

#[derive(Deserialize)]
struct AspectDocument {
    #[serde(default)]
    data: Value,
}

#[derive(Deserialize)]
struct ContentDocument {
    version: ContentVersionId,
    #[serde(default)]
    aspects: Map<String, Value>,
}

/// Inner state of the [`ContentApiClient`].
#[derive(Debug)]
pub struct ContentApiClientInner {
    client: Client,
    api_url: Url,
    auth_token: Option<String>,
}

/// HTTP client for the content API (`{api}/policy/{id}`, `{api}/content/contentid/{id}`).
#[derive(Debug, Clone)]
pub struct ContentApiClient {
    inner: Arc<ContentApiClientInner>,
}

impl ContentApiClient {
    pub fn builder() -> ContentApiClientBuilder {
        ContentApiClientBuilder::default()
    }

    /// Builds a client from the `content` configuration section.
    ///
    /// # Errors
    /// See [`ContentApiClientBuilder::build`].
    pub fn from_config(config: &ContentConfig) -> Result<Self, ContentError> {
        let builder = Self::builder()
            .api_url(config.api_url.clone())
            .timeout(Duration::from_secs(config.timeout_seconds));
        match &config.auth_token {
            Some(token) => builder.auth_token(token.clone()).build(),
            None => builder.build(),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ContentError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| ContentError::Validation {
                message: format!("'{}' cannot be a base URL", self.api_url).into(),
                context: None,
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url, subject: Option<&Subject>) -> RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(subject) = subject {
            request = request.header(PRINCIPAL_HEADER, subject.principal_id());
        }
        if let Some(token) = &self.auth_token {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }
        request
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        id: &str,
    ) -> Result<T, ContentError> {
        let response = request.send().await.context(format!("Requesting {id}"))?;
        let response = check_status(response, id).await?;
        let body = response.bytes().await.context(format!("Reading {id}"))?;
        serde_json::from_slice(&body).context(format!("Decoding {id}"))
    }
}

impl Deref for ContentApiClient {
    type Target = ContentApiClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

async fn check_status(response: Response, id: &str) -> Result<Response, ContentError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ContentError::NotFound { message: id.to_owned().into(), context: None });
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ContentError::Status {
            message: format!("{status}: {body}").into(),
            context: Some(id.to_owned().into()),
        });
    }
    Ok(response)
}

#[async_trait]
impl ContentRepository for ContentApiClient {
    #[instrument(skip(self), fields(id = %id))]
    async fn resolve_policy(&self, id: &ContentId) -> Result<Policy, ContentError> {
        let url = self.endpoint(&["policy", id.as_str()])?;
        let doc: PolicyDocument = self.fetch(self.get(url, None), id.as_str()).await?;
        let policy = Policy::from(doc);
        debug!(lists = matches!(policy, Policy::ReferenceListCapable { .. }), "Policy resolved");
        Ok(policy)
    }

    #[instrument(skip(self, subject), fields(id = %id, principal = subject.principal_id()))]
    async fn resolve_version(
        &self,
        id: &ContentId,
        subject: &Subject,
    ) -> Result<ContentVersionId, ContentError> {
        let url = self.endpoint(&["content", "contentid", id.as_str()])?;
        let doc: ContentDocument = self.fetch(self.get(url, Some(subject)), id.as_str()).await?;
        Ok(doc.version)
    }

    #[instrument(skip(self, subject), fields(version = %version, principal = subject.principal_id()))]
    async fn get_aspect(
        &self,
        version: &ContentVersionId,
        aspect: &str,
        subject: &Subject,
    ) -> Result<AspectData, ContentError> {
        let url = self.endpoint(&["content", "contentid", version.as_str()])?;
        let mut doc: ContentDocument =
            self.fetch(self.get(url, Some(subject)), version.as_str()).await?;

        let raw = doc.aspects.remove(aspect).ok_or_else(|| ContentError::MissingField {
            message: format!("aspect '{aspect}'").into(),
            context: Some(version.to_string().into()),
        })?;
        let AspectDocument { data } =
            serde_json::from_value(raw).context(format!("Decoding aspect '{aspect}'"))?;
        Ok(AspectData::new(aspect, data))
    }
}

/// Fluent builder for [`ContentApiClient`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ContentApiClientBuilder {
    api_url: Option<String>,
    auth_token: Option<String>,
    timeout: Option<Duration>,
}

impl ContentApiClientBuilder {
    /// Sets the content API root, e.g. `http://localhost:8080/onecms`.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Token sent as `X-Auth-Token` on every request.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// # Errors
    /// * [`ContentError::Validation`] if the API URL is missing or unusable as a base.
    /// * [`ContentError::Http`] if the HTTP client cannot be built.
    pub fn build(self) -> Result<ContentApiClient, ContentError> {
        let raw = self.api_url.ok_or(ContentError::Validation {
            message: "API URL is required".into(),
            context: None,
        })?;
        let api_url = Url::parse(&raw).map_err(|e| ContentError::Validation {
            message: format!("'{raw}': {e}").into(),
            context: Some("Content API URL".into()),
        })?;
        if api_url.cannot_be_a_base() {
            return Err(ContentError::Validation {
                message: format!("'{raw}' cannot be a base URL").into(),
                context: Some("Content API URL".into()),
            });
        }

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .context("Building content API client")?;

        Ok(ContentApiClient {
            inner: Arc::new(ContentApiClientInner { client, api_url, auth_token: self.auth_token }),
        })
    }
}
