use crate::ContentError;
use mdc_domain::content::ContentId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Principal on whose behalf content is read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject {
    principal_id: Cow<'static, str>,
}

impl Subject {
    pub fn new(principal_id: impl Into<Cow<'static, str>>) -> Self {
        Self { principal_id: principal_id.into() }
    }

    /// The unauthenticated caller.
    #[must_use]
    pub const fn nobody() -> Self {
        Self { principal_id: Cow::Borrowed("nobody") }
    }

    #[must_use]
    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }
}

/// A content identifier pinned to one version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentVersionId(ContentId);

impl ContentVersionId {
    #[must_use]
    pub const fn new(id: ContentId) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContentVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An entry of a reference list: the entry name and the content it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReference {
    pub name: String,
    pub content_id: ContentId,
}

impl ContentReference {
    pub fn new(name: impl Into<String>, content_id: ContentId) -> Self {
        Self { name: name.into(), content_id }
    }
}

/// Policy data shared by every policy kind: its id and component fields
/// (`namespace -> field -> value`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    pub content_id: ContentId,
    #[serde(default)]
    pub components: BTreeMap<String, BTreeMap<String, String>>,
}

impl PolicyRecord {
    #[must_use]
    pub const fn new(content_id: ContentId) -> Self {
        Self { content_id, components: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_field(
        mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.components.entry(namespace.into()).or_default().insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn field(&self, namespace: &str, name: &str) -> Option<&str> {
        self.components.get(namespace)?.get(name).map(String::as_str)
    }
}

/// A resolved policy.
///
/// Only [`Policy::ReferenceListCapable`] policies can declare reference lists; for a
/// generic policy every list lookup yields `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    Generic(PolicyRecord),
    ReferenceListCapable { record: PolicyRecord, lists: BTreeMap<String, Vec<ContentReference>> },
}

impl Policy {
    #[must_use]
    pub const fn record(&self) -> &PolicyRecord {
        match self {
            Self::Generic(record) | Self::ReferenceListCapable { record, .. } => record,
        }
    }

    #[must_use]
    pub const fn content_id(&self) -> &ContentId {
        &self.record().content_id
    }

    /// Component field `namespace/name`, if set.
    #[must_use]
    pub fn field(&self, namespace: &str, name: &str) -> Option<&str> {
        self.record().field(namespace, name)
    }

    /// Entries of the reference list `name`, in declaration order.
    #[must_use]
    pub fn reference_list(&self, name: &str) -> Option<&[ContentReference]> {
        match self {
            Self::Generic(_) => None,
            Self::ReferenceListCapable { lists, .. } => lists.get(name).map(Vec::as_slice),
        }
    }
}

/// Payload of one aspect of a content version.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectData {
    pub name: String,
    pub data: Value,
}

impl AspectData {
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self { name: name.into(), data }
    }

    /// Decodes the payload into a typed bean.
    ///
    /// # Errors
    /// [`ContentError::Decode`] if the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ContentError> {
        T::deserialize(&self.data).map_err(|source| ContentError::Decode {
            source,
            context: Some(format!("aspect '{}'", self.name).into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(raw: &str) -> ContentId {
        ContentId::parse(raw).unwrap()
    }

    #[test]
    fn generic_policy_has_no_lists() {
        let policy = Policy::Generic(PolicyRecord::new(id("2.184")));
        assert!(policy.reference_list("entities").is_none());
        assert_eq!(policy.content_id().as_str(), "2.184");
    }

    #[test]
    fn fields_are_namespaced() {
        let record = PolicyRecord::new(id("2.185")).with_field("polopoly.Content", "name", "Sports");
        let policy = Policy::ReferenceListCapable { record, lists: BTreeMap::new() };

        assert_eq!(policy.field("polopoly.Content", "name"), Some("Sports"));
        assert_eq!(policy.field("polopoly.Content", "title"), None);
        assert_eq!(policy.field("other", "name"), None);
        assert_eq!(policy.reference_list("entities"), None);
    }

    #[test]
    fn aspect_decodes_into_beans() {
        #[derive(Debug, Deserialize)]
        struct Folder {
            name: String,
        }

        let aspect = AspectData::new("contentData", json!({"_type": "folder", "name": "Sports"}));
        assert_eq!(aspect.decode::<Folder>().unwrap().name, "Sports");

        let aspect = AspectData::new("contentData", json!({"_type": "folder"}));
        let err = aspect.decode::<Folder>().unwrap_err();
        assert!(err.to_string().contains("aspect 'contentData'"));
    }
}
