//! In-memory collaborators for lookup tests.
#![allow(dead_code, unreachable_pub)]

use async_trait::async_trait;
use mdc_content::{
    AspectData, ContentError, ContentReference, ContentRepository, ContentVersionId, Policy,
    PolicyRecord, Subject,
};
use mdc_domain::content::ContentId;
use mdc_search::{QueryResponse, SearchError, SearchIndex, SearchQuery};
use serde_json::{Map, json};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

pub fn id(raw: &str) -> ContentId {
    ContentId::parse(raw).unwrap()
}

/// Serves a fixed list of document ids, honouring the query window.
#[derive(Debug, Default)]
pub struct FakeIndex {
    docs: Vec<ContentId>,
    fail: bool,
    queries: Mutex<Vec<SearchQuery>>,
}

impl FakeIndex {
    pub fn with_docs<'a>(ids: impl IntoIterator<Item = &'a str>) -> Arc<Self> {
        Arc::new(Self { docs: ids.into_iter().map(id).collect(), ..Self::default() })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { fail: true, ..Self::default() })
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchIndex for FakeIndex {
    async fn query(&self, query: &SearchQuery) -> Result<QueryResponse, SearchError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail {
            return Err(SearchError::Status {
                message: "503 Service Unavailable".into(),
                context: None,
            });
        }

        let start = usize::try_from(query.start()).unwrap();
        let rows = usize::try_from(query.rows()).unwrap();
        let docs = self
            .docs
            .iter()
            .skip(start)
            .take(rows)
            .map(|id| {
                let mut doc = Map::new();
                doc.insert("id".into(), json!(id.as_str()));
                doc
            })
            .collect();

        Ok(QueryResponse { num_found: self.docs.len() as u64, start: query.start(), docs })
    }
}

/// Policies and folder aspects keyed by content id.
#[derive(Debug, Default)]
pub struct FakeRepository {
    policies: HashMap<ContentId, Policy>,
    folders: HashMap<ContentId, Option<String>>,
    fail: bool,
    subjects: Mutex<Vec<Subject>>,
    policy_calls: Mutex<Vec<ContentId>>,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    /// Registers a generic policy named `name` under `polopoly.Content/name`.
    pub fn named(mut self, raw_id: &str, name: &str) -> Self {
        let record = PolicyRecord::new(id(raw_id)).with_field("polopoly.Content", "name", name);
        self.policies.insert(id(raw_id), Policy::Generic(record));
        self
    }

    /// Registers a policy that declares the given `entities` reference list.
    pub fn with_references(mut self, raw_id: &str, references: &[(&str, &str)]) -> Self {
        let list =
            references.iter().map(|(name, target)| ContentReference::new(*name, id(target))).collect();
        let lists = BTreeMap::from([("entities".to_owned(), list)]);
        self.policies.insert(
            id(raw_id),
            Policy::ReferenceListCapable { record: PolicyRecord::new(id(raw_id)), lists },
        );
        self
    }

    pub fn generic(mut self, raw_id: &str) -> Self {
        self.policies.insert(id(raw_id), Policy::Generic(PolicyRecord::new(id(raw_id))));
        self
    }

    pub fn folder(mut self, raw_id: &str, name: Option<&str>) -> Self {
        self.folders.insert(id(raw_id), name.map(str::to_owned));
        self
    }

    pub fn subjects(&self) -> Vec<Subject> {
        self.subjects.lock().unwrap().clone()
    }

    pub fn policy_calls(&self) -> Vec<ContentId> {
        self.policy_calls.lock().unwrap().clone()
    }

    fn unavailable(&self) -> Result<(), ContentError> {
        if self.fail {
            return Err(ContentError::Status { message: "502 Bad Gateway".into(), context: None });
        }
        Ok(())
    }
}

fn not_found(id: &impl ToString) -> ContentError {
    ContentError::NotFound { message: id.to_string().into(), context: None }
}

#[async_trait]
impl ContentRepository for FakeRepository {
    async fn resolve_policy(&self, id: &ContentId) -> Result<Policy, ContentError> {
        self.unavailable()?;
        self.policy_calls.lock().unwrap().push(id.clone());
        self.policies.get(id).cloned().ok_or_else(|| not_found(id))
    }

    async fn resolve_version(
        &self,
        id: &ContentId,
        subject: &Subject,
    ) -> Result<ContentVersionId, ContentError> {
        self.unavailable()?;
        self.subjects.lock().unwrap().push(subject.clone());
        if !self.folders.contains_key(id) {
            return Err(not_found(id));
        }
        Ok(ContentVersionId::new(ContentId::parse(&format!("{id}:v1")).unwrap()))
    }

    async fn get_aspect(
        &self,
        version: &ContentVersionId,
        aspect: &str,
        subject: &Subject,
    ) -> Result<AspectData, ContentError> {
        self.unavailable()?;
        self.subjects.lock().unwrap().push(subject.clone());
        let raw = version.as_str().strip_suffix(":v1").ok_or_else(|| not_found(version))?;
        let name = self.folders.get(&id(raw)).ok_or_else(|| not_found(version))?;
        let data = match name {
            Some(name) => json!({ "_type": "folder", "name": name }),
            None => json!({ "_type": "folder" }),
        };
        Ok(AspectData::new(aspect, data))
    }
}
