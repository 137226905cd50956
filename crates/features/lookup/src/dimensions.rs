use crate::entity::Entity;
use crate::error::{LookupError, LookupErrorExt};
use mdc_content::{ContentError, ContentReference, ContentRepository};
use mdc_domain::content::ContentId;
use mdc_search::{SearchClient, SearchQuery, WithSecurityParent};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Reference list holding the explicitly ordered values of a dimension.
const REFERENCE_LIST: &str = "entities";
const NAME_NAMESPACE: &str = "polopoly.Content";
const NAME_FIELD: &str = "name";
const PAGE_SIZE: u64 = 255;

/// Lists the values of a dimension (taxonomy).
#[derive(Debug, Clone)]
pub struct DimensionLookup {
    search: SearchClient,
    content: Arc<dyn ContentRepository>,
}

impl DimensionLookup {
    #[must_use]
    pub const fn new(search: SearchClient, content: Arc<dyn ContentRepository>) -> Self {
        Self { search, content }
    }

    /// Resolves `dimension` and returns one `{code: name, label: name}` per value.
    ///
    /// A dimension whose policy carries a non-empty `entities` reference list yields
    /// exactly those values, ordered by their numeric entry name. Any other dimension
    /// yields every item the public index lists under it, in index order.
    ///
    /// # Errors
    /// [`LookupError::InvalidIdentifier`] for a malformed id; otherwise the first
    /// content or search failure.
    #[instrument(skip(self))]
    pub async fn lookup(&self, dimension: &str) -> Result<Vec<Entity>, LookupError> {
        let id = ContentId::parse(dimension).ok_or_else(|| LookupError::InvalidIdentifier {
            message: format!("'{dimension}'").into(),
            context: Some("dimension".into()),
        })?;
        let policy = self.content.resolve_policy(&id).await.context("Resolving dimension")?;

        match policy.reference_list(REFERENCE_LIST) {
            Some(references) if !references.is_empty() => {
                let ordered = ordered_references(references);
                debug!(values = ordered.len(), "Following reference list");
                self.entities(ordered.into_values()).await
            }
            _ => self.search_children(policy.content_id()).await,
        }
    }

    async fn search_children(&self, parent: &ContentId) -> Result<Vec<Entity>, LookupError> {
        let query = SearchQuery::new("*:*").decorate(&WithSecurityParent::new(parent.clone()));
        let mut result = self.search.search(query, PAGE_SIZE);
        let mut entities = Vec::new();

        while let Some(page) = result.next_page().await.context("Searching dimension values")? {
            entities.extend(self.entities(page.hits()?).await?);
        }

        debug!(values = entities.len(), "Dimension values found by search");
        Ok(entities)
    }

    async fn entities(
        &self,
        ids: impl IntoIterator<Item = ContentId>,
    ) -> Result<Vec<Entity>, LookupError> {
        let mut entities = Vec::new();
        for id in ids {
            let policy = self.content.resolve_policy(&id).await?;
            let name = policy.field(NAME_NAMESPACE, NAME_FIELD).ok_or_else(|| {
                ContentError::MissingField {
                    message: format!("{NAME_NAMESPACE}/{NAME_FIELD}").into(),
                    context: Some(id.to_string().into()),
                }
            })?;
            entities.push(Entity::new(name, name));
        }
        Ok(entities)
    }
}

/// Orders reference entries by their integer name. Entries whose name is not an
/// integer are dropped; on duplicate indexes the later entry wins.
fn ordered_references(references: &[ContentReference]) -> BTreeMap<i64, ContentId> {
    let mut ordered = BTreeMap::new();
    for reference in references {
        match reference.name.parse::<i64>() {
            Ok(index) => {
                ordered.insert(index, reference.content_id.clone());
            }
            Err(e) => {
                warn!(name = %reference.name, target = %reference.content_id, error = %e, "Skipping reference with non-numeric name");
            }
        }
    }
    ordered
}
