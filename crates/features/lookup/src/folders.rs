use crate::entity::Entity;
use crate::error::{LookupError, LookupErrorExt};
use mdc_content::{ContentError, ContentRepository, Subject};
use mdc_domain::content::ContentId;
use mdc_search::{SearchIndex, SearchQuery, SortOrder};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

const FOLDER_QUERY: &str = "+atex_desk_objectType:(folder)";
const NAME_SORT_FIELD: &str = "name_atex_desk_ss";
const PAGE_SIZE: u64 = 10;
const FOLDER_ASPECT: &str = "contentData";

/// The part of the folder aspect the lookup reads.
#[derive(Deserialize)]
struct DeskFolder {
    name: Option<String>,
}

/// Lists every desk folder, ordered by name.
#[derive(Debug, Clone)]
pub struct FolderLookup {
    index: Arc<dyn SearchIndex>,
    content: Arc<dyn ContentRepository>,
}

impl FolderLookup {
    #[must_use]
    pub fn new(index: Arc<dyn SearchIndex>, content: Arc<dyn ContentRepository>) -> Self {
        Self { index, content }
    }

    /// Pages through the desk index ten folders at a time until a page comes back
    /// empty, resolving each hit to `{code: id, label: folder name}`.
    ///
    /// # Errors
    /// The first search or content failure aborts the whole lookup.
    #[instrument(skip(self))]
    pub async fn lookup(&self) -> Result<Vec<Entity>, LookupError> {
        let query = folder_query();
        let subject = Subject::nobody();
        let mut entities = Vec::new();
        let mut page = 0;

        loop {
            let window = query.clone().window(page * PAGE_SIZE, PAGE_SIZE);
            let response = self.index.query(&window).await.context("Querying desk folders")?;
            page += 1;

            if response.docs.is_empty() {
                break;
            }
            for id in response.hits()? {
                entities.push(self.resolve(id, &subject).await?);
            }
        }

        debug!(folders = entities.len(), pages = page, "Folder lookup finished");
        Ok(entities)
    }

    async fn resolve(&self, id: ContentId, subject: &Subject) -> Result<Entity, LookupError> {
        let version = self.content.resolve_version(&id, subject).await?;
        let aspect = self.content.get_aspect(&version, FOLDER_ASPECT, subject).await?;
        let name = aspect.decode::<DeskFolder>()?.name.ok_or_else(|| ContentError::MissingField {
            message: "name".into(),
            context: Some(format!("folder {id}").into()),
        })?;
        Ok(Entity::new(id.as_str(), name))
    }
}

fn folder_query() -> SearchQuery {
    SearchQuery::new(FOLDER_QUERY)
        .param("variant", "list")
        .field("id")
        .sort(NAME_SORT_FIELD, SortOrder::Asc)
}
