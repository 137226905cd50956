use crate::dimensions::DimensionLookup;
use crate::entity::Entity;
use crate::error::LookupError;
use crate::folders::FolderLookup;
use crate::kind::LookupKind;
use mdc_content::ContentRepository;
use mdc_search::{SearchClient, SearchIndex};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Dispatches lookup requests to the strategy selected by their type.
#[derive(Debug, Clone)]
pub struct LookupService {
    folders: FolderLookup,
    dimensions: DimensionLookup,
}

impl LookupService {
    /// `desk_index` serves folder queries, `public_index` the security-scoped dimension
    /// search; both strategies resolve hits through `content`.
    #[must_use]
    pub fn new(
        desk_index: Arc<dyn SearchIndex>,
        public_index: Arc<dyn SearchIndex>,
        content: Arc<dyn ContentRepository>,
    ) -> Self {
        Self {
            folders: FolderLookup::new(desk_index, Arc::clone(&content)),
            dimensions: DimensionLookup::new(SearchClient::new(public_index), content),
        }
    }

    /// Resolves `(lookup_type, name)` to entities in the strategy's order.
    ///
    /// `name` is only read by dimension lookups. Unknown types yield an empty list.
    ///
    /// # Errors
    /// Propagates the strategy's error unchanged.
    #[instrument(skip(self))]
    pub async fn lookup(&self, lookup_type: &str, name: &str) -> Result<Vec<Entity>, LookupError> {
        let Some(kind) = LookupKind::from_type(lookup_type) else {
            debug!("Unrecognized lookup type");
            return Ok(Vec::new());
        };

        match kind {
            LookupKind::DeskFolders => self.folders.lookup().await,
            LookupKind::Dimension => self.dimensions.lookup(name).await,
        }
    }
}
