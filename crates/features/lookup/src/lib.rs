//! Lookup feature slice: resolves `(type, name)` pairs into selectable metadata values.
//!
//! * `dimension.DeskFolders`: every desk folder, ordered by name ([`FolderLookup`]).
//! * `dimension`: the values of the dimension `name` ([`DimensionLookup`]).
//!
//! Any other type resolves to an empty list.

mod dimensions;
mod entity;
mod error;
mod folders;
mod kind;
#[cfg(feature = "server")]
pub mod server;
mod service;

pub use dimensions::DimensionLookup;
pub use entity::Entity;
pub use error::{FailureKind, LookupError, LookupErrorExt};
pub use folders::FolderLookup;
pub use kind::LookupKind;
pub use service::LookupService;

use mdc_content::ContentRepository;
use mdc_kernel::domain::registry::InitializedSlice;
use mdc_search::SearchIndex;
use std::sync::Arc;

/// Lookup feature state
#[mdc_derive::mdc_slice]
pub struct Lookup {
    pub service: LookupService,
}

/// Initialize the lookup feature over the given collaborators.
///
/// # Errors
/// Currently infallible; the signature matches the other slice initializers.
pub fn init(
    desk_index: Arc<dyn SearchIndex>,
    public_index: Arc<dyn SearchIndex>,
    content: Arc<dyn ContentRepository>,
) -> Result<InitializedSlice, LookupError> {
    let service = LookupService::new(desk_index, public_index, content);
    let slice = Lookup::new(LookupInner { service });

    tracing::info!("Lookup slice initialized");
    Ok(InitializedSlice::new(slice))
}
