//! Facade crate for the lookup service features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `mdc` with the `server` feature to get the routers.
//! - Call [`init`] with the collaborators to register every feature slice.

pub use mdc_content as content;
pub use mdc_domain as domain;
pub use mdc_kernel as kernel;
pub use mdc_search as search;

use mdc_content::ContentRepository;
use mdc_search::SearchIndex;
use std::sync::Arc;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use mdc_kernel::server::system_router;
        pub use mdc_lookup::server::router as lookup_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use mdc_lookup as lookup;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "lookup",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Collaborator handles shared by the feature slices.
#[derive(Debug, Clone)]
pub struct Collaborators {
    /// Desk index: folders and other desk objects.
    pub desk_index: Arc<dyn SearchIndex>,
    /// Public policy index, searched under a security parent.
    pub public_index: Arc<dyn SearchIndex>,
    pub content: Arc<dyn ContentRepository>,
}

/// Initialize all features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    collaborators: &Collaborators,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Lookup
    slices.push(features::lookup::init(
        Arc::clone(&collaborators.desk_index),
        Arc::clone(&collaborators.public_index),
        Arc::clone(&collaborators.content),
    )?);

    Ok(slices)
}
