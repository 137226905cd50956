//! Common imports for slices and applications.

pub use crate::config::{ConfigError, load_config};
pub use mdc_domain::config::ApiConfig;
pub use mdc_domain::content::ContentId;
pub use mdc_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
