//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the API state registry and
//! the system routes every server mounts.
//!
//! ## Config loading
//! ```rust,ignore
//! use mdc_kernel::config::load_config;
//! use mdc_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server"))?;
//! ```

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use mdc_domain as domain;
