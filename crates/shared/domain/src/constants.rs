//! Well-known names shared across crates.

/// Name reported by `/health` and used for the logger.
pub const SERVICE_NAME: &str = "mdc-server";

/// `OpenAPI` tag for system endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for lookup endpoints.
pub const LOOKUP_TAG: &str = "Lookup";

/// Lookup type resolved by the folder strategy.
pub const DESK_FOLDERS_LOOKUP: &str = "dimension.DeskFolders";
/// Lookup type resolved by the dimension strategy.
pub const DIMENSION_LOOKUP: &str = "dimension";

/// Environment prefix for configuration overrides (`MDC__SEARCH__URL`, ...).
pub const ENV_PREFIX: &str = "MDC";
