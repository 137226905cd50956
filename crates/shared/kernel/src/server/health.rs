use super::ApiState;
use axum::extract::State;
use axum::http::header;
use axum::{Json, response::IntoResponse};
use mdc_derive::{api_handler, api_model};
use mdc_domain::constants::{SERVICE_NAME, SYSTEM_TAG};
use std::sync::LazyLock;
use std::time::Instant;

#[api_model]
/// Liveness report of the lookup service
struct HealthResponse {
    /// Status
    status: &'static str,
    /// Service name
    service: &'static str,
    /// Version
    version: &'static str,
    /// Uptime in seconds
    uptime: u64,
    /// Search index this instance queries
    search: SearchEndpoint,
    /// Content API base URL
    content_api: String,
    /// Registered feature slices
    slices: Vec<String>,
}

#[api_model]
/// Solr location and cores
struct SearchEndpoint {
    url: String,
    core: String,
    public_core: String,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

// Collaborators are listed, never contacted.
#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Liveness and configured collaborators", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let search = &state.config.search;
    let mut slices: Vec<String> = state.slice_names().map(str::to_owned).collect();
    slices.sort_unstable();

    let body = HealthResponse {
        status: "up",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
        search: SearchEndpoint {
            url: search.url.clone(),
            core: search.core.clone(),
            public_core: search.public_core.clone(),
        },
        content_api: state.config.content.api_url.clone(),
        slices,
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
