//! HTTP surface of the lookup slice.

use crate::{Entity, Lookup, LookupError};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mdc_derive::api_handler;
use mdc_domain::constants::LOOKUP_TAG;
use mdc_kernel::server::ApiState;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_handler(
    get,
    path = "/lookup/{type}/{name}",
    params(
        ("type" = String, Path, description = "Lookup type: `dimension.DeskFolders` or `dimension`"),
        ("name" = String, Path, description = "Dimension identifier; ignored by folder lookups"),
    ),
    responses(
        (status = OK, description = "Lookup values; empty for unknown types", body = [Entity]),
        (status = INTERNAL_SERVER_ERROR, description = "A collaborator failed or an identifier did not resolve"),
    ),
    tag = LOOKUP_TAG,
)]
pub(crate) async fn lookup_handler(
    State(state): State<ApiState>,
    Path((lookup_type, name)): Path<(String, String)>,
) -> Result<Json<Vec<Entity>>, LookupError> {
    let slice = state.try_get_slice::<Lookup>().map_err(|e| LookupError::from(e.to_string()))?;
    let entities = slice.service.lookup(&lookup_type, &name).await?;
    Ok(Json(entities))
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        error!(kind = ?self.kind(), error = %self, "Lookup failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Lookup failed").into_response()
    }
}

/// Routes of the lookup slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(lookup_handler))
}
