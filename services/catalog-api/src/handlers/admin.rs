//! Admin CRUD handlers.
//!
//! Creation and editing run the full admin validation workflow: draft rules
//! plus the price-must-be-positive check that lenient CSV import skips.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use tkani_models::{FabricDraft, FabricRecord};
use tkani_utils::{validate_model, validate_price};

use crate::AppState;

use super::error_response;

/// Create a catalog record.
///
/// POST /api/v1/fabrics
pub async fn create_fabric(
    State(state): State<AppState>,
    Json(draft): Json<FabricDraft>,
) -> Result<(StatusCode, Json<FabricRecord>), (StatusCode, String)> {
    let draft = draft.normalized();
    validate_model(&draft).map_err(error_response)?;
    validate_price(draft.price).map_err(error_response)?;

    let record = state.store.create(draft).await;
    info!(id = %record.id, name = %record.name, "fabric created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a record's fields.
///
/// PUT /api/v1/fabrics/{id}
pub async fn update_fabric(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<FabricDraft>,
) -> Result<Json<FabricRecord>, (StatusCode, String)> {
    let draft = draft.normalized();
    validate_model(&draft).map_err(error_response)?;
    validate_price(draft.price).map_err(error_response)?;

    let record = state
        .store
        .update(&id, draft)
        .await
        .ok_or((StatusCode::NOT_FOUND, format!("Fabric {} not found", id)))?;
    info!(id = %record.id, "fabric updated");
    Ok(Json(record))
}

/// Remove a record.
///
/// DELETE /api/v1/fabrics/{id}
pub async fn delete_fabric(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    if !state.store.delete(&id).await {
        return Err((StatusCode::NOT_FOUND, format!("Fabric {} not found", id)));
    }
    info!(id = %id, "fabric deleted");
    Ok(StatusCode::NO_CONTENT)
}
