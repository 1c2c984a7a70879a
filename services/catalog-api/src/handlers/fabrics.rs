//! Public catalog browsing handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

use tkani_models::{CatalogQuery, FabricRecord};

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct FabricListResponse {
    pub fabrics: Vec<FabricRecord>,
    pub total: usize,
}

/// List catalog records with optional category filter, search, and sort.
///
/// GET /api/v1/fabrics
pub async fn list_fabrics(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<FabricListResponse> {
    let fabrics = state.store.list(&query).await;
    Json(FabricListResponse {
        total: fabrics.len(),
        fabrics,
    })
}

/// Fetch one record.
///
/// GET /api/v1/fabrics/{id}
pub async fn get_fabric(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FabricRecord>, (StatusCode, String)> {
    state
        .store
        .get(&id)
        .await
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("Fabric {} not found", id)))
}

/// Other records from the same category, for the detail page.
///
/// GET /api/v1/fabrics/{id}/related
pub async fn related_fabrics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FabricRecord>>, (StatusCode, String)> {
    state
        .store
        .related(&id, state.config.catalog.related_limit)
        .await
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("Fabric {} not found", id)))
}

/// Distinct category names in first-seen order.
///
/// GET /api/v1/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store.categories().await)
}
