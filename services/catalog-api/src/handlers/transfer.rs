//! CSV import/export handlers.

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use tkani_utils::csv::{CatalogExporter, CatalogImporter, EXPORT_FILE_NAME};
use tkani_utils::validate_file_type;

use crate::AppState;

use super::error_response;

/// Catalog import response
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub upload_id: Uuid,
    pub filename: String,
    /// Records appended to the catalog by this upload.
    pub imported: usize,
    /// Catalog size after the append.
    pub catalog_size: usize,
    /// Per-row degradations; the upload itself still succeeded.
    pub warnings: Vec<String>,
}

/// Upload a catalog CSV and append its records.
///
/// POST /api/v1/fabrics/import
///
/// Only a total read failure rejects the upload (with zero records added);
/// malformed rows degrade to fallback values per the import policy.
pub async fn import_fabrics(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, (StatusCode, String)> {
    // Get file from multipart
    let field = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read upload: {}", e)))?
        .ok_or((StatusCode::BAD_REQUEST, "No file provided".to_string()))?;

    let filename = field
        .file_name()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "catalog.csv".to_string());

    validate_file_type(&filename, &["csv"]).map_err(error_response)?;

    let data = field
        .bytes()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read file data: {}", e)))?;

    let report = CatalogImporter::new()
        .import_bytes(&filename, &data)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read catalog: {}", e)))?;

    let records = state.store.create_many(report.drafts).await;
    info!(
        upload_id = %report.id,
        filename = %report.filename,
        imported = records.len(),
        warnings = report.warnings.len(),
        "catalog import"
    );

    Ok(Json(ImportResponse {
        upload_id: report.id,
        filename: report.filename,
        imported: records.len(),
        catalog_size: state.store.len().await,
        warnings: report.warnings,
    }))
}

/// Download the whole catalog as CSV.
///
/// GET /api/v1/fabrics/export
pub async fn export_fabrics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let records = state.store.snapshot().await;
    let content = CatalogExporter::new()
        .export(&records)
        .map_err(error_response)?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ),
    ];
    Ok((headers, content))
}
