use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::*, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/fabrics", get(list_fabrics).post(create_fabric))
        .route("/fabrics/import", post(import_fabrics))
        .route("/fabrics/export", get(export_fabrics))
        .route(
            "/fabrics/:id",
            get(get_fabric).put(update_fabric).delete(delete_fabric),
        )
        .route("/fabrics/:id/related", get(related_fabrics))
        .route("/categories", get(list_categories))
}
