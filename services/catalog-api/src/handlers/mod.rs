use axum::http::StatusCode;

use tkani_utils::TkaniError;

pub mod admin;
pub mod fabrics;
pub mod health;
pub mod transfer;

pub use admin::*;
pub use fabrics::*;
pub use health::*;
pub use transfer::*;

/// Maps a domain error to the handler error shape.
pub(crate) fn error_response(error: TkaniError) -> (StatusCode, String) {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, error.to_string())
}
