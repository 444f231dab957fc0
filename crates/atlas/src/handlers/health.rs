//! Root and liveness endpoints.

use axum::{http::StatusCode, response::IntoResponse, Json};

/// GET / - Welcome message.
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the country-continent API!"
    }))
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
