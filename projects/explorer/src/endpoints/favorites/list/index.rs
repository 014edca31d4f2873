use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};

use crate::state::AppState;

/// Axum handler: GET /favorites
pub async fn handler(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.favorites.list().await))
}
