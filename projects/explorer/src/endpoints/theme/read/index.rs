use axum::{extract::Extension, response::IntoResponse};

use crate::endpoints::theme::theme_response;
use crate::state::AppState;

/// Axum handler: GET /theme
pub async fn handler(Extension(state): Extension<AppState>) -> impl IntoResponse {
    theme_response(Ok(state.theme.get().await))
}
