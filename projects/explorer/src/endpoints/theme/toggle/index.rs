use axum::{extract::Extension, response::IntoResponse};

use crate::endpoints::theme::theme_response;
use crate::state::AppState;

/// Axum handler: POST /theme/toggle
pub async fn handler(Extension(state): Extension<AppState>) -> impl IntoResponse {
    theme_response(state.theme.toggle().await)
}
