use axum::{
    extract::{Extension, Json},
    response::IntoResponse,
};

use crate::endpoints::theme::{theme_response, ThemeBody};
use crate::state::AppState;

/// Axum handler: PUT /theme
pub async fn handler(
    Extension(state): Extension<AppState>,
    Json(input): Json<ThemeBody>,
) -> impl IntoResponse {
    theme_response(state.theme.set(input.theme).await)
}
