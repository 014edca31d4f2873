use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
};
use thiserror::Error;

use crate::state::AppState;
use crate::utils::analytics::{creation_timeline, language_distribution, size_distribution};
use crate::utils::chart::{
    generate_language_chart, generate_size_chart, generate_timeline_chart, ChartConfig, ChartKind,
};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("ChartGeneration: {message}")]
    ChartGeneration { message: String },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::ChartGeneration { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Chart generation failed: {message}"),
            )
                .into_response(),
        }
    }
}

/// Axum handler: GET /github/repositories/charts/{kind}
pub async fn handler(
    Extension(state): Extension<AppState>,
    Path(kind): Path<ChartKind>,
) -> impl IntoResponse {
    let current = state.results.current().await;
    let config = ChartConfig::titled(kind);

    let svg = match kind {
        ChartKind::Languages => generate_language_chart(&language_distribution(&current.items), &config),
        ChartKind::Timeline => generate_timeline_chart(&creation_timeline(&current.items), &config),
        ChartKind::Sizes => generate_size_chart(&size_distribution(&current.items), &config),
    };

    match svg {
        Ok(svg) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "image/svg+xml"),
                (header::CACHE_CONTROL, "no-store"),
            ],
            svg,
        )
            .into_response(),
        Err(message) => HandlerError::ChartGeneration { message }.into_response(),
    }
}
