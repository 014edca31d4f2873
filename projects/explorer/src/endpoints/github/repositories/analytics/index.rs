use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::state::AppState;
use crate::utils::analytics::{
    calculate_stats, creation_timeline, language_distribution, size_distribution, LanguageCount,
    RepoStats, SizeBucket, TimelineBucket,
};

#[derive(Debug, Serialize)]
pub struct AnalyticsResponseBody {
    pub query: String,
    pub generation: u64,
    pub error: Option<String>,
    pub stats: RepoStats,
    pub languages: Vec<LanguageCount>,
    pub timeline: Vec<TimelineBucket>,
    pub sizes: Vec<SizeBucket>,
}

/// Axum handler: GET /github/repositories/analytics
pub async fn handler(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let current = state.results.current().await;

    let body = AnalyticsResponseBody {
        stats: calculate_stats(&current.items),
        languages: language_distribution(&current.items),
        timeline: creation_timeline(&current.items),
        sizes: size_distribution(&current.items),
        query: current.query,
        generation: current.generation,
        error: current.error,
    };

    (StatusCode::OK, Json(body))
}
