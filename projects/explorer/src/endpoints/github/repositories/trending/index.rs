use axum::{
    extract::{Extension, Json, Query},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use interfaces_github_search::query::trending_filters;

use crate::endpoints::github::repositories::search::index::{search_and_record, PageQuery};
use crate::state::AppState;

/// Axum handler: GET /github/repositories/trending
pub async fn handler(
    Extension(state): Extension<AppState>,
    Query(page): Query<PageQuery>,
) -> impl IntoResponse {
    let filters = trending_filters(Utc::now().date_naive());

    match search_and_record(&state, &filters, page.page).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => err.into_response(),
    }
}
