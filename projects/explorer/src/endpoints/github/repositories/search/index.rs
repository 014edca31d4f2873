use axum::{
    extract::{Extension, Json, Query},
    http::StatusCode,
    response::IntoResponse,
};
use interfaces_github_search::{
    index::{fetch_search_repositories, FetchSearchRepositoriesError, GitHubSearchResult},
    models::{RateLimit, Repository},
    query::{build_search_query, SearchFilters},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::router::TRENDING_PATH;
use crate::state::AppState;
use crate::store::results::SearchOutcome;
use crate::utils::analytics::{calculate_stats, RepoStats};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    SearchRepositories {
        #[from]
        source: FetchSearchRepositoriesError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::SearchRepositories { source } => (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({
                    "error": source.to_string(),
                    "retry": TRENDING_PATH,
                })),
            )
                .into_response(),
        }
    }
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page")]
    pub page: u32,
}

#[derive(Debug, Serialize)]
pub struct SearchResponseBody {
    pub query: String,
    pub total_count: u64,
    pub items: Vec<Repository>,
    pub stats: RepoStats,
    /// Ids among `items` that are currently favorites
    pub favorite_ids: Vec<u64>,
    pub rate_limit: RateLimit,
}

/// Runs one search and records it as the current result set, unless a newer
/// search started in the meantime.
pub async fn search_and_record(
    state: &AppState,
    filters: &SearchFilters,
    page: u32,
) -> Result<SearchResponseBody, HandlerError> {
    let generation = state.results.begin();
    let page = page.max(1);

    let GitHubSearchResult {
        query,
        response,
        rate_limit,
    } = match fetch_search_repositories(&state.http, &state.github, filters, page).await {
        Ok(result) => result,
        Err(source) => {
            error!("Search failed: {source}");
            state
                .results
                .commit(
                    generation,
                    SearchOutcome::Failure {
                        query: build_search_query(filters),
                        message: source.to_string(),
                    },
                )
                .await;
            return Err(HandlerError::SearchRepositories { source });
        }
    };

    let recorded = state
        .results
        .commit(
            generation,
            SearchOutcome::Success {
                query: query.clone(),
                total_count: response.total_count,
                items: response.items.clone(),
            },
        )
        .await;
    info!(%query, generation, recorded, "Search finished");

    let mut favorite_ids = Vec::new();
    for repo in &response.items {
        if state.favorites.is_favorite(repo.id).await {
            favorite_ids.push(repo.id);
        }
    }

    Ok(SearchResponseBody {
        stats: calculate_stats(&response.items),
        query,
        total_count: response.total_count,
        items: response.items,
        favorite_ids,
        rate_limit,
    })
}

/// Axum handler: GET /github/repositories/search
pub async fn handler(
    Extension(state): Extension<AppState>,
    Query(filters): Query<SearchFilters>,
    Query(page): Query<PageQuery>,
) -> impl IntoResponse {
    match search_and_record(&state, &filters, page.page).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => err.into_response(),
    }
}
