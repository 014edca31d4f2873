use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use interfaces_github_search::models::Repository;
use serde::Serialize;
use thiserror::Error;

use crate::state::AppState;
use crate::store::favorite::{models::Favorite, storage::FavoritesStoreError};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    ToggleFavorite {
        #[from]
        source: FavoritesStoreError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::ToggleFavorite { source } => {
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleResponseBody {
    pub favorited: bool,
    pub favorites: Vec<Favorite>,
}

/// Axum handler: POST /favorites/toggle
///
/// Body is the repository record as returned by search.
pub async fn handler(
    Extension(state): Extension<AppState>,
    Json(repo): Json<Repository>,
) -> impl IntoResponse {
    match state.favorites.toggle(&repo).await {
        Ok((favorited, favorites)) => (
            StatusCode::OK,
            Json(ToggleResponseBody {
                favorited,
                favorites,
            }),
        )
            .into_response(),
        Err(source) => HandlerError::ToggleFavorite { source }.into_response(),
    }
}
