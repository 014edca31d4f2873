use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::IntoResponse,
};
use thiserror::Error;

use crate::state::AppState;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("FavoriteNotFound: {id}")]
    FavoriteNotFound { id: u64 },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::FavoriteNotFound { id } => {
                (StatusCode::NOT_FOUND, format!("Repository {id} is not a favorite")).into_response()
            }
        }
    }
}

/// Axum handler: GET /favorites/{id}
///
/// Answers with the favorite expanded to a repository record.
pub async fn handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    match state.favorites.get(id).await {
        Some(favorite) => (StatusCode::OK, Json(favorite.as_repository())).into_response(),
        None => HandlerError::FavoriteNotFound { id }.into_response(),
    }
}
