use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::IntoResponse,
};
use thiserror::Error;

use crate::state::AppState;
use crate::store::favorite::storage::FavoritesStoreError;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    RemoveFavorite {
        #[from]
        source: FavoritesStoreError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::RemoveFavorite { source } => {
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
            }
        }
    }
}

/// Axum handler: DELETE /favorites/{id}
pub async fn handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    match state.favorites.remove(id).await {
        Ok(favorites) => (StatusCode::OK, Json(favorites)).into_response(),
        Err(source) => HandlerError::RemoveFavorite { source }.into_response(),
    }
}
