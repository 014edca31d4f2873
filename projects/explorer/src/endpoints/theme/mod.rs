pub mod read;
pub mod toggle;
pub mod update;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::theme::{
    models::{Theme, ATTRIBUTE},
    storage::ThemeStoreError,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponseBody {
    pub theme: Theme,
    /// Root-element attribute the value belongs on
    pub attribute: &'static str,
}

impl From<Theme> for ThemeResponseBody {
    fn from(theme: Theme) -> Self {
        Self {
            theme,
            attribute: ATTRIBUTE,
        }
    }
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    SaveTheme {
        #[from]
        source: ThemeStoreError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::SaveTheme { source } => {
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
            }
        }
    }
}

pub(crate) fn theme_response(result: Result<Theme, ThemeStoreError>) -> axum::response::Response {
    match result {
        Ok(theme) => (StatusCode::OK, Json(ThemeResponseBody::from(theme))).into_response(),
        Err(source) => HandlerError::SaveTheme { source }.into_response(),
    }
}
