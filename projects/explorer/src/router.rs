use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::endpoints::{favorites, github::repositories, theme};
use crate::state::AppState;

pub const SEARCH_PATH: &str = "/github/repositories/search";
pub const TRENDING_PATH: &str = "/github/repositories/trending";
pub const ANALYTICS_PATH: &str = "/github/repositories/analytics";
pub const CHART_PATH: &str = "/github/repositories/charts/{kind}";
pub const FAVORITES_PATH: &str = "/favorites";
pub const FAVORITE_TOGGLE_PATH: &str = "/favorites/toggle";
pub const FAVORITE_PATH: &str = "/favorites/{id}";
pub const THEME_PATH: &str = "/theme";
pub const THEME_TOGGLE_PATH: &str = "/theme/toggle";

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(SEARCH_PATH, get(repositories::search::index::handler))
        .route(TRENDING_PATH, get(repositories::trending::index::handler))
        .route(ANALYTICS_PATH, get(repositories::analytics::index::handler))
        .route(CHART_PATH, get(repositories::chart::index::handler))
        .route(FAVORITES_PATH, get(favorites::list::index::handler))
        .route(FAVORITE_TOGGLE_PATH, post(favorites::toggle::index::handler))
        .route(
            FAVORITE_PATH,
            get(favorites::read::index::handler).delete(favorites::remove::index::handler),
        )
        .route(
            THEME_PATH,
            get(theme::read::index::handler).put(theme::update::index::handler),
        )
        .route(THEME_TOGGLE_PATH, post(theme::toggle::index::handler))
        .layer(Extension(state))
}
