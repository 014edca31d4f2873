use std::path::Path;
use std::sync::Arc;

use interfaces_github_search::config::GitHubConfig;
use reqwest::Client;

use crate::store::{
    favorite::storage::FavoritesStore, results::ResultsStore, theme::storage::ThemeStore,
};

/// Shared by every handler through an `Extension` layer
#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub github: Arc<GitHubConfig>,
    pub results: Arc<ResultsStore>,
    pub favorites: Arc<FavoritesStore>,
    pub theme: Arc<ThemeStore>,
}

impl AppState {
    /// Loads favorites and theme from `data_dir`, or their defaults.
    pub async fn load(github: GitHubConfig, data_dir: &Path) -> Self {
        Self {
            http: Client::new(),
            github: Arc::new(github),
            results: Arc::new(ResultsStore::new()),
            favorites: Arc::new(FavoritesStore::load(data_dir).await),
            theme: Arc::new(ThemeStore::load(data_dir).await),
        }
    }
}
