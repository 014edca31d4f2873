use std::path::PathBuf;

use chrono::Utc;
use interfaces_github_search::models::Repository;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::models::{Favorite, Favorites};
use crate::store::{load_json, remove_key, save_json, LoadJsonError, SaveJsonError};

pub const STORAGE_KEY: &str = "github_explorer_bookmarks";

#[derive(Debug, Error)]
pub enum FavoritesStoreError {
    #[error("SaveFavorites: {source}")]
    SaveFavorites {
        #[from]
        source: SaveJsonError,
    },
}

/// Favorites list persisted under [`STORAGE_KEY`]. Every mutation is written
/// before the lock is released.
pub struct FavoritesStore {
    data_dir: PathBuf,
    favorites: Mutex<Favorites>,
}

impl FavoritesStore {
    /// Unreadable or corrupt storage is dropped and the list starts empty.
    pub async fn load(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();

        let favorites = match load_json::<Vec<Favorite>>(&data_dir, STORAGE_KEY).await {
            Ok(Some(items)) => Favorites::new(items),
            Ok(None) => Favorites::default(),
            Err(err @ LoadJsonError::Deserialize { .. }) => {
                warn!("Discarding corrupt favorites: {err}");
                if let Err(err) = remove_key(&data_dir, STORAGE_KEY).await {
                    warn!("Could not remove corrupt favorites: {err}");
                }
                Favorites::default()
            }
            Err(err) => {
                warn!("Could not read favorites, starting empty: {err}");
                Favorites::default()
            }
        };

        info!(count = favorites.as_slice().len(), "Loaded favorites");

        Self {
            data_dir,
            favorites: Mutex::new(favorites),
        }
    }

    pub async fn list(&self) -> Vec<Favorite> {
        self.favorites.lock().await.as_slice().to_vec()
    }

    pub async fn get(&self, id: u64) -> Option<Favorite> {
        self.favorites.lock().await.get(id).cloned()
    }

    pub async fn is_favorite(&self, id: u64) -> bool {
        self.favorites.lock().await.contains(id)
    }

    /// Returns whether the repository is a favorite afterwards, with the new list.
    pub async fn toggle(
        &self,
        repo: &Repository,
    ) -> Result<(bool, Vec<Favorite>), FavoritesStoreError> {
        let mut favorites = self.favorites.lock().await;
        let mut updated = favorites.clone();
        let favorited = updated.toggle(repo, Utc::now());

        save_json(&self.data_dir, STORAGE_KEY, &updated).await?;
        *favorites = updated;

        info!(id = repo.id, favorited, "Toggled favorite");
        Ok((favorited, favorites.as_slice().to_vec()))
    }

    /// Removing an unknown id leaves storage untouched.
    pub async fn remove(&self, id: u64) -> Result<Vec<Favorite>, FavoritesStoreError> {
        let mut favorites = self.favorites.lock().await;
        if !favorites.contains(id) {
            return Ok(favorites.as_slice().to_vec());
        }

        let mut updated = favorites.clone();
        updated.remove(id);
        save_json(&self.data_dir, STORAGE_KEY, &updated).await?;
        *favorites = updated;

        info!(id, "Removed favorite");
        Ok(favorites.as_slice().to_vec())
    }
}
