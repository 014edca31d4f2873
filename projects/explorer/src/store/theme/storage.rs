use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::models::Theme;
use crate::store::{load_value, save_value, SaveValueError};

pub const STORAGE_KEY: &str = "github_explorer_theme";

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("SaveTheme: {source}")]
    SaveTheme {
        #[from]
        source: SaveValueError,
    },
}

pub struct ThemeStore {
    data_dir: PathBuf,
    theme: Mutex<Theme>,
}

impl ThemeStore {
    /// The value is stored bare (`light` or `dark`). Falls back to
    /// [`Theme::Light`] when nothing valid is stored.
    pub async fn load(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();

        let theme = match load_value(&data_dir, STORAGE_KEY).await {
            Ok(Some(raw)) => raw.trim().parse::<Theme>().unwrap_or_else(|err| {
                warn!("Ignoring stored theme: {err}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!("Could not load theme: {err}");
                Theme::default()
            }
        };

        debug!(%theme, "Loaded theme");

        Self {
            data_dir,
            theme: Mutex::new(theme),
        }
    }

    pub async fn get(&self) -> Theme {
        *self.theme.lock().await
    }

    pub async fn set(&self, theme: Theme) -> Result<Theme, ThemeStoreError> {
        let mut current = self.theme.lock().await;
        save_value(&self.data_dir, STORAGE_KEY, theme.as_str()).await?;
        *current = theme;
        Ok(theme)
    }

    pub async fn toggle(&self) -> Result<Theme, ThemeStoreError> {
        let mut current = self.theme.lock().await;
        let next = current.toggled();
        save_value(&self.data_dir, STORAGE_KEY, next.as_str()).await?;
        *current = next;
        Ok(next)
    }
}
