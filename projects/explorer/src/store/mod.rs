//! File-backed key/value storage
//!
//! Every storage key maps to the file `<data_dir>/<key>` holding the raw
//! stored value. Structured values are stored as JSON.

pub mod favorite;
pub mod results;
pub mod theme;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub fn key_path(data_dir: &Path, key: &str) -> PathBuf {
    data_dir.join(key)
}

#[derive(Debug, Error)]
pub enum LoadValueError {
    #[error("ReadFile: {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// `Ok(None)` when nothing is stored under `key`.
pub async fn load_value(data_dir: &Path, key: &str) -> Result<Option<String>, LoadValueError> {
    let path = key_path(data_dir, key);
    match tokio::fs::read_to_string(&path).await {
        Ok(raw) => Ok(Some(raw)),
        Err(source) if source.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(LoadValueError::ReadFile { path, source }),
    }
}

#[derive(Debug, Error)]
pub enum SaveValueError {
    #[error("CreateDir: {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("WriteFile: {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub async fn save_value(data_dir: &Path, key: &str, value: &str) -> Result<(), SaveValueError> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|source| SaveValueError::CreateDir {
            path: data_dir.to_path_buf(),
            source,
        })?;

    let path = key_path(data_dir, key);
    tokio::fs::write(&path, value)
        .await
        .map_err(|source| SaveValueError::WriteFile { path, source })
}

#[derive(Debug, Error)]
pub enum LoadJsonError {
    #[error("LoadValue: {source}")]
    LoadValue {
        #[from]
        source: LoadValueError,
    },
    #[error("Deserialize: {path}: {source}")]
    Deserialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// `Ok(None)` when nothing is stored under `key`.
pub async fn load_json<T: DeserializeOwned>(
    data_dir: &Path,
    key: &str,
) -> Result<Option<T>, LoadJsonError> {
    let Some(raw) = load_value(data_dir, key).await? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| LoadJsonError::Deserialize {
            path: key_path(data_dir, key),
            source,
        })
}

#[derive(Debug, Error)]
pub enum SaveJsonError {
    #[error("Serialize: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("SaveValue: {source}")]
    SaveValue {
        #[from]
        source: SaveValueError,
    },
}

pub async fn save_json<T: Serialize + ?Sized>(
    data_dir: &Path,
    key: &str,
    value: &T,
) -> Result<(), SaveJsonError> {
    let body = serde_json::to_string_pretty(value)?;
    save_value(data_dir, key, &body).await?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum RemoveKeyError {
    #[error("RemoveFile: {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Removing a key that was never stored is not an error.
pub async fn remove_key(data_dir: &Path, key: &str) -> Result<(), RemoveKeyError> {
    let path = key_path(data_dir, key);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(source) if source.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(RemoveKeyError::RemoveFile { path, source }),
    }
}
