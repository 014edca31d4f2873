use std::net::SocketAddr;
use std::path::PathBuf;

use interfaces_github_search::config::GitHubConfig;
use thiserror::Error;
use utils_trace::{TraceFormat, TraceFormatError};

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_DATA_DIR: &str = ".git-explorer";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("InvalidAddr: {value}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("InvalidLogFormat: {source}")]
    InvalidLogFormat {
        #[from]
        source: TraceFormatError,
    },
    #[error("InvalidFlag: {key}={value} (expected true or false)")]
    InvalidFlag { key: String, value: String },
}

#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
    pub log_level: String,
    pub log_format: TraceFormat,
    /// Fetch trending repositories once at startup
    pub load_trending: bool,
    pub github: GitHubConfig,
}

impl ExplorerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let raw_addr = value("EXPLORER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let log_format = match value("EXPLORER_LOG_FORMAT") {
            Some(raw) => raw.parse::<TraceFormat>()?,
            None => TraceFormat::default(),
        };

        let load_trending = match value("EXPLORER_LOAD_TRENDING") {
            None => true,
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        key: "EXPLORER_LOAD_TRENDING".to_string(),
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            addr,
            data_dir: value("EXPLORER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            log_level: value("EXPLORER_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
            load_trending,
            github: GitHubConfig::from_lookup(&lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ExplorerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_dir, PathBuf::from(".git-explorer"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, TraceFormat::Compact);
        assert!(config.load_trending);
        assert!(config.github.token.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = ExplorerConfig::from_lookup(lookup_from(&[
            ("EXPLORER_ADDR", "127.0.0.1:3000"),
            ("EXPLORER_DATA_DIR", "/tmp/explorer"),
            ("EXPLORER_LOG_LEVEL", "debug"),
            ("EXPLORER_LOG_FORMAT", "pretty"),
            ("EXPLORER_LOAD_TRENDING", "no"),
            ("GITHUB_TOKEN", "ghp_123"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/explorer"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, TraceFormat::Pretty);
        assert!(!config.load_trending);
        assert_eq!(config.github.token.as_deref(), Some("ghp_123"));
    }

    #[test]
    fn rejects_bad_values() {
        let err = ExplorerConfig::from_lookup(lookup_from(&[("EXPLORER_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));

        let err = ExplorerConfig::from_lookup(lookup_from(&[("EXPLORER_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat { .. }));

        let err = ExplorerConfig::from_lookup(lookup_from(&[("EXPLORER_LOAD_TRENDING", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { .. }));
    }
}
