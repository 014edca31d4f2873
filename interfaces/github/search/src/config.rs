pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_QUERY: &str = "stars:>500 sort:stars-desc";
pub const PER_PAGE: u32 = 24;
pub const ACCEPT: &str = "application/vnd.github+json";
pub const API_VERSION: &str = "2022-11-28";
pub const USER_AGENT: &str = "git-explorer-rust";
pub const RATE_LIMIT_THRESHOLD: u64 = 10;

/// Connection settings for the search API.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_base: String,
    pub token: Option<String>,
    pub per_page: u32,
    pub user_agent: String,
    /// Remaining-request count at or below which a warning is logged.
    pub rate_limit_threshold: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            per_page: PER_PAGE,
            user_agent: USER_AGENT.to_string(),
            rate_limit_threshold: RATE_LIMIT_THRESHOLD,
        }
    }
}

impl GitHubConfig {
    /// Reads `GITHUB_API_BASE` and `GITHUB_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup("GITHUB_API_BASE")
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let token = lookup("GITHUB_TOKEN")
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        Self {
            api_base,
            token,
            ..Self::default()
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/search/repositories", self.api_base)
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
    fn defaults_without_env() {
        let config = GitHubConfig::from_lookup(|_| None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.token, None);
        assert_eq!(config.per_page, 24);
        assert_eq!(config.search_url(), "https://api.github.com/search/repositories");
    }

    #[test]
    fn blank_token_is_ignored() {
        let config = GitHubConfig::from_lookup(lookup_from(&[("GITHUB_TOKEN", "   ")]));
        assert_eq!(config.token, None);
    }

    #[test]
    fn custom_base_drops_trailing_slash() {
        let config = GitHubConfig::from_lookup(lookup_from(&[
            ("GITHUB_API_BASE", "http://localhost:9000/"),
            ("GITHUB_TOKEN", "ghp_abc"),
        ]));
        assert_eq!(config.search_url(), "http://localhost:9000/search/repositories");
        assert_eq!(config.token.as_deref(), Some("ghp_abc"));
    }
}
