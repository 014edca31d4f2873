use reqwest::{header::HeaderMap, Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{GitHubConfig, ACCEPT, API_VERSION};
use crate::models::{ApiErrorBody, RateLimit, SearchResponse};
use crate::query::{build_search_query, SearchFilters};

pub struct GitHubSearchResult {
    pub query: String,
    pub response: SearchResponse,
    pub rate_limit: RateLimit,
}

/// Fetches one page of `GET /search/repositories`.
pub async fn fetch_search_repositories(
    client: &Client,
    config: &GitHubConfig,
    filters: &SearchFilters,
    page: u32,
) -> Result<GitHubSearchResult, FetchSearchRepositoriesError> {
    let query = build_search_query(filters);
    debug!(%query, page, sort = %filters.sort, "Fetching repositories");

    let mut request = client
        .get(config.search_url())
        .query(&[
            ("q", query.as_str()),
            ("sort", filters.sort.as_str()),
            ("order", "desc"),
        ])
        .query(&[("per_page", config.per_page), ("page", page)])
        .header("Accept", ACCEPT)
        .header("X-GitHub-Api-Version", API_VERSION)
        .header("User-Agent", config.user_agent.as_str());

    if let Some(token) = &config.token {
        request = request.header("Authorization", format!("Bearer {token}"));
    }

    let response = request
        .send()
        .await
        .map_err(|source| FetchSearchRepositoriesError::RequestSend { source })?;

    let status = response.status();
    let rate_limit = read_rate_limit(response.headers());

    let body = response
        .text()
        .await
        .map_err(|source| FetchSearchRepositoriesError::ResponseRead { source })?;

    if !status.is_success() {
        let message = api_error_message(status, &body);
        warn!(%status, %message, "Repository search failed");
        return Err(FetchSearchRepositoriesError::Api { status, message });
    }

    let parsed: SearchResponse = serde_json::from_str(&body)
        .map_err(|source| FetchSearchRepositoriesError::DeserializeResponseBody { source })?;

    if let Some(remaining) = rate_limit.remaining {
        if remaining <= config.rate_limit_threshold {
            warn!(remaining, limit = ?rate_limit.limit, "GitHub rate limit nearly exhausted");
        }
    }
    info!(
        total_count = parsed.total_count,
        returned = parsed.items.len(),
        remaining = ?rate_limit.remaining,
        limit = ?rate_limit.limit,
        "Repository search succeeded"
    );

    Ok(GitHubSearchResult {
        query,
        response: parsed,
        rate_limit,
    })
}

fn read_rate_limit(headers: &HeaderMap) -> RateLimit {
    let number = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
    };

    RateLimit {
        remaining: number("x-ratelimit-remaining"),
        limit: number("x-ratelimit-limit"),
    }
}

/// The body's `message` field, else `HTTP <code>: <reason>`.
fn api_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            )
        })
}

#[derive(Debug, Error)]
pub enum FetchSearchRepositoriesError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("{message}")]
    Api {
        status: StatusCode,
        message: String,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        source: serde_json::Error,
    },
}
