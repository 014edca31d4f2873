use anyhow::Result;
use axum::serve;
use chrono::Utc;
use interfaces_github_search::query::trending_filters;
use projects_explorer::{
    config::{ConfigError, ExplorerConfig},
    endpoints::github::repositories::search::index::search_and_record,
    router::app,
    state::AppState,
};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum MainError {
    #[error("LoadConfig: {source}")]
    LoadConfig {
        #[source]
        source: ConfigError,
    },
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("TcpListenerBind: {source}")]
    TcpListenerBind {
        #[source]
        source: std::io::Error,
    },
    #[error("Serve: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = ExplorerConfig::from_env().map_err(|source| MainError::LoadConfig { source })?;

    utils_trace::init(&config.log_level, config.log_format)
        .map_err(|source| MainError::TracingInit { source })?;

    if config.github.token.is_none() {
        warn!("GITHUB_TOKEN not set, searches are unauthenticated and heavily rate limited");
    }

    let state = AppState::load(config.github.clone(), &config.data_dir).await;

    if config.load_trending {
        let state = state.clone();
        tokio::spawn(async move {
            let filters = trending_filters(Utc::now().date_naive());
            if let Err(err) = search_and_record(&state, &filters, 1).await {
                warn!("Initial trending load failed: {err}");
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| MainError::TcpListenerBind { source })?;

    info!("Server running on addr: {}", config.addr);

    serve(listener, app(state))
        .await
        .map_err(|source| MainError::Serve { source })?;

    Ok(())
}
