//! GitHub repository search over the REST API
//!
//! - `query` turns user filters into a search `q` string
//! - `index` issues the search request
//! - `models` mirrors the JSON payload
//! - Reads GITHUB_TOKEN env var when present (unauthenticated otherwise)

pub mod config;
pub mod index;
pub mod models;
pub mod query;
