//! GitHub repository explorer service
//!
//! - Repository search, analytics and SVG charts in `endpoints/github/`
//! - Favorites and theme persisted as files in `store/`
//! - Aggregation and chart drawing in `utils/`
//! - Reads GITHUB_TOKEN env var for authenticated search (optional)

pub mod config;
pub mod endpoints;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
