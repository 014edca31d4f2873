use std::sync::atomic::{AtomicU64, Ordering};

use interfaces_github_search::models::Repository;
use tokio::sync::RwLock;
use tracing::debug;

/// The result list analytics and charts are computed from
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub generation: u64,
    pub query: String,
    pub total_count: u64,
    pub items: Vec<Repository>,
    pub error: Option<String>,
}

pub enum SearchOutcome {
    Success {
        query: String,
        total_count: u64,
        items: Vec<Repository>,
    },
    Failure {
        query: String,
        message: String,
    },
}

/// Holds the latest search. Each search takes a generation from [`begin`];
/// a commit is kept only if no newer search has started since.
///
/// [`begin`]: ResultsStore::begin
#[derive(Default)]
pub struct ResultsStore {
    latest: AtomicU64,
    current: RwLock<ResultSet>,
}

impl ResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns `false` when the outcome was superseded and dropped.
    pub async fn commit(&self, generation: u64, outcome: SearchOutcome) -> bool {
        let mut current = self.current.write().await;
        // Newer search started, or this generation already committed
        if generation != self.latest.load(Ordering::SeqCst) || generation <= current.generation {
            debug!(generation, latest = self.latest.load(Ordering::SeqCst), "Dropping stale search result");
            return false;
        }

        *current = match outcome {
            SearchOutcome::Success {
                query,
                total_count,
                items,
            } => ResultSet {
                generation,
                query,
                total_count,
                items,
                error: None,
            },
            SearchOutcome::Failure { query, message } => ResultSet {
                generation,
                query,
                total_count: 0,
                items: Vec::new(),
                error: Some(message),
            },
        };
        true
    }

    pub async fn current(&self) -> ResultSet {
        self.current.read().await.clone()
    }
}
