//! Mock search backend for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::search::{ContentKind, Indexer, RawCandidate, SearchBackend, SearchError};

/// A recorded backend query for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedQuery {
    /// Indexer ID the query targeted.
    pub indexer: String,
    /// The query text.
    pub query: String,
    /// Content kind requested.
    pub kind: ContentKind,
}

/// Mock implementation of the SearchBackend trait.
///
/// Provides controllable behavior for testing:
/// - Canned results per indexer
/// - Per-indexer failure injection and artificial latency
/// - Recorded queries for assertions
pub struct MockBackend {
    indexers: RwLock<Vec<Indexer>>,
    results: RwLock<HashMap<String, Vec<RawCandidate>>>,
    failing: RwLock<HashMap<String, String>>,
    delays: RwLock<HashMap<String, Duration>>,
    queries: RwLock<Vec<RecordedQuery>>,
    listing_error: RwLock<Option<String>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a mock backend with no indexers configured.
    pub fn new() -> Self {
        Self {
            indexers: RwLock::new(Vec::new()),
            results: RwLock::new(HashMap::new()),
            failing: RwLock::new(HashMap::new()),
            delays: RwLock::new(HashMap::new()),
            queries: RwLock::new(Vec::new()),
            listing_error: RwLock::new(None),
        }
    }

    /// Create a mock backend with the given indexers, in priority order.
    pub fn with_indexers(names: &[&str]) -> Self {
        let indexers = names
            .iter()
            .enumerate()
            .map(|(priority, name)| Indexer {
                id: name.to_string(),
                title: name.to_string(),
                priority,
            })
            .collect();
        Self {
            indexers: RwLock::new(indexers),
            ..Self::new()
        }
    }

    /// Set the results one indexer returns for every query.
    pub async fn set_results(&self, indexer_id: &str, results: Vec<RawCandidate>) {
        self.results
            .write()
            .await
            .insert(indexer_id.to_string(), results);
    }

    /// Make every search against one indexer fail.
    pub async fn fail_indexer(&self, indexer_id: &str, message: &str) {
        self.failing
            .write()
            .await
            .insert(indexer_id.to_string(), message.to_string());
    }

    /// Delay every search against one indexer.
    pub async fn delay_indexer(&self, indexer_id: &str, delay: Duration) {
        self.delays
            .write()
            .await
            .insert(indexer_id.to_string(), delay);
    }

    /// Make the indexer listing itself fail.
    pub async fn fail_indexer_listing(&self, message: &str) {
        *self.listing_error.write().await = Some(message.to_string());
    }

    /// Get recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    /// Get the number of queries performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }
}

#[async_trait]
impl SearchBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn indexers(&self) -> Result<Vec<Indexer>, SearchError> {
        if let Some(message) = self.listing_error.read().await.clone() {
            return Err(SearchError::ConnectionFailed(message));
        }
        Ok(self.indexers.read().await.clone())
    }

    async fn search(
        &self,
        indexer: &Indexer,
        query: &str,
        kind: ContentKind,
    ) -> Result<Vec<RawCandidate>, SearchError> {
        self.queries.write().await.push(RecordedQuery {
            indexer: indexer.id.clone(),
            query: query.to_string(),
            kind,
        });

        if let Some(delay) = self.delays.read().await.get(&indexer.id).copied() {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = self.failing.read().await.get(&indexer.id).cloned() {
            return Err(SearchError::ApiError(message));
        }
        Ok(self
            .results
            .read()
            .await
            .get(&indexer.id)
            .cloned()
            .unwrap_or_default())
    }
}
