//! Types for the torrent search and ranking engine.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::metadata::MetadataError;

/// A configured indexer, fetched fresh from the backend per search call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Indexer {
    /// Backend-side indexer ID.
    pub id: String,
    /// Human-readable indexer name.
    pub title: String,
    /// Position in the configured indexer list; lower is preferred.
    pub priority: usize,
}

/// Content category used to scope backend searches and pick the quality
/// rule set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Movie,
    Tv,
}

/// Search mode: automated pipelines take the top candidate under a short
/// deadline; manual searches skip filtering and return the full ranked list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    Automatic,
    Manual,
}

impl SearchMode {
    /// Whether the acceptance filter is skipped for this mode.
    pub fn bypasses_filter(self) -> bool {
        matches!(self, SearchMode::Manual)
    }
}

/// Per-request search parameters resolved by the orchestrating engine.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub kind: ContentKind,
    pub mode: SearchMode,
    /// Season-level request: single-episode releases are rejected.
    pub season_pack: bool,
    /// Upper size bound; candidates at or above it are rejected.
    pub max_size_bytes: u64,
}

/// A single raw hit from one indexer for one query, before normalization.
///
/// Seeders and peers stay signed: indexers report unknown counts as -1 and
/// the acceptance filter needs to see that.
#[derive(Debug, Clone)]
pub struct RawCandidate {
    pub guid: String,
    pub title: String,
    pub indexer: Indexer,
    pub size_bytes: u64,
    pub seeders: i64,
    pub peers: i64,
    pub link: Option<String>,
    pub magnet_uri: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
}

/// A user-configured quality preference: matches when any keyword equals a
/// normalized title token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualityRule {
    pub name: String,
    pub score: i64,
    pub keywords: Vec<String>,
}

/// A release-group/source preference: matches when the rule name appears as
/// a normalized title token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagRule {
    pub name: String,
    pub score: i64,
}

/// Quality resolved for a candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quality {
    pub label: String,
    pub score: i64,
}

/// Tag resolved for a candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
    pub score: i64,
}

/// A normalized, scored candidate. Guid is unique within one search's
/// result set after deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub guid: String,
    pub title: String,
    pub normalized_title: String,
    pub tokens: Vec<String>,
    pub indexer: Indexer,
    pub quality: Quality,
    pub tag: Tag,
    pub size_bytes: u64,
    pub seeders: i64,
    pub peers: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnet_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,
}

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search backend connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Search backend API error: {0}")]
    ApiError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("All indexers failed")]
    AllIndexersFailed(HashMap<String, String>),

    #[error("Metadata lookup failed: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Trait for indexer-aggregator search backends (Jackett, Prowlarr, ...).
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// List the configured indexers, in priority order.
    async fn indexers(&self) -> Result<Vec<Indexer>, SearchError>;

    /// Run one query against one indexer.
    async fn search(
        &self,
        indexer: &Indexer,
        query: &str,
        kind: ContentKind,
    ) -> Result<Vec<RawCandidate>, SearchError>;
}
