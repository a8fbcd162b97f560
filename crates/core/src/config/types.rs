use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::search::{ContentKind, QualityRule, SearchMode, TagRule};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub search: SearchTimingConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Search backend (indexer aggregator) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Backend type
    #[serde(default)]
    pub kind: BackendKind,
    /// Backend server URL (e.g., "http://localhost:9117")
    pub url: String,
    /// Backend API key
    pub api_key: String,
    /// Per-request HTTP timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

/// Available search backends
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Jackett,
    // Future: Prowlarr
}

fn default_timeout() -> u32 {
    30
}

/// Wall-clock budgets for a whole search fan-out, per mode. Automated
/// searches keep a pipeline waiting; interactive ones have a human who
/// tolerates more latency for completeness.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchTimingConfig {
    /// Deadline for automated searches in seconds
    #[serde(default = "default_automatic_deadline")]
    pub automatic_deadline_secs: u64,
    /// Deadline for interactive/manual searches in seconds
    #[serde(default = "default_interactive_deadline")]
    pub interactive_deadline_secs: u64,
}

impl SearchTimingConfig {
    /// The fan-out deadline for the given search mode.
    pub fn deadline_for(&self, mode: SearchMode) -> Duration {
        match mode {
            SearchMode::Automatic => Duration::from_secs(self.automatic_deadline_secs),
            SearchMode::Manual => Duration::from_secs(self.interactive_deadline_secs),
        }
    }
}

impl Default for SearchTimingConfig {
    fn default() -> Self {
        Self {
            automatic_deadline_secs: default_automatic_deadline(),
            interactive_deadline_secs: default_interactive_deadline(),
        }
    }
}

fn default_automatic_deadline() -> u64 {
    20
}

fn default_interactive_deadline() -> u64 {
    90
}

/// User quality/tag preferences and size bounds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreferencesConfig {
    /// Maximum acceptable movie size in MB
    #[serde(default = "default_max_movie_size_mb")]
    pub max_movie_size_mb: u64,
    /// Maximum acceptable single-episode size in MB; season searches
    /// multiply this by the episode count
    #[serde(default = "default_max_episode_size_mb")]
    pub max_episode_size_mb: u64,
    /// Quality rules for movie searches, in priority order
    #[serde(default)]
    pub movie_quality: Vec<QualityRule>,
    /// Quality rules for TV searches, in priority order
    #[serde(default)]
    pub tv_quality: Vec<QualityRule>,
    /// Release-group/source tag rules; empty means everything is acceptable
    #[serde(default)]
    pub tags: Vec<TagRule>,
}

impl PreferencesConfig {
    /// Quality rules for the given content kind.
    pub fn quality_rules(&self, kind: ContentKind) -> &[QualityRule] {
        match kind {
            ContentKind::Movie => &self.movie_quality,
            ContentKind::Tv => &self.tv_quality,
        }
    }

    pub fn tag_rules(&self) -> &[TagRule] {
        &self.tags
    }

    pub fn max_movie_size_bytes(&self) -> u64 {
        self.max_movie_size_mb * 1024 * 1024
    }

    pub fn max_episode_size_bytes(&self) -> u64 {
        self.max_episode_size_mb * 1024 * 1024
    }
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            max_movie_size_mb: default_max_movie_size_mb(),
            max_episode_size_mb: default_max_episode_size_mb(),
            movie_quality: Vec::new(),
            tv_quality: Vec::new(),
            tags: Vec::new(),
        }
    }
}

fn default_max_movie_size_mb() -> u64 {
    16_384
}

fn default_max_episode_size_mb() -> u64 {
    4_096
}
