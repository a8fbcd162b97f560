//! Library metadata collaborator interface.
//!
//! The media library owns canonical titles, release years and episode
//! numbering; the search engine only reads them through this trait.

mod types;

pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the library metadata service.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Metadata backend error: {0}")]
    Backend(String),
}

/// Trait for looking up the entity under search.
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Look up a movie by library ID.
    async fn movie(&self, movie_id: u32) -> Result<MovieDetails, MetadataError>;

    /// Look up a season by library ID.
    async fn season(&self, season_id: u32) -> Result<SeasonDetails, MetadataError>;

    /// Look up an episode by library ID.
    async fn episode(&self, episode_id: u32) -> Result<EpisodeDetails, MetadataError>;
}
