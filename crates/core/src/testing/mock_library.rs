//! Mock library metadata service for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::metadata::{EpisodeDetails, MediaLibrary, MetadataError, MovieDetails, SeasonDetails};

/// Mock implementation of the MediaLibrary trait backed by in-memory maps.
#[derive(Default)]
pub struct MockLibrary {
    movies: RwLock<HashMap<u32, MovieDetails>>,
    seasons: RwLock<HashMap<u32, SeasonDetails>>,
    episodes: RwLock<HashMap<u32, EpisodeDetails>>,
}

impl MockLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_movie(&self, movie: MovieDetails) {
        self.movies.write().await.insert(movie.id, movie);
    }

    pub async fn add_season(&self, season: SeasonDetails) {
        self.seasons.write().await.insert(season.id, season);
    }

    pub async fn add_episode(&self, episode: EpisodeDetails) {
        self.episodes.write().await.insert(episode.id, episode);
    }
}

#[async_trait]
impl MediaLibrary for MockLibrary {
    async fn movie(&self, movie_id: u32) -> Result<MovieDetails, MetadataError> {
        self.movies
            .read()
            .await
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| MetadataError::NotFound(format!("movie {movie_id}")))
    }

    async fn season(&self, season_id: u32) -> Result<SeasonDetails, MetadataError> {
        self.seasons
            .read()
            .await
            .get(&season_id)
            .cloned()
            .ok_or_else(|| MetadataError::NotFound(format!("season {season_id}")))
    }

    async fn episode(&self, episode_id: u32) -> Result<EpisodeDetails, MetadataError> {
        self.episodes
            .read()
            .await
            .get(&episode_id)
            .cloned()
            .ok_or_else(|| MetadataError::NotFound(format!("episode {episode_id}")))
    }
}
