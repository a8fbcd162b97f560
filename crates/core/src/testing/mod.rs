//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides mock implementations of the external collaborator
//! traits, allowing full search-pipeline tests without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use harpoon_core::testing::{fixtures, MockBackend, MockLibrary};
//!
//! let backend = MockBackend::with_indexers(&["rutor", "zamunda"]);
//! let library = MockLibrary::new();
//! library.add_movie(fixtures::movie(1, "The Matrix", "The Matrix", 1999)).await;
//!
//! // Configure per-indexer results
//! let indexer = backend.indexers().await?.remove(0);
//! backend.set_results("rutor", vec![
//!     fixtures::raw_candidate("g1", "The.Matrix.1999.1080p", &indexer),
//! ]).await;
//! ```

mod mock_backend;
mod mock_library;

pub use mock_backend::{MockBackend, RecordedQuery};
pub use mock_library::MockLibrary;

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::metadata::{EpisodeDetails, MovieDetails, SeasonDetails, ShowTitles};
    use crate::search::{Indexer, RawCandidate};

    /// Create a test indexer.
    pub fn indexer(id: &str, priority: usize) -> Indexer {
        Indexer {
            id: id.to_string(),
            title: id.to_string(),
            priority,
        }
    }

    /// Create a raw hit with reasonable defaults: 2 GB, healthy swarm,
    /// direct link.
    pub fn raw_candidate(guid: &str, title: &str, indexer: &Indexer) -> RawCandidate {
        RawCandidate {
            guid: guid.to_string(),
            title: title.to_string(),
            indexer: indexer.clone(),
            size_bytes: 2 * 1024 * 1024 * 1024,
            seeders: 50,
            peers: 10,
            link: Some(format!("http://example.org/dl/{guid}")),
            magnet_uri: None,
            publish_date: Some(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()),
        }
    }

    /// Create a test movie.
    pub fn movie(id: u32, title: &str, original_title: &str, year: i32) -> MovieDetails {
        MovieDetails {
            id,
            title: title.to_string(),
            original_title: original_title.to_string(),
            year,
        }
    }

    /// Create a show title set where all three titles agree.
    pub fn show_titles(title: &str) -> ShowTitles {
        ShowTitles {
            localized: title.to_string(),
            english: title.to_string(),
            original: title.to_string(),
        }
    }

    /// Create a test season.
    pub fn season(id: u32, titles: ShowTitles, number: u32, episode_count: u32) -> SeasonDetails {
        SeasonDetails {
            id,
            titles,
            number,
            episode_count,
        }
    }

    /// Create a test episode.
    pub fn episode(id: u32, titles: ShowTitles, season: u32, number: u32) -> EpisodeDetails {
        EpisodeDetails {
            id,
            titles,
            season,
            number,
        }
    }
}
