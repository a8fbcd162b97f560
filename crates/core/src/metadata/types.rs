//! Types describing library entries under search.

use serde::{Deserialize, Serialize};

/// A movie as the library knows it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieDetails {
    pub id: u32,
    /// Localized display title.
    pub title: String,
    /// Title in the original language, possibly non-Latin.
    pub original_title: String,
    pub year: i32,
}

/// The title set of a show, used to build query variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowTitles {
    pub localized: String,
    pub english: String,
    /// Original-language title, possibly non-Latin.
    pub original: String,
}

/// A season of a show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonDetails {
    pub id: u32,
    pub titles: ShowTitles,
    pub number: u32,
    /// Episodes in the season; scales the acceptable season-pack size.
    pub episode_count: u32,
}

/// A single episode of a show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeDetails {
    pub id: u32,
    pub titles: ShowTitles,
    pub season: u32,
    pub number: u32,
}
