//! Acceptance filtering and deterministic ranking of candidates.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::{Candidate, SearchOptions};

/// A token marking a single-episode release: e5, e05, ep05, "episode".
static EPISODE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:e\d+|ep\d+|episode)$").unwrap());

/// Double episode numbers (e01e10, "e01 e10") mark a span, i.e. a season
/// pack whose title merely looks episode-like.
static DOUBLE_EPISODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"e\d+\s*e\d+").unwrap());

/// Apply the acceptance filter (unless the request bypasses it) and produce
/// the deterministic total order: indexer priority first, then tag score,
/// quality score and seeders, all descending in preference.
///
/// The sort is stable, so candidates equal on the whole key keep their
/// arrival order. Selection (top-1 for automated searches) is the engine's
/// job; this always returns the full ranked list.
pub fn filter_and_rank(candidates: Vec<Candidate>, options: &SearchOptions) -> Vec<Candidate> {
    let mut kept: Vec<Candidate> = if options.mode.bypasses_filter() {
        candidates
    } else {
        candidates
            .into_iter()
            .filter(|c| is_acceptable(c, options))
            .collect()
    };

    kept.sort_by(|a, b| {
        a.indexer
            .priority
            .cmp(&b.indexer.priority)
            .then_with(|| b.tag.score.cmp(&a.tag.score))
            .then_with(|| b.quality.score.cmp(&a.quality.score))
            .then_with(|| b.seeders.cmp(&a.seeders))
    });
    kept
}

fn is_acceptable(candidate: &Candidate, options: &SearchOptions) -> bool {
    if candidate.size_bytes >= options.max_size_bytes {
        return false;
    }
    // Healthy swarms only: unknown (-1) or leecher-heavy counts are out.
    if candidate.seeders < 0 || candidate.seeders <= candidate.peers {
        return false;
    }
    if options.season_pack {
        if looks_like_single_episode(candidate) {
            return false;
        }
    } else if candidate.tag.score <= 0 {
        return false;
    }
    true
}

/// Season requests must not pick up single-episode releases. A token like
/// `e05` rejects the candidate unless the title carries a double episode
/// number, which marks a span-style season pack.
fn looks_like_single_episode(candidate: &Candidate) -> bool {
    let marked = candidate.tokens.iter().any(|t| EPISODE_TOKEN.is_match(t));
    marked && !DOUBLE_EPISODE.is_match(&candidate.normalized_title)
}
