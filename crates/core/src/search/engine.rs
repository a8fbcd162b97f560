//! Search orchestration: queries, fan-out, normalization and ranking per
//! use case.

use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use tracing::{debug, error, info, warn};

use crate::config::{Config, PreferencesConfig, SearchTimingConfig};
use crate::metadata::MediaLibrary;
use crate::metrics;

use super::fanout::{self, FanoutUnit};
use super::{normalize, query, rank};
use super::{
    Candidate, ContentKind, RawCandidate, SearchBackend, SearchError, SearchMode, SearchOptions,
};

/// The multi-indexer search engine.
///
/// Composes the metadata service, the search backend, query generation,
/// the deadline-bounded fan-out and the ranking policy. All state is
/// request-scoped; the engine itself only holds its collaborators and the
/// loaded preferences.
pub struct SearchEngine {
    backend: Arc<dyn SearchBackend>,
    library: Arc<dyn MediaLibrary>,
    preferences: PreferencesConfig,
    timing: SearchTimingConfig,
}

impl SearchEngine {
    /// Create a new engine over the given collaborators.
    pub fn new(
        backend: Arc<dyn SearchBackend>,
        library: Arc<dyn MediaLibrary>,
        config: &Config,
    ) -> Self {
        Self {
            backend,
            library,
            preferences: config.preferences.clone(),
            timing: config.search.clone(),
        }
    }

    /// Search releases for a movie.
    pub async fn search_movie(
        &self,
        movie_id: u32,
        mode: SearchMode,
    ) -> Result<Vec<Candidate>, SearchError> {
        let movie = self.library.movie(movie_id).await?;
        let queries = query::movie_queries(&movie.title, &movie.original_title, movie.year);
        let options = SearchOptions {
            kind: ContentKind::Movie,
            mode,
            season_pack: false,
            max_size_bytes: self.preferences.max_movie_size_bytes(),
        };
        self.search(&queries, &options).await
    }

    /// Search season-pack releases for a whole season.
    pub async fn search_season(
        &self,
        season_id: u32,
        mode: SearchMode,
    ) -> Result<Vec<Candidate>, SearchError> {
        let season = self.library.season(season_id).await?;
        let queries = query::season_queries(
            &season.titles.localized,
            &season.titles.english,
            &season.titles.original,
            season.number,
        );
        let options = SearchOptions {
            kind: ContentKind::Tv,
            mode,
            season_pack: true,
            max_size_bytes: self.preferences.max_episode_size_bytes()
                * u64::from(season.episode_count),
        };
        self.search(&queries, &options).await
    }

    /// Search releases for a single episode.
    pub async fn search_episode(
        &self,
        episode_id: u32,
        mode: SearchMode,
    ) -> Result<Vec<Candidate>, SearchError> {
        let episode = self.library.episode(episode_id).await?;
        let queries = query::episode_queries(
            &episode.titles.localized,
            &episode.titles.english,
            &episode.titles.original,
            episode.season,
            episode.number,
        );
        let options = SearchOptions {
            kind: ContentKind::Tv,
            mode,
            season_pack: false,
            max_size_bytes: self.preferences.max_episode_size_bytes(),
        };
        self.search(&queries, &options).await
    }

    /// Run the given queries against every configured indexer and return the
    /// ranked outcome: the single best candidate for automated searches, the
    /// full ranked list for manual ones.
    ///
    /// A batch where every indexer failed resolves to an empty list rather
    /// than an error, so calling pipelines can reschedule instead of
    /// aborting; failures listing indexers or looking up metadata still
    /// propagate.
    pub async fn search(
        &self,
        queries: &[String],
        options: &SearchOptions,
    ) -> Result<Vec<Candidate>, SearchError> {
        let started = Instant::now();
        let mode = mode_label(options.mode);

        let queries = query::dedup_queries(queries.to_vec());
        let indexers = self.backend.indexers().await?;
        if indexers.is_empty() {
            warn!("No indexers configured");
            metrics::SEARCHES_TOTAL.with_label_values(&[mode, "empty"]).inc();
            return Ok(Vec::new());
        }

        debug!(
            indexers = indexers.len(),
            queries = queries.len(),
            "Starting search fan-out"
        );

        let mut units: Vec<FanoutUnit<Vec<RawCandidate>>> =
            Vec::with_capacity(indexers.len() * queries.len());
        for indexer in &indexers {
            for q in &queries {
                let backend = Arc::clone(&self.backend);
                let indexer = indexer.clone();
                let q = q.clone();
                let kind = options.kind;
                units.push((
                    indexer.title.clone(),
                    async move { backend.search(&indexer, &q, kind).await }.boxed(),
                ));
            }
        }

        let deadline = self.timing.deadline_for(options.mode);
        let outcome = match fanout::join_within_deadline(units, deadline).await {
            Ok(outcome) => outcome,
            Err(SearchError::AllIndexersFailed(errors)) => {
                error!(failed = errors.len(), errors = ?errors, "Every indexer search failed");
                metrics::SEARCHES_TOTAL.with_label_values(&[mode, "failed"]).inc();
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        if !outcome.failures.is_empty() {
            warn!(
                failed = outcome.failures.len(),
                "Some indexer searches failed, continuing with partial results"
            );
            metrics::INDEXER_FAILURES.inc_by(outcome.failures.len() as u64);
        }
        if outcome.unresolved > 0 {
            debug!(
                unresolved = outcome.unresolved,
                "Deadline expired before all searches resolved"
            );
        }

        let raw: Vec<RawCandidate> = outcome.results.into_iter().flatten().collect();
        let candidates = normalize::normalize_candidates(
            raw,
            self.preferences.quality_rules(options.kind),
            self.preferences.tag_rules(),
        );
        let mut ranked = rank::filter_and_rank(candidates, options);
        if options.mode == SearchMode::Automatic {
            ranked.truncate(1);
        }

        let duration = started.elapsed();
        metrics::SEARCH_DURATION
            .with_label_values(&[mode])
            .observe(duration.as_secs_f64());
        metrics::CANDIDATES_RANKED
            .with_label_values(&[])
            .observe(ranked.len() as f64);
        metrics::SEARCHES_TOTAL
            .with_label_values(&[mode, if ranked.is_empty() { "empty" } else { "ok" }])
            .inc();

        info!(
            results = ranked.len(),
            duration_ms = duration.as_millis() as u64,
            "Search complete"
        );
        Ok(ranked)
    }
}

fn mode_label(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::Automatic => "automatic",
        SearchMode::Manual => "manual",
    }
}
