//! Prometheus metrics for the search engine.
//!
//! This module provides metrics for:
//! - Search batches (count, duration, results)
//! - Individual indexer failures

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

/// Search batches executed, by mode and result.
pub static SEARCHES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("harpoon_searches_total", "Total search batches executed"),
        &["mode", "result"], // result: "ok", "empty", "failed"
    )
    .unwrap()
});

/// Wall-clock duration of a search batch in seconds.
pub static SEARCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "harpoon_search_duration_seconds",
            "Duration of a search batch",
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0]),
        &["mode"],
    )
    .unwrap()
});

/// Candidates returned per search batch, after ranking and selection.
pub static CANDIDATES_RANKED: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "harpoon_candidates_ranked",
            "Candidates returned per search batch",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]),
        &[],
    )
    .unwrap()
});

/// Individual (indexer, query) searches that failed.
pub static INDEXER_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "harpoon_indexer_failures_total",
        "Individual indexer searches that failed",
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(SEARCHES_TOTAL.clone()),
        Box::new(SEARCH_DURATION.clone()),
        Box::new(CANDIDATES_RANKED.clone()),
        Box::new(INDEXER_FAILURES.clone()),
    ]
}
