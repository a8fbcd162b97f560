//! Deadline-bounded concurrent fan-out over independent search units.
//!
//! One unit is one (indexer, query) pair. Units run concurrently and are
//! joined until either all resolve or the deadline elapses; whatever
//! succeeded by then is returned. A partial, timely result beats blocking
//! on a slow indexer.

use std::collections::HashMap;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::warn;

use super::SearchError;

/// A labeled unit of work; the label names the indexer for diagnostics.
pub type FanoutUnit<T> = (String, BoxFuture<'static, Result<T, SearchError>>);

/// What the fan-out produced by the deadline.
#[derive(Debug)]
pub struct FanoutOutcome<T> {
    /// Successful unit results, in completion order.
    pub results: Vec<T>,
    /// Failure message per indexer label (last failure wins per label).
    pub failures: HashMap<String, String>,
    /// Units still unresolved when the deadline expired.
    pub unresolved: usize,
}

/// Run all units concurrently and join them under `deadline`.
///
/// Individual failures are absorbed into `failures`; only when every unit
/// fails does the batch escalate to [`SearchError::AllIndexersFailed`]
/// carrying the per-indexer causes. Units that neither resolved nor failed
/// by the deadline are counted in `unresolved`.
pub async fn join_within_deadline<T>(
    units: Vec<FanoutUnit<T>>,
    deadline: Duration,
) -> Result<FanoutOutcome<T>, SearchError> {
    let total = units.len();
    let mut outcome = FanoutOutcome {
        results: Vec::new(),
        failures: HashMap::new(),
        unresolved: 0,
    };
    if total == 0 {
        return Ok(outcome);
    }

    let mut in_flight: FuturesUnordered<_> = units
        .into_iter()
        .map(|(label, task)| async move { (label, task.await) })
        .collect();

    let timer = tokio::time::sleep(deadline);
    tokio::pin!(timer);

    let mut failed = 0usize;
    loop {
        tokio::select! {
            completed = in_flight.next() => match completed {
                Some((_, Ok(value))) => outcome.results.push(value),
                Some((label, Err(e))) => {
                    warn!(indexer = %label, error = %e, "Indexer search failed");
                    failed += 1;
                    outcome.failures.insert(label, e.to_string());
                }
                None => break,
            },
            _ = &mut timer => break,
        }
    }

    // Dropping the set cancels whatever is still in flight; a result that
    // would have arrived after the deadline is never observed. The
    // alternative (detach and ignore) would keep connections open for no
    // caller.
    outcome.unresolved = in_flight.len();
    drop(in_flight);

    if failed == total {
        return Err(SearchError::AllIndexersFailed(outcome.failures));
    }
    Ok(outcome)
}
