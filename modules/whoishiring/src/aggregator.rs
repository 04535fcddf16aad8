use std::collections::HashSet;
use std::sync::Arc;

use hn_client::HnError;
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::normalizer::normalize;
use crate::traits::ItemFetcher;
use crate::types::JobPosting;

/// Max concurrent item fetches. The item API is the bottleneck; threads with
/// 500+ replies would otherwise open hundreds of connections at once.
pub const DEFAULT_WORKER_SLOTS: usize = 20;

/// A child whose retrieval failed. The batch carries on without it.
#[derive(Debug)]
pub struct FetchFailure {
    pub id: u64,
    pub error: HnError,
}

/// Result of one fan-out batch.
///
/// `postings` is in completion order, which is a race: sort before numbering.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub postings: Vec<JobPosting>,
    pub failures: Vec<FetchFailure>,
    /// Fetched fine but had no text (deleted or flagged comments).
    pub empty: usize,
    /// Worker tasks that panicked or never got a slot.
    pub aborted: usize,
}

impl BatchOutcome {
    /// Number of distinct ids the batch accounted for.
    pub fn requested(&self) -> usize {
        self.postings.len() + self.failures.len() + self.empty + self.aborted
    }
}

enum UnitOutcome {
    Collected,
    Empty,
    Failed(FetchFailure),
    NoSlot,
}

/// Fetches and normalizes a set of items concurrently, holding at most as
/// many fetches in flight as the slot pool has permits.
pub struct Aggregator<F: ?Sized> {
    fetcher: Arc<F>,
    slots: Arc<Semaphore>,
}

impl<F> Aggregator<F>
where
    F: ItemFetcher + ?Sized + 'static,
{
    /// Use an existing slot pool. Sharing one pool between aggregators
    /// bounds their combined concurrency.
    pub fn new(fetcher: Arc<F>, slots: Arc<Semaphore>) -> Self {
        Self { fetcher, slots }
    }

    pub fn with_capacity(fetcher: Arc<F>, worker_slots: usize) -> Self {
        Self::new(fetcher, Arc::new(Semaphore::new(worker_slots.max(1))))
    }

    /// Fetch every id, normalize what comes back and stamp it with
    /// `month_year`. Returns once every worker has finished; dropping the
    /// returned future aborts the workers still running.
    pub async fn collect(&self, ids: &[u64], month_year: &str) -> BatchOutcome {
        let postings = Arc::new(Mutex::new(Vec::with_capacity(ids.len())));
        let mut workers = JoinSet::new();
        let mut seen = HashSet::with_capacity(ids.len());

        for &id in ids {
            if !seen.insert(id) {
                debug!(id, "Duplicate id in batch, skipping");
                continue;
            }

            let fetcher = Arc::clone(&self.fetcher);
            let slots = Arc::clone(&self.slots);
            let postings = Arc::clone(&postings);
            let month_year = month_year.to_string();

            workers.spawn(async move {
                // Held until the end of this block, whatever the outcome.
                let Ok(_permit) = slots.acquire_owned().await else {
                    return UnitOutcome::NoSlot;
                };

                let item = match fetcher.item(id).await {
                    Ok(item) => item,
                    Err(error) => {
                        warn!(id, error = %error, "Failed to fetch comment");
                        return UnitOutcome::Failed(FetchFailure { id, error });
                    }
                };

                match normalize(&item) {
                    Some(mut posting) => {
                        posting.month_year = month_year;
                        postings.lock().await.push(posting);
                        UnitOutcome::Collected
                    }
                    None => {
                        debug!(id, "Comment has no text, skipping");
                        UnitOutcome::Empty
                    }
                }
            });
        }

        let mut outcome = BatchOutcome::default();
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(UnitOutcome::Collected) => {}
                Ok(UnitOutcome::Empty) => outcome.empty += 1,
                Ok(UnitOutcome::Failed(failure)) => outcome.failures.push(failure),
                Ok(UnitOutcome::NoSlot) => {
                    warn!("Worker slot pool closed, comment dropped");
                    outcome.aborted += 1;
                }
                Err(e) => {
                    warn!(error = %e, "Comment worker aborted");
                    outcome.aborted += 1;
                }
            }
        }

        outcome.postings = std::mem::take(&mut *postings.lock().await);

        info!(
            requested = outcome.requested(),
            collected = outcome.postings.len(),
            empty = outcome.empty,
            failed = outcome.failures.len(),
            aborted = outcome.aborted,
            "Comment batch complete"
        );

        outcome
    }
}
