// Test doubles for the fetch pipeline.
//
// MockFetcher (ItemFetcher) — HashMap-based id→Item, with injectable
// failures and panics, an optional per-call delay, and counters for calls
// and in-flight fetches so tests can assert on the worker-slot bound.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use hn_client::{HnError, Item};

use crate::traits::ItemFetcher;

/// Returns `Err(NotFound)` for unregistered ids.
/// Builder pattern: `.on_item()`, `.on_comment()`, `.on_thread()`, `.failing()`.
#[derive(Default)]
pub struct MockFetcher {
    items: HashMap<u64, Item>,
    failing: HashSet<u64>,
    panicking: HashSet<u64>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_item(mut self, item: Item) -> Self {
        self.items.insert(item.id, item);
        self
    }

    pub fn on_comment(self, id: u64, text: &str, time: i64) -> Self {
        self.on_item(Item {
            id,
            text: Some(text.to_string()),
            time,
            ..Default::default()
        })
    }

    pub fn on_thread(self, id: u64, title: &str, kids: &[u64]) -> Self {
        self.on_item(Item {
            id,
            title: Some(title.to_string()),
            kids: kids.to_vec(),
            ..Default::default()
        })
    }

    /// Every fetch of `id` fails with a network error.
    pub fn failing(mut self, id: u64) -> Self {
        self.failing.insert(id);
        self
    }

    /// Every fetch of `id` panics mid-flight.
    pub fn panicking(mut self, id: u64) -> Self {
        self.panicking.insert(id);
        self
    }

    /// Hold each fetch open this long, so concurrent calls overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of fetches observed in flight at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ItemFetcher for MockFetcher {
    async fn item(&self, id: u64) -> hn_client::Result<Item> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.panicking.contains(&id) {
            panic!("MockFetcher: injected panic for item {id}");
        }
        if self.failing.contains(&id) {
            return Err(HnError::Network(format!(
                "MockFetcher: injected failure for item {id}"
            )));
        }

        self.items.get(&id).cloned().ok_or(HnError::NotFound(id))
    }
}
