// Trait seam for item retrieval.
//
// The aggregator and pipeline only see `ItemFetcher`, so tests swap in
// `testing::MockFetcher`: no network, deterministic failures, and
// instrumentation of in-flight calls.

use async_trait::async_trait;
use hn_client::{HnClient, Item};

#[async_trait]
pub trait ItemFetcher: Send + Sync {
    /// Fetch one item by id. One outbound call per invocation, no retries.
    async fn item(&self, id: u64) -> hn_client::Result<Item>;
}

#[async_trait]
impl ItemFetcher for HnClient {
    async fn item(&self, id: u64) -> hn_client::Result<Item> {
        HnClient::item(self, id).await
    }
}
