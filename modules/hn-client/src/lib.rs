pub mod error;
pub mod types;

pub use error::{HnError, Result};
pub use types::Item;

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

#[derive(Clone)]
pub struct HnClient {
    client: reqwest::Client,
    base_url: String,
}

impl HnClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single item. The API answers `null` for ids it doesn't know,
    /// which surfaces as [`HnError::NotFound`].
    pub async fn item(&self, id: u64) -> Result<Item> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(HnError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        let item: Option<Item> = serde_json::from_str(&body)?;
        tracing::debug!(id, bytes = body.len(), "Fetched item");
        item.ok_or(HnError::NotFound(id))
    }
}

impl Default for HnClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
