use std::path::PathBuf;

use crate::aggregator::DEFAULT_WORKER_SLOTS;
use crate::error::{Result, WhoIsHiringError};
use crate::report::DEFAULT_KEYWORD;

/// Run settings loaded from environment variables (and `.env`).
/// Command-line flags override these in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Item API root, e.g. `https://hacker-news.firebaseio.com/v0`.
    pub api_url: String,
    pub worker_slots: usize,
    pub output_dir: PathBuf,
    pub keywords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: hn_client::DEFAULT_BASE_URL.to_string(),
            worker_slots: DEFAULT_WORKER_SLOTS,
            output_dir: PathBuf::from("."),
            keywords: vec![DEFAULT_KEYWORD.to_string()],
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let worker_slots = match get("WHOISHIRING_CONCURRENCY") {
            Some(raw) => parse_worker_slots(&raw)?,
            None => defaults.worker_slots,
        };

        Ok(Self {
            api_url: get("HN_API_URL").unwrap_or(defaults.api_url),
            worker_slots,
            output_dir: get("WHOISHIRING_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            keywords: get("WHOISHIRING_KEYWORDS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.keywords),
        })
    }

    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  HN_API_URL: {}", self.api_url);
        tracing::info!("  WHOISHIRING_CONCURRENCY: {}", self.worker_slots);
        tracing::info!("  WHOISHIRING_OUTPUT_DIR: {}", self.output_dir.display());
        tracing::info!("  WHOISHIRING_KEYWORDS: {}", self.keywords.join(","));
    }
}

fn parse_worker_slots(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(WhoIsHiringError::Config(format!(
            "WHOISHIRING_CONCURRENCY must be a positive integer, got {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.worker_slots, 20);
        assert_eq!(config.keywords, vec!["remote"]);
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_lookup(lookup(&[
            ("HN_API_URL", "http://localhost:8080/v0"),
            ("WHOISHIRING_CONCURRENCY", "5"),
            ("WHOISHIRING_OUTPUT_DIR", "/tmp/reports"),
            ("WHOISHIRING_KEYWORDS", "remote, rust ,,hybrid"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:8080/v0");
        assert_eq!(config.worker_slots, 5);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.keywords, vec!["remote", "rust", "hybrid"]);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("HN_API_URL", "  "), ("WHOISHIRING_KEYWORDS", "")])).unwrap();
        assert_eq!(config.api_url, hn_client::DEFAULT_BASE_URL);
        assert_eq!(config.keywords, vec!["remote"]);
    }

    #[test]
    fn zero_or_garbage_concurrency_is_rejected() {
        for raw in ["0", "-3", "lots"] {
            let err = Config::from_lookup(lookup(&[("WHOISHIRING_CONCURRENCY", raw)])).unwrap_err();
            assert!(matches!(err, WhoIsHiringError::Config(_)), "{raw} should be rejected");
        }
    }
}
