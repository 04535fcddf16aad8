pub mod aggregator;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod templates;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod thread;
pub mod traits;
pub mod types;

pub use aggregator::{Aggregator, BatchOutcome, FetchFailure, DEFAULT_WORKER_SLOTS};
pub use config::Config;
pub use error::{Result, WhoIsHiringError};
pub use pipeline::{run, RunStats};
pub use report::KeywordFilter;
pub use thread::ThreadName;
pub use traits::ItemFetcher;
pub use types::{JobPosting, Markup, ReportEntry};
