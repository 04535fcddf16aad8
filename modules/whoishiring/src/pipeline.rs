use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::{Result, WhoIsHiringError};
use crate::report::{select, sort_newest_first, KeywordFilter};
use crate::templates::{render_report, write_report};
use crate::thread::ThreadName;
use crate::traits::ItemFetcher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub thread_id: u64,
    pub label: String,
    pub month_year: String,
    pub comments: usize,
    pub collected: usize,
    pub empty: usize,
    pub failed: usize,
    pub aborted: usize,
    pub selected: usize,
    pub report: PathBuf,
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Thread {} ({}) ===", self.thread_id, self.month_year)?;
        writeln!(f, "Top-level comments: {}", self.comments)?;
        writeln!(f, "Postings collected: {}", self.collected)?;
        writeln!(f, "Empty comments:     {}", self.empty)?;
        writeln!(f, "Fetch failures:     {}", self.failed)?;
        if self.aborted > 0 {
            writeln!(f, "Aborted workers:    {}", self.aborted)?;
        }
        writeln!(f, "Written to html:    {} job postings", self.selected)?;
        write!(f, "Report:             {}", self.report.display())
    }
}

/// Resolve the thread, collect its top-level comments and write the report.
///
/// Fails only on the root item, its title, or the report file. Individual
/// comment failures are logged and counted in the returned stats.
pub async fn run<F>(config: &Config, thread_id: u64, fetcher: Arc<F>) -> Result<RunStats>
where
    F: ItemFetcher + ?Sized + 'static,
{
    let root = fetcher
        .item(thread_id)
        .await
        .map_err(|source| WhoIsHiringError::Retrieval { id: thread_id, source })?;

    let title = root.title.as_deref().unwrap_or_default();
    let thread = ThreadName::parse(title)?;

    info!(
        thread_id,
        label = thread.label.as_str(),
        month_year = thread.month_year.as_str(),
        comments = root.kids.len(),
        "Resolved thread"
    );

    let aggregator = Aggregator::with_capacity(fetcher, config.worker_slots);
    let mut outcome = aggregator.collect(&root.kids, &thread.month_year).await;

    sort_newest_first(&mut outcome.postings);
    let filter = KeywordFilter::new(&config.keywords);
    let entries = select(&outcome.postings, &thread.month_year, &filter);

    let html = render_report(&thread.label, &entries);
    let report = write_report(&config.output_dir, &thread.label, &html)?;

    Ok(RunStats {
        thread_id,
        label: thread.label,
        month_year: thread.month_year,
        comments: root.kids.len(),
        collected: outcome.postings.len(),
        empty: outcome.empty,
        failed: outcome.failures.len(),
        aborted: outcome.aborted,
        selected: entries.len(),
        report,
    })
}
