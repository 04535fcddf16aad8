use chrono::{DateTime, Utc};
use hn_client::Item;

use crate::types::{JobPosting, Markup};

const PARAGRAPH: &str = "<p>";
const PARAGRAPH_CLOSE: &str = "</p>";
const LINE_BREAK: &str = "<br>";

/// Turn a fetched comment into a [`JobPosting`].
///
/// Returns `None` for comments without text (deleted, flagged). Never fails
/// on non-empty text, however malformed. `month_year` is left empty for the
/// caller to fill in.
pub fn normalize(item: &Item) -> Option<JobPosting> {
    let text = item.text();
    if text.is_empty() {
        return None;
    }

    let mut segments = text.split(PARAGRAPH);
    let heading = segments.next().unwrap_or_default();
    let body = segments
        .map(|s| s.replace(PARAGRAPH_CLOSE, ""))
        .collect::<Vec<_>>()
        .join(LINE_BREAK);

    // Out-of-range timestamps fall back to the epoch rather than dropping the comment.
    let posted_at = DateTime::<Utc>::from_timestamp(item.time, 0).unwrap_or_default();

    Some(JobPosting {
        id: item.id,
        heading: Markup::trusted(heading),
        body: Markup::trusted(body),
        posted_at,
        day: posted_at.format("%Y-%m-%d").to_string(),
        time: posted_at.format("%H:%M:%S").to_string(),
        month_year: String::new(),
    })
}
