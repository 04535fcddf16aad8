use std::fmt;

use chrono::{DateTime, Utc};

// --- Markup ---

/// An HTML fragment taken verbatim from the item API.
///
/// Hacker News serves comment text as already-escaped HTML, so the renderer
/// inserts a `Markup` as-is and only escapes plain `String`s. Keep the two
/// apart: wrapping untrusted text here skips escaping entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    pub fn trusted(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Postings ---

/// A top-level reply to a hiring thread, split into heading and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub id: u64,
    /// Text before the first paragraph break, usually "Company | Role | Location".
    pub heading: Markup,
    pub body: Markup,
    pub posted_at: DateTime<Utc>,
    /// `posted_at` as `YYYY-MM-DD` (UTC).
    pub day: String,
    /// `posted_at` as `HH:MM:SS` (UTC).
    pub time: String,
    /// Thread context, e.g. "march 2024". Empty until the aggregator assigns it.
    pub month_year: String,
}

/// One numbered posting as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub number: usize,
    pub id: u64,
    pub heading: Markup,
    pub body: Markup,
    pub day: String,
    pub time: String,
}
