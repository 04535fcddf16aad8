use std::cmp::Reverse;

use crate::types::{JobPosting, ReportEntry};

pub const DEFAULT_KEYWORD: &str = "remote";

/// Case-insensitive substring match over heading and body. A posting passes
/// when any keyword matches; an empty filter passes everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, posting: &JobPosting) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        let haystack = format!("{} {}", posting.heading, posting.body).to_lowercase();
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new([DEFAULT_KEYWORD])
    }
}

/// Newest first; ties broken by id so the order is total.
pub fn sort_newest_first(postings: &mut [JobPosting]) {
    postings.sort_by_key(|p| Reverse((p.posted_at, p.id)));
}

/// Pick the postings for `month_year` that pass `filter`.
///
/// `number` is the 1-based position in `postings`, not in the selection, so
/// numbering follows whatever order the caller sorted into and skipped
/// postings leave gaps.
pub fn select(postings: &[JobPosting], month_year: &str, filter: &KeywordFilter) -> Vec<ReportEntry> {
    postings
        .iter()
        .enumerate()
        .filter(|(_, p)| p.month_year == month_year && filter.matches(p))
        .map(|(i, p)| ReportEntry {
            number: i + 1,
            id: p.id,
            heading: p.heading.clone(),
            body: p.body.clone(),
            day: p.day.clone(),
            time: p.time.clone(),
        })
        .collect()
}
