use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, WhoIsHiringError};

static RE_MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Za-z]+ \d+)\)").expect("month/year pattern is valid"));

const LABEL_PREFIX: &str = "whoishiring";
const RIGHT_NOW: &str = "right now";

/// Identity of a hiring thread derived from its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadName {
    /// File-safe name for the report, e.g. `whoishiring_march_2024`.
    pub label: String,
    /// Context tag stamped on every posting, e.g. `march 2024`.
    pub month_year: String,
}

impl ThreadName {
    /// Parse "Ask HN: Who is hiring? (March 2024)" style titles. The
    /// "Who wants to be hired right now" variants map to a fixed name.
    pub fn parse(title: &str) -> Result<Self> {
        if title.contains(RIGHT_NOW) {
            return Ok(Self::from_tag(RIGHT_NOW));
        }

        let caps = RE_MONTH_YEAR
            .captures(title)
            .ok_or_else(|| WhoIsHiringError::ThreadTitle(title.to_string()))?;
        Ok(Self::from_tag(&caps[1].to_lowercase()))
    }

    fn from_tag(month_year: &str) -> Self {
        Self {
            label: format!("{LABEL_PREFIX}_{}", month_year.replace(' ', "_")),
            month_year: month_year.to_string(),
        }
    }
}
