use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, WhoIsHiringError};
use crate::types::ReportEntry;

pub const REPORT_EXTENSION: &str = "html";

/// Render the report page. Headings and bodies are [`crate::Markup`] and go
/// in verbatim; the title and timestamps are escaped.
pub fn render_report(title: &str, entries: &[ReportEntry]) -> String {
    let mut jobs = String::new();

    for entry in entries {
        jobs.push_str(&format!(
            r#"<div class="job_entry">
    <div class="job_head"><em>#{number}</em> {heading}, posted: {day} at {time}</div>
    {body}
</div>
"#,
            number = entry.number,
            heading = entry.heading,
            day = html_escape(&entry.day),
            time = html_escape(&entry.time),
            body = entry.body,
        ));
    }

    build_page(title, &jobs)
}

/// Write `html` to `{dir}/{label}.html`, replacing any previous report.
pub fn write_report(dir: &Path, label: &str, html: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{label}.{REPORT_EXTENSION}"));
    std::fs::write(&path, html).map_err(|source| WhoIsHiringError::Render {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = html.len(), "Report written");
    Ok(path)
}

// --- Helpers ---

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
.job_entry{{margin-bottom:20px;padding:10px;border:1px solid #ccc;}}
.job_head{{font-weight:bold;margin-bottom:10px;}}
</style>
</head>
<body>
{content}</body>
</html>
"#,
        title = html_escape(title),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
