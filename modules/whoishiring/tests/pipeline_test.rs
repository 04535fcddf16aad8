//! Pipeline tests: MockFetcher → run() → report file in a temp dir.
//!
//! No network. Each test builds a thread root plus comments, runs the whole
//! pipeline and inspects the stats and the written HTML.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use whoishiring::testing::MockFetcher;
use whoishiring::{run, Config, WhoIsHiringError};

const THREAD: u64 = 39562986;
const TITLE: &str = "Ask HN: Who is hiring? (March 2024)";

fn config(dir: &Path) -> Config {
    Config {
        output_dir: dir.to_path_buf(),
        worker_slots: 4,
        ..Config::default()
    }
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn writes_report_named_after_thread() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = MockFetcher::new()
        .on_thread(THREAD, TITLE, &[1, 2, 3])
        .on_comment(1, "Acme Corp | Remote<p>Backend role", 1709312400)
        .on_comment(2, "Initech | Onsite<p>Printers", 1709316000)
        .on_comment(3, "", 1709319600);

    let stats = run(&config(dir.path()), THREAD, Arc::new(fetcher)).await.unwrap();

    assert_eq!(stats.label, "whoishiring_march_2024");
    assert_eq!(stats.month_year, "march 2024");
    assert_eq!(stats.comments, 3);
    assert_eq!(stats.collected, 2);
    assert_eq!(stats.empty, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.selected, 1);
    assert_eq!(stats.report, dir.path().join("whoishiring_march_2024.html"));

    let html = std::fs::read_to_string(&stats.report).unwrap();
    assert!(html.contains("<title>whoishiring_march_2024</title>"));
    assert!(html.contains("Acme Corp | Remote"));
    assert!(!html.contains("Initech"));
}

#[tokio::test]
async fn numbers_follow_newest_first_order() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = MockFetcher::new()
        .on_thread(THREAD, TITLE, &[10, 11, 12])
        .on_comment(10, "Oldest<p>remote", 1000)
        .on_comment(11, "Newest<p>remote", 3000)
        .on_comment(12, "Middle<p>onsite", 2000)
        .with_delay(Duration::from_millis(1));

    let stats = run(&config(dir.path()), THREAD, Arc::new(fetcher)).await.unwrap();
    let html = std::fs::read_to_string(&stats.report).unwrap();

    // Middle is filtered out but still holds number 2.
    assert!(html.contains("<em>#1</em> Newest"));
    assert!(html.contains("<em>#3</em> Oldest"));
    assert!(!html.contains("#2"));
    assert!(html.find("Newest").unwrap() < html.find("Oldest").unwrap());
}

#[tokio::test]
async fn configured_keywords_replace_default() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = MockFetcher::new()
        .on_thread(THREAD, TITLE, &[1, 2])
        .on_comment(1, "Ferrous Systems<p>Rust, hybrid", 100)
        .on_comment(2, "Acme<p>Remote, Java", 200);
    let config = Config {
        keywords: vec!["rust".to_string()],
        ..config(dir.path())
    };

    let stats = run(&config, THREAD, Arc::new(fetcher)).await.unwrap();
    let html = std::fs::read_to_string(&stats.report).unwrap();

    assert_eq!(stats.selected, 1);
    assert!(html.contains("Ferrous Systems"));
    assert!(!html.contains("Acme"));
}

#[tokio::test]
async fn right_now_thread_uses_fixed_label() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = MockFetcher::new()
        .on_thread(THREAD, "Ask HN: Who wants to be hired right now?", &[1])
        .on_comment(1, "Location: Remote<p>Rust dev", 100);

    let stats = run(&config(dir.path()), THREAD, Arc::new(fetcher)).await.unwrap();

    assert_eq!(stats.label, "whoishiring_right_now");
    assert_eq!(stats.selected, 1);
    assert!(dir.path().join("whoishiring_right_now.html").exists());
}

#[tokio::test]
async fn thread_without_comments_still_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = MockFetcher::new().on_thread(THREAD, TITLE, &[]);

    let stats = run(&config(dir.path()), THREAD, Arc::new(fetcher)).await.unwrap();

    assert_eq!(stats.collected, 0);
    assert_eq!(stats.selected, 0);
    assert!(stats.report.exists());
}

#[tokio::test]
async fn rerun_overwrites_previous_report() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("whoishiring_march_2024.html"), "stale").unwrap();
    let fetcher = MockFetcher::new()
        .on_thread(THREAD, TITLE, &[1])
        .on_comment(1, "Acme<p>remote", 100);

    let stats = run(&config(dir.path()), THREAD, Arc::new(fetcher)).await.unwrap();

    let html = std::fs::read_to_string(&stats.report).unwrap();
    assert!(!html.contains("stale"));
    assert!(html.contains("Acme"));
}

// ---------------------------------------------------------------------------
// Partial failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failing_comments_are_counted_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let kids: Vec<u64> = (1..=25).collect();
    let mut fetcher = MockFetcher::new().on_thread(THREAD, TITLE, &kids);
    for id in 1..=25 {
        fetcher = fetcher.on_comment(id, &format!("Company {id}<p>remote"), 1709312400 + id as i64);
    }
    // 5 and 9 fail outright.
    let fetcher = fetcher.failing(5).failing(9);

    let stats = run(&config(dir.path()), THREAD, Arc::new(fetcher)).await.unwrap();

    assert_eq!(stats.comments, 25);
    assert_eq!(stats.collected, 23);
    assert_eq!(stats.failed, 2);
    assert_eq!(stats.selected, 23);
}

// ---------------------------------------------------------------------------
// Fatal errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&config(dir.path()), THREAD, Arc::new(MockFetcher::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, WhoIsHiringError::Retrieval { id: THREAD, .. }));
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn unparsable_title_stops_before_fetching_comments() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = Arc::new(
        MockFetcher::new()
            .on_thread(THREAD, "Show HN: A thing I built", &[1, 2])
            .on_comment(1, "x", 0)
            .on_comment(2, "y", 0),
    );

    let err = run(&config(dir.path()), THREAD, Arc::clone(&fetcher))
        .await
        .unwrap_err();

    assert!(matches!(err, WhoIsHiringError::ThreadTitle(_)));
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn unwritable_output_dir_is_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let fetcher = MockFetcher::new()
        .on_thread(THREAD, TITLE, &[1])
        .on_comment(1, "Acme<p>remote", 100);

    let err = run(&config(&missing), THREAD, Arc::new(fetcher)).await.unwrap_err();

    assert!(matches!(err, WhoIsHiringError::Render { .. }));
}
