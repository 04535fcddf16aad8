use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use hn_client::HnClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

use whoishiring::Config;

#[derive(Parser)]
#[command(name = "whoishiring", about = "Collect job postings from a Hacker News \"Who is hiring?\" thread")]
struct Cli {
    /// Who is hiring thread number
    #[arg(short = 't', long = "thread")]
    thread: u64,

    /// Keyword a posting must contain (repeatable; overrides WHOISHIRING_KEYWORDS)
    #[arg(short, long = "keyword")]
    keywords: Vec<String>,

    /// Max concurrent item fetches (overrides WHOISHIRING_CONCURRENCY)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    concurrency: Option<u64>,

    /// Directory for the HTML report (overrides WHOISHIRING_OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Item API root (overrides HN_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("whoishiring=info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if !cli.keywords.is_empty() {
        config.keywords = cli.keywords;
    }
    if let Some(slots) = cli.concurrency {
        config.worker_slots = slots as usize;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    config.log_summary();

    let client = Arc::new(HnClient::new(&config.api_url));
    let stats = whoishiring::run(&config, cli.thread, client).await?;
    info!("Run complete. {stats}");

    Ok(())
}
