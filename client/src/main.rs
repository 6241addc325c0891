#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, ValueEnum};
use politician_search::{
    config::Config,
    page::{ResultsView, SearchPage},
    search::{HttpSearchClient, PoliticianSearchClient},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

/// Search politicians by name.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Name to search for. Without one, queries are read from stdin, one per line.
    query: Vec<String>,

    /// Output format for the results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// YAML configuration file.
    #[arg(long, default_value = "config.yaml")]
    config: String,

    /// Override the configured API base URL.
    #[arg(long)]
    base_url: Option<String>,
}

fn print_results(view: &ResultsView, format: OutputFormat) {
    let out = match format {
        OutputFormat::Text => view.to_text(),
        OutputFormat::Html => view.to_html(),
    };
    if !out.is_empty() {
        println!("{out}");
    }
}

async fn submit(
    page: &mut SearchPage,
    client: &dyn PoliticianSearchClient,
    format: OutputFormat,
) {
    page.search_with(client, |_| eprintln!("Searching...")).await;
    print_results(&page.results(), format);
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Load and validate configuration first (fail-fast)
    let mut config = Config::load_from(&cli.config).map_err(|e| anyhow::anyhow!("{e}"))?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate().map_err(|e| anyhow::anyhow!("{e}"))?;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.level)?)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "politician-search starting up"
    );

    let client = HttpSearchClient::new(config.api.base_url);
    let mut page = SearchPage::new();

    if !cli.query.is_empty() {
        page.set_input(cli.query.join(" "));
        submit(&mut page, &client, cli.format).await;
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        page.set_input(line);
        submit(&mut page, &client, cli.format).await;
    }

    Ok(())
}
