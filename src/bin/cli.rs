//! jobcrawler CLI
//!
//! Interactive entry point: asks for a job title and location, pages through
//! search results in a headless browser and offers to export what it found.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobcrawler::{
    error::Result,
    models::{Config, SearchQuery},
    pipeline,
    services::ChromeRenderer,
    storage::LocalStorage,
    utils::{
        http,
        prompt::{Operator, TerminalOperator},
    },
};

/// jobcrawler - Job Search Crawler
#[derive(Parser, Debug)]
#[command(
    name = "jobcrawler",
    version,
    about = "Collects job listings and their descriptions from search results"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "jobcrawler.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search, collect listings page by page, then export
    Search {
        /// Job title to search for (prompted when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Job location (prompted when omitted)
        #[arg(short, long)]
        location: Option<String>,

        /// Directory for the CSV and text exports
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(cli.verbose, &level);

    let mut config = loaded.unwrap_or_else(|e| {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
        Config::default()
    });

    match cli.command {
        Command::Search {
            title,
            location,
            output_dir,
        } => {
            if let Some(dir) = output_dir {
                config.output.dir = dir;
            }
            config.validate()?;

            let mut operator = TerminalOperator::new();
            let title = match title {
                Some(title) => title,
                None => operator.ask("Enter Job Title")?,
            };
            let location = match location {
                Some(location) => location,
                None => operator.ask("Enter Job Location")?,
            };
            let query = SearchQuery::new(title, location);

            let client = http::create_async_client(&config.crawler)?;
            let renderer = ChromeRenderer::launch(&config.browser).await?;

            let outcome =
                pipeline::run_search(&config, &query, renderer, &client, &mut operator).await?;

            let storage =
                LocalStorage::new(&config.output.dir).with_rule_width(config.output.rule_width);
            pipeline::run_export(&config, &query, &outcome.results, &mut operator, &storage)
                .await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
