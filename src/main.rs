//! Moisson main entry point
//!
//! Command-line interface for the catalog snapshot scraper.

use clap::Parser;
use moisson::config::load_config;
use moisson::run_snapshot;
use moisson::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Moisson: dated catalog snapshots of a used-equipment listing site
///
/// Walks the paginated listing, extracts a fixed field set from every
/// product page, and writes the result as a dated CSV file.
#[derive(Parser, Debug)]
#[command(name = "moisson")]
#[command(version = "1.0.0")]
#[command(about = "Dated catalog snapshots of a used-equipment listing site", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults are built in)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the configuration and show what would be crawled
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => {
            tracing::info!("No config file given, using built-in defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_snapshot(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("moisson=info,warn"),
            1 => EnvFilter::new("moisson=debug,info"),
            2 => EnvFilter::new("moisson=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Moisson Dry Run ===\n");

    println!("Site:");
    println!("  Listing URL: {}", config.site.listing_url);
    println!("  Origin: {}", config.site.origin);
    println!("  Link marker: {}", config.site.link_marker);

    println!("\nHTTP:");
    println!("  User-Agent: {}", config.http.user_agent);
    println!("  Max retries: {}", config.http.max_retries);
    println!("  Backoff base: {}ms", config.http.backoff_ms);
    println!("  Timeout: {}s", config.http.timeout_secs);

    println!("\nPacing:");
    println!(
        "  Listing delay: {}-{}ms",
        config.pacing.listing_delay_min_ms, config.pacing.listing_delay_max_ms
    );
    println!(
        "  Product delay: {}-{}ms",
        config.pacing.product_delay_min_ms, config.pacing.product_delay_max_ms
    );

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);
    println!("  File prefix: {}", config.output.file_prefix);

    println!("\n✓ Configuration is valid");
}

/// Handles the main snapshot operation
async fn handle_snapshot(config: Config) -> anyhow::Result<()> {
    match run_snapshot(config).await {
        Ok(summary) => {
            match &summary.output_path {
                Some(path) => println!(
                    "Saved {} of {} products to {}",
                    summary.records_written,
                    summary.links_found,
                    path.display()
                ),
                None => println!("No product details found"),
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Snapshot failed: {}", e);
            Err(e.into())
        }
    }
}
