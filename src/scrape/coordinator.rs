//! Run orchestration - the sequential snapshot loop
//!
//! One pass, no resumption: discover all product links, visit each one,
//! extract what the page offers, and export the collected records at the
//! end. Individual product failures are logged and skipped; only an empty
//! final result suppresses the output file.

use crate::client::HttpClient;
use crate::config::Config;
use crate::output::export_records;
use crate::record::ProductRecord;
use crate::scrape::document::ProductPage;
use crate::scrape::fields::extract_record;
use crate::scrape::links::discover_links;
use crate::MoissonError;
use std::path::PathBuf;

/// Outcome of one snapshot run
#[derive(Debug)]
pub struct RunSummary {
    /// Product links discovered on the listing
    pub links_found: usize,

    /// Records successfully extracted and written
    pub records_written: usize,

    /// Path of the CSV file, or None when no data was found
    pub output_path: Option<PathBuf>,
}

/// Snapshot coordinator: owns the configuration and the HTTP session
pub struct Coordinator {
    config: Config,
    client: HttpClient,
}

impl Coordinator {
    /// Creates a coordinator, building the HTTP client once for the run
    pub fn new(config: Config) -> Result<Self, MoissonError> {
        let client = HttpClient::new(&config.http)?;
        Ok(Self { config, client })
    }

    /// Runs the snapshot: discover, extract, export
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` - Totals and the output path, if any
    /// * `Err(MoissonError)` - Only unexpected failures (e.g. the export
    ///   itself); fetch failures are absorbed along the way
    pub async fn run(&self) -> Result<RunSummary, MoissonError> {
        let links = discover_links(&self.client, &self.config.site, &self.config.pacing).await;
        let total = links.len();

        let mut records: Vec<ProductRecord> = Vec::new();

        for (index, link) in links.iter().enumerate() {
            tracing::info!("Processing link {} of {}: {}", index + 1, total, link);

            match self.client.fetch(link).await {
                Ok(fetched) => {
                    let page = ProductPage::parse(&fetched.body);
                    let record = extract_record(&page, link);
                    tracing::info!(
                        "Extracted {} fields from link {} of {}",
                        record.field_count(),
                        index + 1,
                        total
                    );
                    records.push(record);
                }
                Err(e) => {
                    tracing::warn!("Failed to extract details for link {}: {}", index + 1, e);
                }
            }

            if index + 1 < total {
                if let Some(delay) = self.config.pacing.product_delay() {
                    tokio::time::sleep(delay).await;
                }
            }
        }

        if records.is_empty() {
            tracing::info!("No product details found");
            return Ok(RunSummary {
                links_found: total,
                records_written: 0,
                output_path: None,
            });
        }

        let path = export_records(&records, &self.config.output)?;
        tracing::info!("Saved {} records to {}", records.len(), path.display());

        Ok(RunSummary {
            links_found: total,
            records_written: records.len(),
            output_path: Some(path),
        })
    }
}

/// Runs a complete snapshot with the given configuration
///
/// This is the main entry point: it builds the client, walks the listing,
/// extracts every product page, and writes the dated CSV export.
pub async fn run_snapshot(config: Config) -> Result<RunSummary, MoissonError> {
    Coordinator::new(config)?.run().await
}
