//! Scraping module: link discovery, field extraction, run orchestration
//!
//! This module contains the crawl logic proper:
//! - Walking the paginated listing to collect unique product links
//! - Label-anchored field extraction from product pages
//! - The sequential run loop tying discovery, extraction, and export together

mod coordinator;
mod document;
mod fields;
mod links;

pub use coordinator::{run_snapshot, Coordinator, RunSummary};
pub use document::ProductPage;
pub use fields::{extract_record, LABELED_FIELDS};
pub use links::{collect_product_links, discover_links, page_url, resolve_product_href, LinkSet};
