//! Link discovery over the paginated listing
//!
//! Listing pages are fetched one by one, starting at `page=1`. Every anchor
//! whose href contains the product marker is resolved against the fixed site
//! origin and added to an ordered, duplicate-free set. Discovery stops the
//! first time a page contributes zero new links; a page that only repeats
//! links already seen looks the same as an empty page and also terminates
//! the walk. That self-limiting behavior is deliberate.

use crate::client::HttpClient;
use crate::config::{PacingConfig, SiteConfig};
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Ordered collection of unique product URLs
///
/// Membership is by exact URL string; first-seen order is preserved.
#[derive(Debug, Default)]
pub struct LinkSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URL; returns true if it was genuinely new
    pub fn insert(&mut self, url: String) -> bool {
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.ordered.push(url);
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Consumes the set, yielding the URLs in first-seen order
    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Builds the URL for one listing page by appending the page parameter
pub fn page_url(listing_url: &str, page: u32) -> String {
    if listing_url.contains('?') {
        format!("{}&page={}", listing_url, page)
    } else {
        format!("{}?page={}", listing_url, page)
    }
}

/// Resolves a product href to an absolute URL
///
/// Absolute hrefs pass through unchanged; anything else is concatenated
/// onto the fixed site origin.
pub fn resolve_product_href(href: &str, origin: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", origin.trim_end_matches('/'), href)
    }
}

/// Scans one listing page for product links and adds them to the set
///
/// # Arguments
///
/// * `html` - The listing page markup
/// * `site` - Site configuration (origin and link marker)
/// * `links` - Accumulated link set, updated in place
///
/// # Returns
///
/// The number of genuinely new links this page contributed
pub fn collect_product_links(html: &str, site: &SiteConfig, links: &mut LinkSet) -> usize {
    let document = Html::parse_document(html);

    let anchor = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return 0,
    };

    let mut new_links = 0;
    for element in document.select(&anchor) {
        if let Some(href) = element.value().attr("href") {
            if !href.contains(&site.link_marker) {
                continue;
            }
            let url = resolve_product_href(href, &site.origin);
            if links.insert(url) {
                new_links += 1;
            }
        }
    }

    new_links
}

/// Walks the paginated listing and returns all discovered product URLs
///
/// A fetch failure on any listing page logs a warning and terminates
/// discovery early with whatever has been accumulated; partial results are
/// better than none and the caller continues with them.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `site` - Site configuration
/// * `pacing` - Politeness delays between listing pages
///
/// # Returns
///
/// Product URLs in first-seen order, without duplicates
pub async fn discover_links(
    client: &HttpClient,
    site: &SiteConfig,
    pacing: &PacingConfig,
) -> Vec<String> {
    let mut links = LinkSet::new();
    let mut page = 1u32;

    loop {
        let url = page_url(&site.listing_url, page);

        let body = match client.fetch(&url).await {
            Ok(fetched) => fetched.body,
            Err(e) => {
                tracing::warn!("Error fetching listing page {}: {}", page, e);
                break;
            }
        };

        let new_links = collect_product_links(&body, site, &mut links);
        tracing::info!("Page {}: found {} product links", page, new_links);

        // Zero new links is the sole termination condition
        if new_links == 0 {
            break;
        }

        page += 1;
        if let Some(delay) = pacing.listing_delay() {
            tokio::time::sleep(delay).await;
        }
    }

    tracing::info!("Total product links found: {}", links.len());
    links.into_vec()
}
