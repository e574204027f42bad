//! Parsed product page and label-anchored value lookup
//!
//! Product pages carry their data as label/value pairs scattered through the
//! markup: a `<strong>` marker holds the field label, and the value sits in
//! a nearby node. [`ProductPage`] wraps the parsed document and exposes the
//! lookups as pure functions, so unit tests feed synthetic fragments without
//! any network involvement.

use scraper::{ElementRef, Html, Selector};

/// A parsed product detail page
pub struct ProductPage {
    doc: Html,
}

impl ProductPage {
    /// Parses page markup
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// Finds the value adjacent to a label marker
    ///
    /// Locates the first `<strong>` element whose trimmed text equals
    /// `label` exactly, then scans the rest of the document in order:
    /// the first `<h5>` wins, falling back to the first `<li>` when no
    /// `<h5>` follows the marker. Returns the trimmed value text, or
    /// `None` when the marker or both value nodes are absent.
    ///
    /// # Example
    ///
    /// ```
    /// use moisson::scrape::ProductPage;
    ///
    /// let page = ProductPage::parse("<strong>Marque</strong><h5> CLAAS </h5>");
    /// assert_eq!(page.find_value_near_label("Marque"), Some("CLAAS".to_string()));
    /// assert_eq!(page.find_value_near_label("Puissance"), None);
    /// ```
    pub fn find_value_near_label(&self, label: &str) -> Option<String> {
        let mut nodes = self.doc.root_element().descendants();

        // Advance the iterator to the marker element
        nodes.by_ref().find(|node| {
            ElementRef::wrap(*node)
                .map(|el| {
                    el.value().name() == "strong"
                        && el.text().collect::<String>().trim() == label
                })
                .unwrap_or(false)
        })?;

        // Scan everything after the marker in document order
        let mut fallback = None;
        for node in nodes {
            let Some(el) = ElementRef::wrap(node) else {
                continue;
            };
            match el.value().name() {
                "h5" => return element_text(&el),
                "li" if fallback.is_none() => fallback = element_text(&el),
                _ => {}
            }
        }

        fallback
    }

    /// Extracts the price from its dedicated container
    ///
    /// The price lives in a specifically styled span inside the price
    /// block; if either element is absent the price is simply missing.
    pub fn price(&self) -> Option<String> {
        let container = Selector::parse("div.dis-price").ok()?;
        let value = Selector::parse("span.color-green.colorBlack1").ok()?;

        let block = self.doc.select(&container).next()?;
        let span = block.select(&value).next()?;
        element_text(&span)
    }

    /// Extracts the dealer address from the map container's first paragraph
    pub fn address(&self) -> Option<String> {
        let map = Selector::parse("div#map").ok()?;
        let paragraph = Selector::parse("p").ok()?;

        let block = self.doc.select(&map).next()?;
        let p = block.select(&paragraph).next()?;
        element_text(&p)
    }
}

/// Collected, trimmed text of an element; empty text counts as missing
fn element_text(el: &ElementRef) -> Option<String> {
    let text = el.text().collect::<String>();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
