//! Field extraction for product pages
//!
//! Besides the price and address, every field is located by its French
//! label marker and read through the same label-anchored lookup.

use crate::record::{ProductRecord, ADDRESS_COLUMN, PRICE_COLUMN};
use crate::scrape::document::ProductPage;

/// Labeled attributes as (column, label marker) pairs, in column order
///
/// The column and the marker text usually coincide; the dealer field is the
/// one exception, where the page spells the label in lowercase.
pub const LABELED_FIELDS: [(&str, &str); 16] = [
    ("Marque", "Marque"),
    ("Modèle", "Modèle"),
    ("Année", "Année"),
    ("Disponible chez", "disponible chez"),
    ("Nombre d'heures moteur", "Nombre d'heures moteur"),
    ("Nombre d'heures batteur", "Nombre d'heures batteur"),
    ("Nombre de secoueurs", "Nombre de secoueurs"),
    ("Puissance", "Puissance"),
    ("Broyeur", "Broyeur"),
    ("Eparpilleur", "Eparpilleur"),
    ("Nombre de RM", "Nombre de RM"),
    ("Chariot de coupe", "Chariot de coupe"),
    ("Dimension des pneus AV", "Dimension des pneus AV"),
    ("Dimension des pneus AR", "Dimension des pneus AR"),
    ("Caisson de dévers", "Caisson de dévers"),
    ("Mise en Avant", "Mise en Avant"),
];

/// Extracts all fields from a parsed product page
///
/// Always yields a record: fields the page does not carry stay missing, and
/// a record with nothing but its URL is still a successful extraction.
///
/// # Arguments
///
/// * `page` - The parsed product page
/// * `url` - The product page URL
pub fn extract_record(page: &ProductPage, url: &str) -> ProductRecord {
    let mut record = ProductRecord::new(url);

    record.set(PRICE_COLUMN, page.price());

    for (column, label) in LABELED_FIELDS {
        record.set(column, page.find_value_near_label(label));
    }

    record.set(ADDRESS_COLUMN, page.address());

    record
}
