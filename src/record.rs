//! Product record and the fixed column set
//!
//! A record maps column names to optional values. The column order is fixed
//! so every export carries an identical header and rows back-fill missing
//! fields with empty cells.

use std::collections::HashMap;

/// Column holding the product page URL
pub const URL_COLUMN: &str = "url";

/// Column holding the price
pub const PRICE_COLUMN: &str = "Prix";

/// Column holding the dealer address
pub const ADDRESS_COLUMN: &str = "Où trouver cette occasion";

/// Full column set, in output order
pub const COLUMNS: [&str; 19] = [
    URL_COLUMN,
    PRICE_COLUMN,
    "Marque",
    "Modèle",
    "Année",
    "Disponible chez",
    "Nombre d'heures moteur",
    "Nombre d'heures batteur",
    "Nombre de secoueurs",
    "Puissance",
    "Broyeur",
    "Eparpilleur",
    "Nombre de RM",
    "Chariot de coupe",
    "Dimension des pneus AV",
    "Dimension des pneus AR",
    "Caisson de dévers",
    "Mise en Avant",
    ADDRESS_COLUMN,
];

/// One extracted product
///
/// The URL is always present; every other field is optional. A record with
/// nothing but its URL is still a valid, exportable record.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    url: String,
    values: HashMap<&'static str, String>,
}

impl ProductRecord {
    /// Creates a record for the given product URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            values: HashMap::new(),
        }
    }

    /// The product page URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Stores a field value; `None` leaves the field missing
    pub fn set(&mut self, column: &'static str, value: Option<String>) {
        if let Some(value) = value {
            self.values.insert(column, value);
        }
    }

    /// Looks up a field by column name
    pub fn get(&self, column: &str) -> Option<&str> {
        if column == URL_COLUMN {
            Some(&self.url)
        } else {
            self.values.get(column).map(String::as_str)
        }
    }

    /// Number of populated fields besides the URL
    pub fn field_count(&self) -> usize {
        self.values.len()
    }

    /// Renders the record as a CSV row in [`COLUMNS`] order
    ///
    /// Missing fields render as empty cells, so every row has the same
    /// width as the header.
    pub fn to_row(&self) -> Vec<String> {
        COLUMNS
            .iter()
            .map(|column| self.get(column).unwrap_or("").to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_always_present() {
        let record = ProductRecord::new("https://example.com/stock/1");
        assert_eq!(record.url(), "https://example.com/stock/1");
        assert_eq!(record.get(URL_COLUMN), Some("https://example.com/stock/1"));
    }

    #[test]
    fn test_set_and_get() {
        let mut record = ProductRecord::new("https://example.com/stock/1");
        record.set("Marque", Some("CLAAS".to_string()));
        assert_eq!(record.get("Marque"), Some("CLAAS"));
        assert_eq!(record.field_count(), 1);
    }

    #[test]
    fn test_set_none_leaves_field_missing() {
        let mut record = ProductRecord::new("https://example.com/stock/1");
        record.set("Marque", None);
        assert_eq!(record.get("Marque"), None);
        assert_eq!(record.field_count(), 0);
    }

    #[test]
    fn test_bare_record_row_backfills_empty_cells() {
        let record = ProductRecord::new("https://example.com/stock/1");
        let row = record.to_row();

        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], "https://example.com/stock/1");
        assert!(row[1..].iter().all(String::is_empty));
    }

    #[test]
    fn test_row_follows_column_order() {
        let mut record = ProductRecord::new("https://example.com/stock/1");
        record.set(PRICE_COLUMN, Some("95 000 €".to_string()));
        record.set("Année", Some("2018".to_string()));
        record.set(ADDRESS_COLUMN, Some("72000 Le Mans".to_string()));

        let row = record.to_row();
        assert_eq!(row[1], "95 000 €");
        assert_eq!(row[4], "2018");
        assert_eq!(row[18], "72000 Le Mans");
        assert_eq!(row[2], ""); // Marque not set
    }

    #[test]
    fn test_columns_start_with_url_and_price() {
        assert_eq!(COLUMNS[0], URL_COLUMN);
        assert_eq!(COLUMNS[1], PRICE_COLUMN);
        assert_eq!(COLUMNS[COLUMNS.len() - 1], ADDRESS_COLUMN);
    }
}
