use crate::config::OutputConfig;
use crate::record::{ProductRecord, COLUMNS};
use crate::MoissonError;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Builds the export filename for a given date
///
/// Format: `<prefix><YYYY-MM-DD>.csv`, matching what the periodic snapshot
/// jobs expect to find.
pub fn dated_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}{}.csv", prefix, date.format("%Y-%m-%d"))
}

/// Writes records to a CSV file at the given path
///
/// The header is the full fixed column set; every row back-fills missing
/// fields with empty cells so all rows share the header's width.
pub fn write_records<P: AsRef<Path>>(
    records: &[ProductRecord],
    path: P,
) -> Result<(), MoissonError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;

    Ok(())
}

/// Exports records to a dated CSV file in the configured directory
///
/// # Arguments
///
/// * `records` - The records to export (the caller guarantees non-empty)
/// * `config` - Output directory and filename prefix
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(MoissonError)` - Directory creation or CSV writing failed
pub fn export_records(
    records: &[ProductRecord],
    config: &OutputConfig,
) -> Result<PathBuf, MoissonError> {
    std::fs::create_dir_all(&config.directory)?;

    let filename = dated_filename(&config.file_prefix, Local::now().date_naive());
    let path = Path::new(&config.directory).join(filename);

    write_records(records, &path)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PRICE_COLUMN;
    use tempfile::tempdir;

    #[test]
    fn test_dated_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        assert_eq!(
            dated_filename("product_details", date),
            "product_details2024-05-03.csv"
        );
    }

    #[test]
    fn test_dated_filename_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(dated_filename("x", date), "x2024-01-09.csv");
    }

    #[test]
    fn test_write_records_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut record = ProductRecord::new("https://example.com/stock/1");
        record.set(PRICE_COLUMN, Some("95 000 €".to_string()));
        let bare = ProductRecord::new("https://example.com/stock/2");

        write_records(&[record, bare], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), COLUMNS.len());
        assert_eq!(&headers[0], "url");
        assert_eq!(&headers[1], "Prix");

        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "95 000 €");
        // Missing fields render as empty cells, not omitted columns
        assert_eq!(&rows[1][1], "");
        assert_eq!(rows[1].len(), COLUMNS.len());
    }

    #[test]
    fn test_export_creates_directory_and_dated_file() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("snapshots");
        let config = OutputConfig {
            directory: nested.to_string_lossy().into_owned(),
            file_prefix: "product_details".to_string(),
        };

        let record = ProductRecord::new("https://example.com/stock/1");
        let path = export_records(&[record], &config).unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("product_details"));
        assert!(name.ends_with(".csv"));
    }
}
