//! CSV loader for the maintenance schedule table.

use crate::dataset::record::{Dataset, MaintenanceRecord};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading the maintenance schedule file.
#[derive(Error, Debug)]
pub enum DataError {
    /// File not found
    #[error("Dataset file not found: {0}")]
    FileNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Invalid data format
    #[error("Invalid data in row {row}: {message}")]
    InvalidFormat { row: usize, message: String },
}

/// Required column carrying the machine identifier.
const PRODUCT_ID_COLUMN: &str = "Product_ID";
/// Required column carrying the precomputed risk score.
const FAILURE_RISK_COLUMN: &str = "failure_risk";
/// Required column carrying the scheduled maintenance timestamp.
const SCHEDULED_AT_COLUMN: &str = "scheduled_at";

/// Load the maintenance schedule from a CSV file.
///
/// The file must carry `Product_ID`, `failure_risk`, and `scheduled_at`
/// columns; any additional columns are kept verbatim for display.
///
/// # Errors
/// Returns a [`DataError`] if the file is missing, unreadable, or malformed.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset, DataError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let product_idx = column_index(&headers, PRODUCT_ID_COLUMN)?;
    let risk_idx = column_index(&headers, FAILURE_RISK_COLUMN)?;
    let scheduled_idx = column_index(&headers, SCHEDULED_AT_COLUMN)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let raw = result?;
        let fields: Vec<String> = raw.iter().map(|s| s.to_string()).collect();

        let risk_text = field(&fields, risk_idx, row)?;
        let failure_risk: f64 =
            risk_text
                .parse()
                .map_err(|_| DataError::InvalidFormat {
                    row,
                    message: format!("failure_risk is not a number: {risk_text:?}"),
                })?;
        // "NaN" and "inf" parse as f64; reject them here so downstream
        // aggregates never see a non-finite score.
        if !failure_risk.is_finite() {
            return Err(DataError::InvalidFormat {
                row,
                message: format!("failure_risk is not finite: {risk_text:?}"),
            });
        }

        records.push(MaintenanceRecord {
            row,
            product_id: field(&fields, product_idx, row)?.to_string(),
            failure_risk,
            scheduled_at: field(&fields, scheduled_idx, row)?.to_string(),
            fields,
        });
    }

    Ok(Dataset { headers, records })
}

/// Find a required column in the header row. Matching is case-insensitive so
/// `product_id` and `Product_ID` both resolve.
fn column_index(headers: &[String], name: &str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))
}

fn field(fields: &[String], idx: usize, row: usize) -> Result<&str, DataError> {
    fields
        .get(idx)
        .map(String::as_str)
        .ok_or_else(|| DataError::InvalidFormat {
            row,
            message: format!("row has {} fields, expected at least {}", fields.len(), idx + 1),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_reads_all_rows() {
        let file = write_csv(
            "Product_ID,failure_risk,scheduled_at,site\n\
             M001,0.85,2026-09-01 08:00:00,Plant A\n\
             M002,0.10,2026-09-02 09:30:00,Plant B\n",
        );

        let dataset = load(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.headers.len(), 4);
        assert_eq!(dataset.records[0].product_id, "M001");
        assert_eq!(dataset.records[0].failure_risk, 0.85);
        assert_eq!(dataset.records[1].scheduled_at, "2026-09-02 09:30:00");
        // Passthrough column survives untouched.
        assert_eq!(dataset.records[1].fields[3], "Plant B");
    }

    #[test]
    fn load_rejects_missing_file() {
        let result = load("nonexistent.csv");
        assert!(matches!(result, Err(DataError::FileNotFound(_))));
    }

    #[test]
    fn load_rejects_missing_risk_column() {
        let file = write_csv("Product_ID,scheduled_at\nM001,2026-09-01 08:00:00\n");
        let result = load(file.path());
        match result {
            Err(DataError::MissingColumn(name)) => assert_eq!(name, "failure_risk"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_unparsable_risk() {
        let file = write_csv(
            "Product_ID,failure_risk,scheduled_at\n\
             M001,0.4,2026-09-01 08:00:00\n\
             M002,not-a-number,2026-09-02 09:30:00\n",
        );
        let result = load(file.path());
        match result {
            Err(DataError::InvalidFormat { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_non_finite_risk() {
        let file = write_csv(
            "Product_ID,failure_risk,scheduled_at\n\
             M001,NaN,2026-09-01 08:00:00\n",
        );
        match load(file.path()) {
            Err(DataError::InvalidFormat { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }

        let file = write_csv(
            "Product_ID,failure_risk,scheduled_at\n\
             M001,inf,2026-09-01 08:00:00\n",
        );
        assert!(load(file.path()).is_err());
    }

    #[test]
    fn load_accepts_empty_table() {
        let file = write_csv("Product_ID,failure_risk,scheduled_at\n");
        let dataset = load(file.path()).unwrap();
        assert!(dataset.is_empty());
    }
}
