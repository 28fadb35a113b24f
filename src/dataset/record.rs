//! Maintenance schedule rows and the in-memory dataset.

/// A single scheduled maintenance entry from the source table.
///
/// Rows are immutable once loaded; the dashboard never writes back.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecord {
    /// Row number in the source file (1-indexed, excluding the header).
    pub row: usize,
    /// Machine/product identifier.
    pub product_id: String,
    /// Precomputed failure risk score in [0, 1].
    pub failure_risk: f64,
    /// Scheduled maintenance timestamp, displayed verbatim.
    pub scheduled_at: String,
    /// All raw field values of the row, in header order. Columns beyond the
    /// required three pass through untouched for the schedule table.
    pub fields: Vec<String>,
}

/// The full ordered maintenance table, read-only after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Column names from the source file header, in file order.
    pub headers: Vec<String>,
    /// All records, in file order.
    pub records: Vec<MaintenanceRecord>,
}

impl Dataset {
    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the failure risk column.
    pub fn risks(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.failure_risk)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build a dataset from bare risk values, one synthetic machine per value.
    pub fn dataset_from_risks(risks: &[f64]) -> Dataset {
        let records = risks
            .iter()
            .enumerate()
            .map(|(i, &risk)| {
                let product_id = format!("M{:03}", i + 1);
                let scheduled_at = format!("2026-09-{:02} 08:00:00", (i % 28) + 1);
                MaintenanceRecord {
                    row: i + 1,
                    fields: vec![
                        product_id.clone(),
                        format!("{risk}"),
                        scheduled_at.clone(),
                    ],
                    product_id,
                    failure_risk: risk,
                    scheduled_at,
                }
            })
            .collect();
        Dataset {
            headers: vec![
                "Product_ID".to_string(),
                "failure_risk".to_string(),
                "scheduled_at".to_string(),
            ],
            records,
        }
    }
}
