//! KPI tile aggregates.

use crate::consts::dashboard_consts::HIGH_RISK_THRESHOLD;
use crate::dataset::Dataset;
use crate::stats::StatsError;
use serde::Serialize;

/// Scalar aggregates shown as KPI tiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    /// Number of scheduled maintenances.
    pub total_count: usize,
    /// Arithmetic mean of the failure risk column.
    pub avg_risk: f64,
    /// Highest failure risk in the table.
    pub max_risk: f64,
    /// Machines with `failure_risk > 0.8` (strict, fixed threshold).
    pub high_risk_count: usize,
}

impl KpiSummary {
    /// Average risk formatted as a percentage, matching the original tiles.
    pub fn avg_risk_percent(&self) -> String {
        format!("{:.2}%", self.avg_risk * 100.0)
    }

    /// Maximum risk formatted as a percentage.
    pub fn max_risk_percent(&self) -> String {
        format!("{:.2}%", self.max_risk * 100.0)
    }
}

/// Compute the KPI tiles from the loaded table.
///
/// # Errors
/// Returns [`StatsError::EmptyDataset`] for a zero-row table, since the mean
/// and maximum are undefined. Callers degrade the tiles to a placeholder.
pub fn summarize(dataset: &Dataset) -> Result<KpiSummary, StatsError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let total_count = dataset.len();
    let sum: f64 = dataset.risks().sum();
    let max_risk = dataset.risks().fold(f64::MIN, f64::max);
    let high_risk_count = dataset
        .risks()
        .filter(|&r| r > HIGH_RISK_THRESHOLD)
        .count();

    Ok(KpiSummary {
        total_count,
        avg_risk: sum / total_count as f64,
        max_risk,
        high_risk_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::test_support::dataset_from_risks;

    #[test]
    fn summarize_matches_reference_table() {
        let dataset = dataset_from_risks(&[0.1, 0.65, 0.85, 0.95, 0.5]);
        let kpis = summarize(&dataset).unwrap();
        assert_eq!(kpis.total_count, 5);
        assert!((kpis.avg_risk - 0.61).abs() < 1e-9);
        assert_eq!(kpis.max_risk, 0.95);
        assert_eq!(kpis.high_risk_count, 2);
    }

    #[test]
    fn high_risk_count_is_strictly_greater_than() {
        // A machine sitting exactly on the threshold does not count.
        let dataset = dataset_from_risks(&[0.8, 0.81]);
        let kpis = summarize(&dataset).unwrap();
        assert_eq!(kpis.high_risk_count, 1);
    }

    #[test]
    fn summarize_rejects_empty_table() {
        let dataset = dataset_from_risks(&[]);
        assert_eq!(summarize(&dataset), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn percent_formatting_matches_tiles() {
        let dataset = dataset_from_risks(&[0.1, 0.65, 0.85, 0.95, 0.5]);
        let kpis = summarize(&dataset).unwrap();
        assert_eq!(kpis.avg_risk_percent(), "61.00%");
        assert_eq!(kpis.max_risk_percent(), "95.00%");
    }
}
