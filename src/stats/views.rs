//! Tabular slices: top-N by risk and the adjustable threshold filter.

use crate::dataset::{Dataset, MaintenanceRecord};

/// Rows selected by the adjustable risk filter, with their count.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    /// Threshold the rows were selected against.
    pub threshold: f64,
    /// Matching rows in original table order.
    pub rows: Vec<MaintenanceRecord>,
}

impl FilteredView {
    /// Number of machines at or above the threshold.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// The summary line shown above the filtered table.
    pub fn summary_line(&self) -> String {
        format!(
            "Machines with risk >= {:.2}: {}",
            self.threshold,
            self.count()
        )
    }
}

/// The `n` riskiest machines, descending by risk.
///
/// The sort is stable, so ties keep their original row order. Fewer than `n`
/// records is not an error; the whole table is returned sorted.
pub fn top_n(dataset: &Dataset, n: usize) -> Vec<MaintenanceRecord> {
    let mut rows = dataset.records.clone();
    rows.sort_by(|a, b| {
        b.failure_risk
            .partial_cmp(&a.failure_risk)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows.truncate(n);
    rows
}

/// Select machines with `failure_risk >= threshold` (inclusive).
///
/// Cheap enough to re-run on every threshold change; no caching.
pub fn filter_by_threshold(dataset: &Dataset, threshold: f64) -> FilteredView {
    let rows = dataset
        .records
        .iter()
        .filter(|r| r.failure_risk >= threshold)
        .cloned()
        .collect();
    FilteredView { threshold, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::test_support::dataset_from_risks;

    #[test]
    fn top_n_sorts_descending_and_truncates() {
        let dataset = dataset_from_risks(&[0.1, 0.65, 0.85, 0.95, 0.5]);
        let top = top_n(&dataset, 2);
        let risks: Vec<f64> = top.iter().map(|r| r.failure_risk).collect();
        assert_eq!(risks, vec![0.95, 0.85]);
    }

    #[test]
    fn top_n_with_short_table_returns_everything() {
        let dataset = dataset_from_risks(&[0.2, 0.7]);
        assert_eq!(top_n(&dataset, 5).len(), 2);
    }

    #[test]
    fn top_n_ties_keep_original_row_order() {
        let dataset = dataset_from_risks(&[0.9, 0.3, 0.9]);
        let top = top_n(&dataset, 3);
        assert_eq!(top[0].row, 1);
        assert_eq!(top[1].row, 3);
        assert_eq!(top[2].row, 2);
    }

    #[test]
    fn filter_is_inclusive_at_the_threshold() {
        let dataset = dataset_from_risks(&[0.6, 0.59, 0.8]);
        let view = filter_by_threshold(&dataset, 0.6);
        assert_eq!(view.count(), 2);
        assert_eq!(view.rows[0].failure_risk, 0.6);
    }

    #[test]
    fn filter_matches_reference_table() {
        let dataset = dataset_from_risks(&[0.1, 0.65, 0.85, 0.95, 0.5]);
        let view = filter_by_threshold(&dataset, 0.8);
        let risks: Vec<f64> = view.rows.iter().map(|r| r.failure_risk).collect();
        assert_eq!(risks, vec![0.85, 0.95]);
        assert_eq!(view.summary_line(), "Machines with risk >= 0.80: 2");
    }

    #[test]
    fn strict_high_risk_kpi_is_contained_in_inclusive_filter() {
        let dataset = dataset_from_risks(&[0.8, 0.85, 0.75, 0.95]);
        let kpis = crate::stats::kpi::summarize(&dataset).unwrap();
        let view = filter_by_threshold(&dataset, 0.8);
        assert!(kpis.high_risk_count <= view.count());
        // They differ exactly by the machines sitting on 0.8.
        assert_eq!(view.count() - kpis.high_risk_count, 1);
    }

    #[test]
    fn refiltering_with_same_threshold_is_idempotent() {
        let dataset = dataset_from_risks(&[0.1, 0.65, 0.85, 0.95, 0.5]);
        let first = filter_by_threshold(&dataset, 0.7);
        let second = filter_by_threshold(&dataset, 0.7);
        assert_eq!(first, second);
    }
}
