//! Ordinal risk categories and their counts.

use crate::consts::dashboard_consts::{LOW_RISK_MAX, MEDIUM_RISK_MAX};
use crate::dataset::Dataset;
use crate::stats::StatsError;

/// Ordinal risk bucket derived from the failure risk score.
///
/// Recomputed on every render pass; never stored back into the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All levels in fixed display order.
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Bucket a risk score against the fixed [0, 0.6, 0.8, 1.0] edges.
    ///
    /// The lowest edge is inclusive over the whole range, the remaining
    /// intervals are right-closed: 0 <= r <= 0.6 is Low, 0.6 < r <= 0.8 is
    /// Medium, 0.8 < r <= 1.0 is High.
    ///
    /// # Errors
    /// Returns [`StatsError::RiskOutOfRange`] for scores outside [0, 1].
    pub fn of(risk: f64, row: usize) -> Result<Self, StatsError> {
        if !(0.0..=1.0).contains(&risk) || risk.is_nan() {
            return Err(StatsError::RiskOutOfRange { row, value: risk });
        }
        if risk <= LOW_RISK_MAX {
            Ok(RiskLevel::Low)
        } else if risk <= MEDIUM_RISK_MAX {
            Ok(RiskLevel::Medium)
        } else {
            Ok(RiskLevel::High)
        }
    }

    /// Display label carrying the bucket range, as in the original chart.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low (0-0.6)",
            RiskLevel::Medium => "Medium (0.6-0.8)",
            RiskLevel::High => "High (>0.8)",
        }
    }
}

/// Count of machines per risk level, in fixed display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskBreakdown {
    counts: [usize; 3],
}

impl RiskBreakdown {
    /// Count for a single level. Levels with no members report zero.
    pub fn count(&self, level: RiskLevel) -> usize {
        self.counts[level as usize]
    }

    /// Iterate levels and counts in display order: Low, Medium, High.
    pub fn iter(&self) -> impl Iterator<Item = (RiskLevel, usize)> + '_ {
        RiskLevel::ALL.iter().map(|&level| (level, self.count(level)))
    }

    /// Sum of all category counts. Equals the table row count.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bucket every record and count membership per level.
///
/// # Errors
/// Fails fast with [`StatsError::RiskOutOfRange`] on the first score outside
/// [0, 1]; that indicates upstream data corruption and is surfaced rather than
/// silently clamped.
pub fn categorize(dataset: &Dataset) -> Result<RiskBreakdown, StatsError> {
    let mut breakdown = RiskBreakdown::default();
    for record in &dataset.records {
        let level = RiskLevel::of(record.failure_risk, record.row)?;
        breakdown.counts[level as usize] += 1;
    }
    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::test_support::dataset_from_risks;

    #[test]
    fn categorize_matches_reference_table() {
        let dataset = dataset_from_risks(&[0.1, 0.65, 0.85, 0.95, 0.5]);
        let breakdown = categorize(&dataset).unwrap();
        assert_eq!(breakdown.count(RiskLevel::Low), 2);
        assert_eq!(breakdown.count(RiskLevel::Medium), 1);
        assert_eq!(breakdown.count(RiskLevel::High), 2);
    }

    #[test]
    fn counts_partition_the_table() {
        let dataset = dataset_from_risks(&[0.0, 0.3, 0.6, 0.61, 0.8, 0.81, 1.0]);
        let breakdown = categorize(&dataset).unwrap();
        assert_eq!(breakdown.total(), dataset.len());
    }

    #[test]
    fn edges_are_right_closed_with_inclusive_floor() {
        assert_eq!(RiskLevel::of(0.0, 1).unwrap(), RiskLevel::Low);
        assert_eq!(RiskLevel::of(0.6, 1).unwrap(), RiskLevel::Low);
        assert_eq!(RiskLevel::of(0.8, 1).unwrap(), RiskLevel::Medium);
        assert_eq!(RiskLevel::of(1.0, 1).unwrap(), RiskLevel::High);
    }

    #[test]
    fn out_of_range_scores_fail_fast() {
        assert_eq!(
            RiskLevel::of(1.2, 7),
            Err(StatsError::RiskOutOfRange { row: 7, value: 1.2 })
        );
        assert!(RiskLevel::of(-0.1, 1).is_err());
        assert!(RiskLevel::of(f64::NAN, 1).is_err());

        let dataset = dataset_from_risks(&[0.4, 1.5]);
        assert!(categorize(&dataset).is_err());
    }

    #[test]
    fn empty_table_yields_all_zero_counts() {
        let breakdown = categorize(&dataset_from_risks(&[])).unwrap();
        let counts: Vec<usize> = breakdown.iter().map(|(_, c)| c).collect();
        assert_eq!(counts, vec![0, 0, 0]);
    }
}
