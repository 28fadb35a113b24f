//! Chart descriptions for the distribution section.
//!
//! These are plain data structures; the ratatui components (or headless
//! printer) decide how to draw them.

use crate::dataset::Dataset;
use crate::stats::categories::RiskBreakdown;

/// The kind of chart a spec describes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum ChartKind {
    Histogram,
    Bar,
}

/// A single labeled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: u64,
}

/// Abstract chart description, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub bars: Vec<ChartBar>,
}

/// Histogram of the failure risk column.
///
/// Equal-width bins spanning the observed value range. An empty table (or a
/// single repeated value collapsing the range) produces a placeholder spec
/// rather than an error.
pub fn histogram(dataset: &Dataset, bins: usize) -> ChartSpec {
    let title = "Failure Risk Distribution".to_string();
    if dataset.is_empty() || bins == 0 {
        return ChartSpec {
            title,
            kind: ChartKind::Histogram,
            bars: Vec::new(),
        };
    }

    let min = dataset.risks().fold(f64::MAX, f64::min);
    let max = dataset.risks().fold(f64::MIN, f64::max);
    let width = (max - min) / bins as f64;

    if width == 0.0 {
        // All scores identical; one bar holds everything.
        return ChartSpec {
            title,
            kind: ChartKind::Histogram,
            bars: vec![ChartBar {
                label: format!("{min:.2}"),
                value: dataset.len() as u64,
            }],
        };
    }

    let mut counts = vec![0u64; bins];
    for risk in dataset.risks() {
        // The maximum value lands in the last bin instead of overflowing it.
        let idx = (((risk - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let bars = counts
        .into_iter()
        .enumerate()
        .map(|(i, value)| ChartBar {
            label: format!("{:.2}", min + width * i as f64),
            value,
        })
        .collect();

    ChartSpec {
        title,
        kind: ChartKind::Histogram,
        bars,
    }
}

/// Category bar chart, one bar per risk level in fixed display order.
pub fn bar_chart(breakdown: &RiskBreakdown) -> ChartSpec {
    let bars = breakdown
        .iter()
        .map(|(level, count)| ChartBar {
            label: level.label().to_string(),
            value: count as u64,
        })
        .collect();

    ChartSpec {
        title: "Failure Risk Categories".to_string(),
        kind: ChartKind::Bar,
        bars,
    }
}
