//! Descriptive statistics over the loaded maintenance table.
//!
//! Every function here is a pure transformation of the cached dataset; the
//! dashboard recomputes all of it on each render pass.

pub mod categories;
pub mod charts;
pub mod kpi;
pub mod views;

use thiserror::Error;

/// Errors raised while computing a single display block.
///
/// These degrade the affected block only; the rest of the dashboard still
/// renders.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The table has zero rows, so means and maxima are undefined.
    #[error("Dataset has no records")]
    EmptyDataset,

    /// A risk score left the unit interval. Upstream data is corrupt; fail
    /// fast rather than silently mis-bucket.
    #[error("Risk score out of range in row {row}: {value}")]
    RiskOutOfRange { row: usize, value: f64 },
}

pub use categories::{RiskBreakdown, RiskLevel, categorize};
pub use charts::{ChartKind, ChartSpec, bar_chart, histogram};
pub use kpi::{KpiSummary, summarize};
pub use views::{FilteredView, filter_by_threshold, top_n};
