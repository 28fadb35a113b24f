//! Dashboard state management
//!
//! Contains the main dashboard state struct

use crate::consts::dashboard_consts::{
    HISTOGRAM_BINS, MAX_ACTIVITY_LOGS, TOP_RISKY_COUNT, risk_filter,
};
use crate::dataset::{Dataset, MaintenanceRecord};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::stats::{
    self, ChartSpec, FilteredView, KpiSummary, RiskBreakdown, StatsError,
};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Dashboard state: the cached dataset plus everything derived from it.
///
/// All derived blocks are recomputed on every pass; the adjustable filter
/// threshold is the only mutable interaction state.
#[derive(Debug)]
pub struct DashboardState {
    /// Where the maintenance schedule was loaded from.
    pub data_path: PathBuf,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// The loaded table, read-only and shared across render passes.
    pub dataset: Arc<Dataset>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// KPI tiles, or the reason the block is degraded.
    pub kpis: Result<KpiSummary, StatsError>,
    /// Risk level counts, or the reason the block is degraded.
    pub breakdown: Result<RiskBreakdown, StatsError>,
    /// Histogram of the failure risk column.
    pub risk_histogram: ChartSpec,
    /// Category bar chart.
    pub category_chart: ChartSpec,
    /// The riskiest machines, descending.
    pub top_risky: Vec<MaintenanceRecord>,
    /// Rows selected by the adjustable threshold.
    pub filtered: FilteredView,

    /// Current filter threshold, clamped to the adjustable range.
    threshold: f64,
    /// Maps errors to activity-log severities.
    classifier: ErrorClassifier,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        data_path: PathBuf,
        dataset: Arc<Dataset>,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        let threshold = risk_filter::DEFAULT;
        let mut state = Self {
            data_path,
            start_time,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,

            kpis: Err(StatsError::EmptyDataset),
            breakdown: Err(StatsError::EmptyDataset),
            risk_histogram: stats::histogram(&dataset, HISTOGRAM_BINS),
            category_chart: stats::bar_chart(&RiskBreakdown::default()),
            top_risky: Vec::new(),
            filtered: FilteredView {
                threshold,
                rows: Vec::new(),
            },

            dataset,
            threshold,
            classifier: ErrorClassifier::new(),
        };
        state.recompute();
        state.log_initial_events();
        state
    }

    /// Current filter threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Set the filter threshold, clamped to the adjustable range. Returns
    /// whether the value actually changed.
    pub fn set_threshold(&mut self, value: f64) -> bool {
        let clamped = risk_filter::clamp(value);
        if (clamped - self.threshold).abs() < f64::EPSILON {
            return false;
        }
        self.threshold = clamped;
        true
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    /// Seed the activity log with the load result and any degraded blocks.
    fn log_initial_events(&mut self) {
        self.add_event(Event::loader(
            format!(
                "Loaded {} maintenance records from {}",
                self.dataset.len(),
                self.data_path.display()
            ),
            EventType::Success,
            crate::logging::LogLevel::Info,
        ));

        if let Err(e) = self.kpis.clone() {
            let level = self.classifier.classify_stats_error(&e);
            self.add_event(Event::render_with_level(
                format!("KPI tiles degraded: {}", e),
                EventType::Error,
                level,
            ));
        }
        if let Err(e) = self.breakdown.clone() {
            let level = self.classifier.classify_stats_error(&e);
            self.add_event(Event::render_with_level(
                format!("Risk categories degraded: {}", e),
                EventType::Error,
                level,
            ));
        }
    }

    /// Recompute every derived block from the cached dataset.
    ///
    /// Pure function of (dataset, threshold); calling it twice in a row yields
    /// identical outputs.
    pub(super) fn recompute(&mut self) {
        self.kpis = stats::summarize(&self.dataset);
        self.breakdown = stats::categorize(&self.dataset);
        self.risk_histogram = stats::histogram(&self.dataset, HISTOGRAM_BINS);
        self.category_chart = match &self.breakdown {
            Ok(breakdown) => stats::bar_chart(breakdown),
            Err(_) => stats::bar_chart(&RiskBreakdown::default()),
        };
        self.top_risky = stats::top_n(&self.dataset, TOP_RISKY_COUNT);
        self.filtered = stats::filter_by_threshold(&self.dataset, self.threshold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::test_support::dataset_from_risks;

    fn state_for(risks: &[f64]) -> DashboardState {
        DashboardState::new(
            PathBuf::from("maintenance_schedule.csv"),
            Arc::new(dataset_from_risks(risks)),
            Instant::now(),
            UIConfig::new(false),
        )
    }

    #[test]
    fn new_state_computes_all_blocks() {
        let state = state_for(&[0.1, 0.65, 0.85, 0.95, 0.5]);
        let kpis = state.kpis.as_ref().unwrap();
        assert_eq!(kpis.total_count, 5);
        assert_eq!(state.top_risky.len(), 5);
        assert_eq!(state.filtered.count(), 2);
        assert_eq!(state.threshold(), 0.8);
    }

    #[test]
    fn empty_dataset_degrades_kpis_without_panicking() {
        let state = state_for(&[]);
        assert_eq!(state.kpis, Err(StatsError::EmptyDataset));
        // The categorizer still reports all-zero counts.
        assert_eq!(state.breakdown.as_ref().unwrap().total(), 0);
        assert!(state.top_risky.is_empty());
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut state = state_for(&[0.1, 0.65, 0.85, 0.95, 0.5]);
        let kpis = state.kpis.clone();
        let filtered = state.filtered.clone();
        state.recompute();
        assert_eq!(state.kpis, kpis);
        assert_eq!(state.filtered, filtered);
    }

    #[test]
    fn set_threshold_clamps_and_reports_change() {
        let mut state = state_for(&[0.6, 0.7, 0.9]);
        assert!(state.set_threshold(0.3));
        assert_eq!(state.threshold(), 0.6);
        assert!(!state.set_threshold(0.2)); // already at the floor
        assert!(state.set_threshold(2.0));
        assert_eq!(state.threshold(), 1.0);
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = state_for(&[0.5]);
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(Event::interaction(format!("event {i}")));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
    }
}
