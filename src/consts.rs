pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // RISK CATEGORIZATION
    // =============================================================================
    // Bin edges follow the fixed [0, 0.6, 0.8, 1.0] scheme: lowest edge inclusive
    // on the whole range, otherwise right-closed intervals.

    /// Upper (inclusive) bound of the Low risk category.
    pub const LOW_RISK_MAX: f64 = 0.6;

    /// Upper (inclusive) bound of the Medium risk category.
    pub const MEDIUM_RISK_MAX: f64 = 0.8;

    /// Fixed threshold for the high-risk KPI tile. Strictly greater-than,
    /// independent of the adjustable filter threshold.
    pub const HIGH_RISK_THRESHOLD: f64 = 0.8;

    // =============================================================================
    // CHARTS AND TABLES
    // =============================================================================

    /// Number of equal-width bins in the failure risk histogram.
    pub const HISTOGRAM_BINS: usize = 10;

    /// Number of rows shown in the top risky machines table.
    pub const TOP_RISKY_COUNT: usize = 5;

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // RISK FILTER
    // =============================================================================

    /// Adjustable risk filter configuration (the slider in the original dashboard).
    pub mod risk_filter {
        /// Lowest threshold the user can select.
        pub const MIN: f64 = 0.6;

        /// Highest threshold the user can select.
        pub const MAX: f64 = 1.0;

        /// Threshold shown before any user interaction.
        pub const DEFAULT: f64 = 0.8;

        /// Increment applied per keypress.
        pub const STEP: f64 = 0.05;

        /// Clamp a candidate threshold to the adjustable range.
        pub fn clamp(value: f64) -> f64 {
            value.clamp(MIN, MAX)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::dashboard_consts::risk_filter;

    #[test]
    fn filter_clamp_stays_in_range() {
        assert_eq!(risk_filter::clamp(0.5), risk_filter::MIN);
        assert_eq!(risk_filter::clamp(1.2), risk_filter::MAX);
        assert_eq!(risk_filter::clamp(0.85), 0.85);
    }
}
