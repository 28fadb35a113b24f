//! Dashboard state update logic
//!
//! Per-pass updates and threshold interaction handling

use super::state::DashboardState;
use crate::consts::dashboard_consts::risk_filter;
use crate::events::Event;

impl DashboardState {
    /// Update the dashboard state for a new render pass.
    ///
    /// One linear pass: drain queued events into the activity log, then
    /// recompute every derived block from the cached dataset.
    pub fn update(&mut self) {
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }

        self.recompute();
    }

    /// Move the filter threshold one step up.
    pub fn raise_threshold(&mut self) {
        self.step_threshold(risk_filter::STEP);
    }

    /// Move the filter threshold one step down.
    pub fn lower_threshold(&mut self) {
        self.step_threshold(-risk_filter::STEP);
    }

    fn step_threshold(&mut self, delta: f64) {
        // Snap to the 0.05 grid; raw f64 accumulation would drift off it and
        // exclude scores sitting exactly on the displayed threshold.
        let target = ((self.threshold() + delta) * 100.0).round() / 100.0;
        if self.set_threshold(target) {
            // Refilter immediately so the logged count matches the new value.
            self.recompute();
            self.add_event(Event::interaction(format!(
                "Risk filter set to {:.2} ({} machines selected)",
                self.threshold(),
                self.filtered.count()
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::test_support::dataset_from_risks;
    use crate::ui::app::UIConfig;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Instant;

    fn state_for(risks: &[f64]) -> DashboardState {
        DashboardState::new(
            PathBuf::from("maintenance_schedule.csv"),
            Arc::new(dataset_from_risks(risks)),
            Instant::now(),
            UIConfig::new(false),
        )
    }

    #[test]
    fn stepping_reflects_in_filtered_rows() {
        let mut state = state_for(&[0.6, 0.84, 0.9]);
        assert_eq!(state.filtered.count(), 2); // >= 0.80

        state.raise_threshold(); // 0.85
        assert_eq!(state.threshold(), 0.85);
        assert_eq!(state.filtered.count(), 1);

        state.lower_threshold();
        state.lower_threshold();
        state.lower_threshold();
        state.lower_threshold(); // clamped at 0.60
        assert_eq!(state.threshold(), risk_filter::MIN);
        assert_eq!(state.filtered.count(), 3);
    }

    #[test]
    fn threshold_change_queues_an_interaction_event() {
        let mut state = state_for(&[0.9]);
        state.update(); // drain the load event
        assert!(state.pending_events.is_empty());

        state.raise_threshold();
        assert_eq!(state.pending_events.len(), 1);
        assert!(state.pending_events[0].msg.contains("0.85"));

        // A no-op step (already clamped) queues nothing.
        for _ in 0..8 {
            state.raise_threshold();
        }
        let queued = state.pending_events.len();
        state.raise_threshold();
        assert_eq!(state.pending_events.len(), queued);
    }

    #[test]
    fn stepped_threshold_includes_record_on_the_boundary() {
        // The filter is inclusive, so a machine sitting exactly on a stepped
        // threshold stays selected.
        let mut state = state_for(&[0.85]);
        assert_eq!(state.filtered.count(), 1); // 0.85 >= 0.80

        state.raise_threshold();
        assert_eq!(state.threshold(), 0.85);
        assert_eq!(state.filtered.count(), 1);

        state.raise_threshold();
        assert_eq!(state.filtered.count(), 0); // 0.85 < 0.90
    }

    #[test]
    fn update_drains_events_into_activity_log() {
        let mut state = state_for(&[0.9]);
        let seeded = state.pending_events.len();
        assert!(seeded > 0);
        state.update();
        assert!(state.pending_events.is_empty());
        assert_eq!(state.activity_logs.len(), seeded);
    }
}
