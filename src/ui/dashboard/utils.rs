//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::prelude::Color;

/// Get a ratatui color for an event based on its source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Loader => Color::Cyan,
        Source::Interaction => Color::Yellow,
        Source::Render => Color::Green,
    }
}

/// Get a ratatui color for a risk score, matching the category thresholds
pub fn risk_color(risk: f64) -> Color {
    if risk > crate::consts::dashboard_consts::MEDIUM_RISK_MAX {
        Color::Red
    } else if risk > crate::consts::dashboard_consts::LOW_RISK_MAX {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                // Get MM-DD
                if let Some(hour_min) = time_part.get(0..5) {
                    // Get HH:MM
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_drops_year_and_seconds() {
        assert_eq!(
            format_compact_timestamp("2026-08-31 14:05:59"),
            "08-31 14:05"
        );
        // Unparsable input falls through unchanged.
        assert_eq!(format_compact_timestamp("soon"), "soon");
    }

    #[test]
    fn risk_color_tracks_category_edges() {
        assert_eq!(risk_color(0.6), Color::Green);
        assert_eq!(risk_color(0.7), Color::Yellow);
        assert_eq!(risk_color(0.81), Color::Red);
    }
}
