//! Event System
//!
//! Timestamped activity events shown in the dashboard log panel and echoed in
//! headless mode.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Where an event originated.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// The dataset loader/cache.
    Loader,
    /// A user interaction (threshold changes, key presses).
    Interaction,
    /// A render-pass computation (KPIs, categorization).
    Render,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Loader, msg, event_type, log_level)
    }

    pub fn interaction(msg: String) -> Self {
        Self::new(Source::Interaction, msg, EventType::Refresh, LogLevel::Info)
    }

    pub fn render_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Render, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_events_are_always_displayed() {
        let event = Event::loader(
            "Loaded 12 maintenance records".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }

    #[test]
    fn display_includes_type_and_message() {
        let event = Event::interaction("Risk filter set to 0.85".to_string());
        let text = format!("{event}");
        assert!(text.starts_with("Refresh ["));
        assert!(text.ends_with("Risk filter set to 0.85"));
    }
}
