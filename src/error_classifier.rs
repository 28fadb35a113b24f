use crate::dataset::DataError;
use crate::stats::StatsError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_data_error(&self, error: &DataError) -> LogLevel {
        match error {
            // Critical: nothing can render without the table
            DataError::FileNotFound(_) => LogLevel::Error,
            DataError::MissingColumn(_) => LogLevel::Error,
            DataError::InvalidFormat { .. } => LogLevel::Error,
            DataError::Csv(_) => LogLevel::Error,

            // IO hiccups may be transient (file still being written, etc.)
            DataError::Io(_) => LogLevel::Warn,
        }
    }

    pub fn classify_stats_error(&self, error: &StatsError) -> LogLevel {
        match error {
            // An empty table degrades a display block, the dashboard survives
            StatsError::EmptyDataset => LogLevel::Warn,

            // Out-of-range scores mean the upstream data is corrupt
            StatsError::RiskOutOfRange { .. } => LogLevel::Error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_errors_are_fatal_severity() {
        let classifier = ErrorClassifier::new();
        let level = classifier.classify_data_error(&DataError::FileNotFound("x.csv".into()));
        assert_eq!(level, LogLevel::Error);
    }

    #[test]
    fn empty_dataset_is_a_warning() {
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify_stats_error(&StatsError::EmptyDataset),
            LogLevel::Warn
        );
        assert_eq!(
            classifier.classify_stats_error(&StatsError::RiskOutOfRange { row: 3, value: 1.4 }),
            LogLevel::Error
        );
    }
}
