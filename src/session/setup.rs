//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::dataset::DatasetCache;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::{print_cmd_error, print_cmd_warn};
use std::error::Error;
use std::path::PathBuf;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// One-time dataset cache; render passes reuse the loaded table
    pub cache: DatasetCache,
    /// Where the table came from (for display)
    pub data_path: PathBuf,
}

/// Resolve the dataset location: an explicit `--data` argument wins, otherwise
/// the configured path from `~/.riskboard/config.json`.
pub fn resolve_data_path(data_arg: Option<PathBuf>) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = data_arg {
        return Ok(path);
    }
    let config_path = get_config_path()?;
    if config_path.exists() {
        if let Ok(config) = Config::load_from_file(&config_path) {
            return Ok(config.data_path);
        }
    }
    Err(Box::from(
        "No dataset configured. Pass --data <FILE> or run `riskboard set-data <FILE>` first.",
    ))
}

/// Sets up a dashboard session
///
/// This function handles the common setup required for both TUI and headless
/// modes:
/// 1. Resolves the dataset path (argument or config file)
/// 2. Creates the one-time dataset cache
/// 3. Primes the cache; a load failure here is fatal (no partial dashboard)
///
/// # Arguments
/// * `data_arg` - Dataset path from the command line, if given
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Session setup failed
pub fn setup_session(data_arg: Option<PathBuf>) -> Result<SessionData, Box<dyn Error>> {
    let data_path = resolve_data_path(data_arg)?;

    let cache = DatasetCache::new(&data_path);
    if let Err(e) = cache.get() {
        match ErrorClassifier::new().classify_data_error(&e) {
            LogLevel::Error => print_cmd_error!("Dataset", &e.to_string()),
            _ => print_cmd_warn!("Dataset", "{}", e),
        }
        return Err(format!("Failed to load dataset: {}", e).into());
    }

    Ok(SessionData { cache, data_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    #[test]
    fn explicit_data_argument_wins() {
        let path = resolve_data_path(Some(PathBuf::from("custom.csv"))).unwrap();
        assert_eq!(path, PathBuf::from("custom.csv"));
    }

    #[test]
    fn setup_fails_on_missing_file() {
        let result = setup_session(Some(PathBuf::from("definitely_missing.csv")));
        assert!(result.is_err());
    }

    #[test]
    fn setup_primes_the_cache() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Product_ID,failure_risk,scheduled_at\nM001,0.7,2026-09-01 08:00:00\n"
        )
        .unwrap();
        file.flush().unwrap();

        let session = setup_session(Some(file.path().to_path_buf())).unwrap();
        let dataset = session.cache.get().unwrap();
        assert_eq!(dataset.len(), 1);
        // Primed during setup; repeated gets serve the same instance.
        assert!(Arc::ptr_eq(&dataset, &session.cache.get().unwrap()));
    }
}
