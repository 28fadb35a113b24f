//! One-time dataset cache.
//!
//! The source table is read exactly once per process; every later render pass
//! reuses the same in-memory instance.

use crate::dataset::loader::{self, DataError};
use crate::dataset::record::Dataset;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Lazily-initialized cache keyed by a fixed source path.
///
/// Owned explicitly by the session rather than living in module state, so the
/// initialization point is the first `get()` call and nothing else can write
/// to it afterwards.
#[derive(Debug, Default)]
pub struct DatasetCache {
    path: PathBuf,
    loaded: OnceLock<Arc<Dataset>>,
}

impl DatasetCache {
    /// Create a cache for the given source file. No IO happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: OnceLock::new(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached dataset, reading the backing file on the first call.
    ///
    /// # Errors
    /// Returns a [`DataError`] if the first load fails; a failed load is not
    /// cached, so the next call retries the file.
    pub fn get(&self) -> Result<Arc<Dataset>, DataError> {
        if let Some(dataset) = self.loaded.get() {
            return Ok(dataset.clone());
        }
        let dataset = Arc::new(loader::load(&self.path)?);
        Ok(self.loaded.get_or_init(|| dataset).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn get_returns_same_instance_without_rereading() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Product_ID,failure_risk,scheduled_at\nM001,0.5,2026-09-01 08:00:00\n"
        )
        .unwrap();
        file.flush().unwrap();

        let cache = DatasetCache::new(file.path());
        let first = cache.get().unwrap();

        // Remove the backing file; the cache must keep serving the loaded table.
        let path = file.path().to_path_buf();
        drop(file);
        assert!(!path.exists());

        let second = cache.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.csv");

        let cache = DatasetCache::new(&path);
        assert!(matches!(cache.get(), Err(DataError::FileNotFound(_))));

        // Once the file appears, the same cache can serve it.
        std::fs::write(
            &path,
            "Product_ID,failure_risk,scheduled_at\nM001,0.9,2026-09-01 08:00:00\n",
        )
        .unwrap();
        assert_eq!(cache.get().unwrap().len(), 1);
    }
}
