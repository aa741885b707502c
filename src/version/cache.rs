//! In-memory installer cache keyed by platform version

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::version::compare::{DescendingOrder, compare_version};
use crate::version::error::CacheError;
use crate::version::types::InstallerVersion;

type Entries = HashMap<String, Arc<Vec<InstallerVersion>>>;

/// In-memory installer cache keyed by platform version
///
/// Each entry is an immutable `Arc<Vec<_>>`. Writers build the new list
/// outside the lock and swap the `Arc` in, so a reader holding an older
/// `Arc` keeps seeing the complete old list.
#[derive(Debug, Default)]
pub struct VersionCache {
    entries: RwLock<Entries>,
}

impl VersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Entries>, CacheError> {
        self.entries.read().map_err(|_| CacheError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Entries>, CacheError> {
        self.entries.write().map_err(|_| CacheError::LockPoisoned)
    }

    /// Shared handle to the cached list, or `None` if the key was never stored
    pub fn get(
        &self,
        platform_version: &str,
    ) -> Result<Option<Arc<Vec<InstallerVersion>>>, CacheError> {
        Ok(self.read()?.get(platform_version).cloned())
    }

    /// Replace all versions for a platform version
    ///
    /// Entries without a self version are dropped. The rest are sorted newest
    /// first and entries sharing a self version are collapsed to the first one
    /// after sorting.
    pub fn replace_versions(
        &self,
        platform_version: &str,
        mut versions: Vec<InstallerVersion>,
    ) -> Result<(), CacheError> {
        let before = versions.len();
        versions.retain(|v| !v.self_version.is_empty());
        if versions.len() != before {
            warn!(
                "Dropping {} installer versions without a version for {}",
                before - versions.len(),
                platform_version
            );
        }

        versions.sort_by(|a, b| DescendingOrder::INSTANCE.compare(a, b));
        // Equal self versions compare Equal, so the stable sort leaves them adjacent
        versions.dedup();

        debug!(
            "Saving {} installer versions for {}",
            versions.len(),
            platform_version
        );

        let versions = Arc::new(versions);
        self.write()?.insert(platform_version.to_string(), versions);
        Ok(())
    }

    /// Known platform versions, sorted ascending
    pub fn platform_versions(&self) -> Result<Vec<String>, CacheError> {
        let mut keys: Vec<String> = self.read()?.keys().cloned().collect();
        keys.sort_by(|a, b| compare_version(a, b));
        Ok(keys)
    }

    pub fn len(&self) -> Result<usize, CacheError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.read()?.is_empty())
    }

    /// Forget every cached entry
    pub fn clear(&self) -> Result<(), CacheError> {
        self.write()?.clear();
        Ok(())
    }
}
