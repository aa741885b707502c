//! Installer list backed by a remote registry and an in-memory cache

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info};

use crate::version::cache::VersionCache;
use crate::version::error::RefreshError;
use crate::version::list::InstallerVersionList;
use crate::version::registry::InstallerRegistry;
use crate::version::types::{InstallerFamily, InstallerVersion};

/// [`InstallerVersionList`] that fetches from an [`InstallerRegistry`]
///
/// Refreshes run one at a time. A refresh replaces the cached entry of every
/// platform version it was asked for; a requested version the registry does
/// not know is stored as an empty list. An empty request replaces whatever
/// the registry returned.
pub struct RemoteInstallerList {
    family: InstallerFamily,
    registry: Arc<dyn InstallerRegistry>,
    cache: VersionCache,
    refresh_gate: Mutex<()>,
}

impl RemoteInstallerList {
    pub fn new(registry: Arc<dyn InstallerRegistry>) -> Self {
        Self {
            family: registry.family(),
            registry,
            cache: VersionCache::new(),
            refresh_gate: Mutex::new(()),
        }
    }

    pub fn family(&self) -> InstallerFamily {
        self.family
    }

    /// Platform versions with cached data, sorted ascending
    pub fn cached_platform_versions(&self) -> Vec<String> {
        self.cache
            .platform_versions()
            .inspect_err(|e| error!("Failed to list cached {} versions: {}", self.name(), e))
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl InstallerVersionList for RemoteInstallerList {
    fn name(&self) -> &str {
        self.family.display_name()
    }

    async fn refresh(&self, platform_versions: &HashSet<String>) -> Result<(), RefreshError> {
        let _guard = self.refresh_gate.lock().await;
        let name = self.name();

        info!(
            "Refreshing {} installers for {} platform versions",
            name,
            platform_versions.len()
        );

        let mut fetched = self
            .registry
            .fetch_installers(platform_versions)
            .await
            .inspect_err(|e| error!("Failed to fetch {} installers: {}", name, e))?;

        if platform_versions.is_empty() {
            for (platform_version, versions) in fetched {
                self.cache.replace_versions(&platform_version, versions)?;
            }
        } else {
            for platform_version in platform_versions {
                let versions = fetched.remove(platform_version).unwrap_or_default();
                self.cache.replace_versions(platform_version, versions)?;
            }
        }

        info!("Refreshed {} installers", name);
        Ok(())
    }

    fn versions_impl(&self, platform_version: &str) -> Option<Arc<Vec<InstallerVersion>>> {
        self.cache
            .get(platform_version)
            .inspect_err(|e| {
                error!(
                    "Failed to read cached {} installers for {}: {}",
                    self.name(),
                    platform_version,
                    e
                )
            })
            .ok()
            .flatten()
    }
}
