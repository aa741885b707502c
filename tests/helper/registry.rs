//! Registry test utilities

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use installer_versions::version::error::RegistryError;
use installer_versions::version::registry::InstallerRegistry;
use installer_versions::version::remote::RemoteInstallerList;
use installer_versions::version::types::{InstallerFamily, InstallerVersion};

/// Mock registry for testing
pub struct MockRegistry {
    family: InstallerFamily,
    versions: Mutex<HashMap<String, Vec<String>>>,
    delay: Option<Duration>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl MockRegistry {
    pub fn new(family: InstallerFamily) -> Self {
        Self {
            family,
            versions: Mutex::new(HashMap::new()),
            delay: None,
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_versions(self, platform_version: &str, versions: Vec<&str>) -> Self {
        self.set_versions(platform_version, versions);
        self
    }

    /// Change what the next fetch returns for `platform_version`
    pub fn set_versions(&self, platform_version: &str, versions: Vec<&str>) {
        self.versions.lock().unwrap().insert(
            platform_version.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
    }

    /// Sleep this long inside every fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Make subsequent fetches fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InstallerRegistry for MockRegistry {
    fn family(&self) -> InstallerFamily {
        self.family
    }

    async fn fetch_installers(
        &self,
        platform_versions: &HashSet<String>,
    ) -> Result<HashMap<String, Vec<InstallerVersion>>, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(RegistryError::InvalidResponse(
                "registry unavailable".to_string(),
            ));
        }

        let versions = self.versions.lock().unwrap().clone();
        Ok(versions
            .iter()
            .filter(|(key, _)| platform_versions.is_empty() || platform_versions.contains(*key))
            .map(|(key, versions)| {
                let installers = versions
                    .iter()
                    .map(|v| InstallerVersion::new(v.as_str(), key.as_str()))
                    .collect();
                (key.clone(), installers)
            })
            .collect())
    }
}

/// Create a list on top of the given mock registry
pub fn create_test_list(registry: MockRegistry) -> (Arc<MockRegistry>, Arc<RemoteInstallerList>) {
    let registry = Arc::new(registry);
    let list = Arc::new(RemoteInstallerList::new(registry.clone()));
    (registry, list)
}

pub fn platform_versions(keys: &[&str]) -> HashSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

pub fn self_versions(versions: &[InstallerVersion]) -> Vec<String> {
    versions.iter().map(|v| v.self_version.clone()).collect()
}
