//! Registry trait for fetching installer versions from remote sources

use std::collections::{HashMap, HashSet};

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::{InstallerFamily, InstallerVersion};

/// Trait for fetching installer versions from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait InstallerRegistry: Send + Sync {
    /// Returns the installer family this implementation handles
    fn family(&self) -> InstallerFamily;

    /// Fetches installers for the given platform versions
    ///
    /// # Arguments
    /// * `platform_versions` - Game versions to look up. Registries serving a
    ///   single index may ignore an empty set and return everything.
    ///
    /// # Returns
    /// * `Ok(map)` - Installers grouped by platform version, in registry order.
    ///   May contain keys that were not requested.
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_installers(
        &self,
        platform_versions: &HashSet<String>,
    ) -> Result<HashMap<String, Vec<InstallerVersion>>, RegistryError>;
}
