//! Registry implementations for fetching installer versions

pub mod fabric;
pub mod forge;

use std::sync::Arc;

pub use fabric::FabricRegistry;
pub use forge::ForgeRegistry;

use crate::config::RegistryConfig;
use crate::version::registry::InstallerRegistry;
use crate::version::types::InstallerFamily;

/// Build the registry for `family`, honoring a configured base URL
pub fn for_family(family: InstallerFamily, config: &RegistryConfig) -> Arc<dyn InstallerRegistry> {
    match (family, config.base_url.as_deref()) {
        (InstallerFamily::Forge, Some(url)) => Arc::new(ForgeRegistry::new(url)),
        (InstallerFamily::Forge, None) => Arc::new(ForgeRegistry::default()),
        (InstallerFamily::Fabric, Some(url)) => Arc::new(FabricRegistry::new(url)),
        (InstallerFamily::Fabric, None) => Arc::new(FabricRegistry::default()),
    }
}
