//! Forge maven metadata implementation

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::{FETCH_TIMEOUT_MS, USER_AGENT};
use crate::version::error::RegistryError;
use crate::version::registry::InstallerRegistry;
use crate::version::types::{InstallerFamily, InstallerVersion};

/// Default base URL for the Forge maven
const DEFAULT_BASE_URL: &str = "https://maven.minecraftforge.net";

/// Maven path of the Forge artifact
const ARTIFACT_PATH: &str = "net/minecraftforge/forge";

/// Registry implementation for the Forge maven repository
///
/// A single `maven-metadata.json` lists every build for every game version,
/// e.g. `{"1.12.2": ["1.12.2-14.23.5.2847", ...]}`.
pub struct ForgeRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl ForgeRegistry {
    /// Creates a new ForgeRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Strip the game version from a full Forge id
    ///
    /// "1.12.2-14.23.5.2847" -> "14.23.5.2847"
    /// "1.7.10-10.13.4.1614-1.7.10" -> "10.13.4.1614"
    fn self_version<'a>(platform_version: &str, full_id: &'a str) -> &'a str {
        let version = full_id
            .strip_prefix(platform_version)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(full_id);

        version
            .strip_suffix(platform_version)
            .and_then(|rest| rest.strip_suffix('-'))
            .unwrap_or(version)
    }

    fn artifact_url(&self, full_id: &str, classifier: &str, extension: &str) -> String {
        format!(
            "{}/{}/{}/forge-{}-{}.{}",
            self.base_url, ARTIFACT_PATH, full_id, full_id, classifier, extension
        )
    }

    fn to_installer_version(&self, platform_version: &str, full_id: &str) -> InstallerVersion {
        InstallerVersion::new(Self::self_version(platform_version, full_id), platform_version)
            .with_installer(self.artifact_url(full_id, "installer", "jar"))
            .with_universal(self.artifact_url(full_id, "universal", "jar"))
            .with_changelog(self.artifact_url(full_id, "changelog", "txt"))
    }
}

impl Default for ForgeRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl InstallerRegistry for ForgeRegistry {
    fn family(&self) -> InstallerFamily {
        InstallerFamily::Forge
    }

    async fn fetch_installers(
        &self,
        platform_versions: &HashSet<String>,
    ) -> Result<HashMap<String, Vec<InstallerVersion>>, RegistryError> {
        let url = format!("{}/{}/maven-metadata.json", self.base_url, ARTIFACT_PATH);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(url));
        }

        if !status.is_success() {
            warn!("Forge maven returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let metadata: IndexMap<String, Vec<String>> = response.json().await.map_err(|e| {
            warn!("Failed to parse Forge maven metadata: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        debug!("Forge metadata lists {} game versions", metadata.len());

        let installers = metadata
            .into_iter()
            .filter(|(platform_version, _)| {
                platform_versions.is_empty() || platform_versions.contains(platform_version)
            })
            .map(|(platform_version, ids)| {
                let versions = ids
                    .iter()
                    .map(|id| self.to_installer_version(&platform_version, id))
                    .collect();
                (platform_version, versions)
            })
            .collect();

        Ok(installers)
    }
}
