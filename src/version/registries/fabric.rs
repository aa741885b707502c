//! Fabric meta API implementation

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use futures::future::join_all;
use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::{FETCH_STAGGER_DELAY_MS, FETCH_TIMEOUT_MS, USER_AGENT};
use crate::version::error::RegistryError;
use crate::version::registry::InstallerRegistry;
use crate::version::types::{InstallerFamily, InstallerVersion};

/// Default base URL for Fabric meta
const DEFAULT_BASE_URL: &str = "https://meta.fabricmc.net";

/// Maven hosting the loader jars
const FABRIC_MAVEN: &str = "https://maven.fabricmc.net";

/// Element of `/v2/versions/loader/{game_version}`
#[derive(Debug, Deserialize)]
struct LoaderEntry {
    loader: LoaderInfo,
}

#[derive(Debug, Deserialize)]
struct LoaderInfo {
    version: String,
}

/// Registry implementation for the Fabric meta API
///
/// Fabric serves one listing per game version, so each requested platform
/// version costs one request.
pub struct FabricRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl FabricRegistry {
    /// Creates a new FabricRegistry with a custom base URL
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

    fn loader_url(loader_version: &str) -> String {
        format!(
            "{}/net/fabricmc/fabric-loader/{}/fabric-loader-{}.jar",
            FABRIC_MAVEN, loader_version, loader_version
        )
    }

    /// Escape a game version for use as a single URL path segment
    ///
    /// Snapshot names such as "1.14 Pre-Release 1" contain spaces, and a
    /// `/` would otherwise split the segment.
    fn encode_platform_version(platform_version: &str) -> String {
        platform_version
            .replace('%', "%25")
            .replace('/', "%2F")
            .replace(' ', "%20")
            .replace('?', "%3F")
            .replace('#', "%23")
    }

    async fn fetch_loaders(
        &self,
        platform_version: &str,
    ) -> Result<Vec<InstallerVersion>, RegistryError> {
        let url = format!(
            "{}/v2/versions/loader/{}",
            self.base_url,
            Self::encode_platform_version(platform_version)
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        // Unknown game versions are answered with 400 rather than 404
        if matches!(
            status,
            reqwest::StatusCode::NOT_FOUND | reqwest::StatusCode::BAD_REQUEST
        ) {
            debug!("Fabric has no loaders for {}", platform_version);
            return Ok(Vec::new());
        }

        if !status.is_success() {
            warn!("Fabric meta returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let entries: Vec<LoaderEntry> = response.json().await.map_err(|e| {
            warn!("Failed to parse Fabric meta response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(entries
            .into_iter()
            .map(|entry| {
                InstallerVersion::new(entry.loader.version.as_str(), platform_version)
                    .with_universal(Self::loader_url(&entry.loader.version))
            })
            .collect())
    }
}

impl Default for FabricRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl InstallerRegistry for FabricRegistry {
    fn family(&self) -> InstallerFamily {
        InstallerFamily::Fabric
    }

    async fn fetch_installers(
        &self,
        platform_versions: &HashSet<String>,
    ) -> Result<HashMap<String, Vec<InstallerVersion>>, RegistryError> {
        let futures = platform_versions.iter().enumerate().map(|(i, platform_version)| {
            let delay = Duration::from_millis(FETCH_STAGGER_DELAY_MS * i as u64);
            async move {
                sleep(delay).await;
                let versions = self.fetch_loaders(platform_version).await?;
                Ok::<_, RegistryError>((platform_version.clone(), versions))
            }
        });

        join_all(futures).await.into_iter().collect()
    }
}
