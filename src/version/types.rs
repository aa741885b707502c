//! Common types for installer lists

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::version::compare::compare_version;

/// Installer family a list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallerFamily {
    /// Minecraft Forge (maven.minecraftforge.net)
    Forge,
    /// Fabric loader (meta.fabricmc.net)
    Fabric,
}

impl InstallerFamily {
    /// Returns the string representation of the family
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallerFamily::Forge => "forge",
            InstallerFamily::Fabric => "fabric",
        }
    }

    /// Human readable label, used as the list name
    pub fn display_name(&self) -> &'static str {
        match self {
            InstallerFamily::Forge => "Forge",
            InstallerFamily::Fabric => "Fabric",
        }
    }
}

impl std::str::FromStr for InstallerFamily {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forge" => Ok(InstallerFamily::Forge),
            "fabric" => Ok(InstallerFamily::Fabric),
            _ => Err(()),
        }
    }
}

/// One installable artifact of an installer family
///
/// Identity is `self_version` only: two entries with the same self version
/// are equal even if they point at different platform versions or
/// artifacts. Ordering is ascending by [`compare_version`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerVersion {
    pub self_version: String,
    pub platform_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
}

impl InstallerVersion {
    pub fn new(self_version: impl Into<String>, platform_version: impl Into<String>) -> Self {
        Self {
            self_version: self_version.into(),
            platform_version: platform_version.into(),
            installer: None,
            universal: None,
            changelog: None,
        }
    }

    pub fn with_installer(mut self, url: impl Into<String>) -> Self {
        self.installer = Some(url.into());
        self
    }

    pub fn with_universal(mut self, url: impl Into<String>) -> Self {
        self.universal = Some(url.into());
        self
    }

    pub fn with_changelog(mut self, changelog: impl Into<String>) -> Self {
        self.changelog = Some(changelog.into());
        self
    }
}

impl PartialEq for InstallerVersion {
    fn eq(&self, other: &Self) -> bool {
        self.self_version == other.self_version
    }
}

impl Eq for InstallerVersion {}

impl Hash for InstallerVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.self_version.hash(state);
    }
}

impl PartialOrd for InstallerVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InstallerVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_version(&self.self_version, &other.self_version)
    }
}
