//! Installer version list abstraction
//!
//! An [`InstallerVersionList`] owns a cache of installers keyed by platform
//! version and knows how to refresh it. Callers never read that cache
//! directly: [`InstallerVersions::get_versions`] always hands out a fresh
//! copy, and [`spawn_refresh`] runs the refresh without blocking.

use std::collections::HashSet;
use std::sync::Arc;

use crate::version::error::RefreshError;
use crate::version::task::RefreshTask;
use crate::version::types::InstallerVersion;

/// Capability implemented by every installer family
///
/// # Storage contract
///
/// Implementations share their cache between [`refresh`](Self::refresh) and
/// [`versions_impl`](Self::versions_impl), possibly on different threads.
/// They must never expose a partially written list: build the new list
/// first, then replace the old one in a single step (see
/// [`VersionCache`](crate::version::cache::VersionCache)). A failed refresh
/// must leave the existing data in place.
#[async_trait::async_trait]
pub trait InstallerVersionList: Send + Sync {
    /// Label of the installer family (e.g. "Forge")
    fn name(&self) -> &str;

    /// Fetch installers for the given platform versions and update the cache
    ///
    /// Use [`spawn_refresh`] to run this in the background.
    async fn refresh(&self, platform_versions: &HashSet<String>) -> Result<(), RefreshError>;

    /// Raw cache lookup
    ///
    /// Returns `None` when nothing is known about `platform_version` and
    /// `Some` (possibly empty) once a refresh has covered it. The returned
    /// list may be the live shared one; callers go through
    /// [`InstallerVersions::get_versions`] instead.
    fn versions_impl(&self, platform_version: &str) -> Option<Arc<Vec<InstallerVersion>>>;
}

/// Caller-facing read access, available on every [`InstallerVersionList`]
pub trait InstallerVersions {
    /// Installers for `platform_version`, newest first
    ///
    /// The result is a new `Vec` owned by the caller: changing it does not
    /// touch the cache, and later refreshes do not change it.
    fn get_versions(&self, platform_version: &str) -> Option<Vec<InstallerVersion>>;
}

impl<L: InstallerVersionList + ?Sized> InstallerVersions for L {
    fn get_versions(&self, platform_version: &str) -> Option<Vec<InstallerVersion>> {
        self.versions_impl(platform_version).map(|v| v.to_vec())
    }
}

/// Start refreshing `list` on the tokio runtime and return immediately
///
/// Failures are reported only through the returned [`RefreshTask`].
/// Must be called from within a tokio runtime.
pub fn spawn_refresh<L>(list: Arc<L>, platform_versions: HashSet<String>) -> RefreshTask
where
    L: InstallerVersionList + ?Sized + 'static,
{
    RefreshTask::new(tokio::spawn(async move {
        list.refresh(&platform_versions).await
    }))
}
