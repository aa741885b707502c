//! Error types for cache, registry and refresh operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("Refresh was cancelled")]
    Cancelled,

    #[error("Refresh task panicked: {0}")]
    Panicked(String),
}
