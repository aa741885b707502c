//! Installer version lists
//!
//! This module provides the core functionality for fetching, caching, and ordering
//! installer versions (Forge, Fabric) per game version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│ RemoteList  │────▶│    Cache    │
//! │  (fetch)    │     │  (refresh)  │     │  (storage)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                   │
//!        ▼                   ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │ List / Task │     │   Compare   │
//! │forge, fabric│     │(copy, spawn)│     │(version cmp)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: In-memory cache with whole-list replacement
//! - [`compare`]: Dotted version ordering and the newest-first comparator
//! - [`error`]: Error types for cache, registry and refresh operations
//! - [`list`]: `InstallerVersionList` trait, copying accessor and background refresh
//! - [`registry`]: Registry trait for fetching installers from remote sources
//! - [`registries`]: Concrete registry implementations (Forge, Fabric)
//! - [`remote`]: Registry-backed list implementation
//! - [`task`]: Handle for a refresh running in the background
//! - [`types`]: `InstallerVersion` and `InstallerFamily`

pub mod cache;
pub mod compare;
pub mod error;
pub mod list;
pub mod registries;
pub mod registry;
pub mod remote;
pub mod task;
pub mod types;
