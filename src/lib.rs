//! Cached, newest-first lists of mod-loader installers per game version.

pub mod config;
pub mod logging;
pub mod version;
