//! Tracing subscriber setup for the binary

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `installer_versions=trace`)
pub const LOG_ENV: &str = "INSTALLER_VERSIONS_LOG";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Build the filter from [`LOG_ENV`], falling back to `info`
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref())
}

/// Unset or unparsable directives fall back to [`DEFAULT_FILTER`]
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber writing to `log_path`
///
/// Keep the returned guard alive for the lifetime of the program; dropping it
/// flushes and stops the background writer.
pub fn init(log_path: &Path, json: bool) -> Result<WorkerGuard, LoggingError> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let file_name = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "installer-versions.log".into());
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case(None, "info")]
    #[case(Some("installer_versions=loud"), "info")]
    #[case(Some("debug"), "debug")]
    fn filter_from_falls_back_to_info(#[case] directives: Option<&str>, #[case] expected: &str) {
        assert_eq!(filter_from(directives).to_string(), expected);
    }

    #[test]
    fn init_reports_unwritable_log_directory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let result = init(&blocker.join("logs").join("installer-versions.log"), false);

        assert!(matches!(result, Err(LoggingError::Io(_))));
    }
}
