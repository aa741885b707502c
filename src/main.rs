use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use tracing::info;

use installer_versions::config::{Config, log_path};
use installer_versions::logging;
use installer_versions::version::list::{InstallerVersionList, InstallerVersions, spawn_refresh};
use installer_versions::version::registries;
use installer_versions::version::remote::RemoteInstallerList;
use installer_versions::version::types::{InstallerFamily, InstallerVersion};

#[derive(Parser)]
#[command(name = "installer-versions")]
#[command(version, about = "List mod-loader installers available for game versions")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the log file as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Refresh a family and print its installers, newest first
    List {
        /// Installer family (forge, fabric)
        #[arg(value_parser = parse_family)]
        family: InstallerFamily,

        /// Game versions to look up
        #[arg(required = true)]
        platform_versions: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_family(s: &str) -> Result<InstallerFamily, String> {
    s.parse()
        .map_err(|_| format!("unknown installer family '{}' (expected forge or fabric)", s))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // File logging is optional; listing still works without it
    let _log_guard = match logging::init(&log_path(), cli.log_json) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {}", e);
            None
        }
    };

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    match cli.command {
        Command::List {
            family,
            platform_versions,
            json,
        } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(list(&config, family, platform_versions, json)),
    }
}

async fn list(
    config: &Config,
    family: InstallerFamily,
    platform_versions: Vec<String>,
    json: bool,
) -> anyhow::Result<()> {
    let registry_config = match family {
        InstallerFamily::Forge => &config.registries.forge,
        InstallerFamily::Fabric => &config.registries.fabric,
    };
    if !registry_config.enabled {
        bail!("{} registry is disabled in config", family.as_str());
    }

    let list = Arc::new(RemoteInstallerList::new(registries::for_family(
        family,
        registry_config,
    )));
    let requested: HashSet<String> = platform_versions.iter().cloned().collect();

    info!("Listing {} installers for {:?}", list.name(), platform_versions);
    spawn_refresh(list.clone(), requested)
        .await
        .with_context(|| format!("failed to refresh {} installers", list.name()))?;

    let mut results: IndexMap<String, Vec<InstallerVersion>> = IndexMap::new();
    for platform_version in platform_versions {
        let versions = list.get_versions(&platform_version).unwrap_or_default();
        results.insert(platform_version, versions);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (platform_version, versions) in &results {
        println!("{} for {}:", list.name(), platform_version);
        if versions.is_empty() {
            println!("  (none)");
        }
        for version in versions {
            let artifact = version
                .installer
                .as_deref()
                .or(version.universal.as_deref())
                .unwrap_or("-");
            println!("  {:<24} {}", version.self_version, artifact);
        }
    }

    Ok(())
}
