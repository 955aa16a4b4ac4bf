//! Startup shared by every command that needs the catalog.

use std::path::PathBuf;

use crate::catalog::{load_catalog_file, resolve_config_path, Catalog};
use crate::cli::args::Cli;
use crate::error::Result;
use crate::host::{probe, HostEnvironment};
use crate::runner::{InstallPolicy, RunOptions};

/// Global flags, detached from clap.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit catalog path.
    pub config: Option<PathBuf>,
    /// Linux package manager override.
    pub package_manager: Option<String>,
    pub run: RunOptions,
}

impl GlobalOptions {
    /// Collect the global flags from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            package_manager: cli.package_manager.clone(),
            run: RunOptions {
                policy: if cli.lenient {
                    InstallPolicy::Lenient
                } else {
                    InstallPolicy::Strict
                },
                allow_unsafe_names: cli.allow_unsafe_names,
            },
        }
    }

    /// Probe the host, then find and load the catalog.
    ///
    /// Every error from here is fatal to the command.
    pub fn load(&self) -> Result<LoadedCatalog> {
        let host = probe(self.package_manager.as_deref())?;
        tracing::debug!("Host: {}", host.describe());

        let path = resolve_config_path(self.config.as_deref())?;
        let catalog = load_catalog_file(&path, &host)?;

        Ok(LoadedCatalog {
            host,
            path,
            catalog,
        })
    }
}

/// A catalog together with where and for which host it was loaded.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub host: HostEnvironment,
    pub path: PathBuf,
    pub catalog: Catalog,
}
