//! Subcommands and the registry/config options they share.

pub mod attr;
pub mod complete;
pub mod tag;

use std::path::PathBuf;

use cartel_registre::Registry;
use clap::Args;
use serde::Serialize;

use crate::config::{load_config, CartelConfig};

/// Options locating the registry snapshot and the config file.
#[derive(Args, Debug, Default)]
pub struct ProjectArgs {
    /// Registry snapshot (JSON) to resolve against
    #[arg(short, long)]
    pub registry: Option<PathBuf>,

    /// Config file path (defaults to ./cartel.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// A loaded project: configuration plus registry.
pub struct Project {
    pub config: CartelConfig,
    pub registry: Registry,
}

impl ProjectArgs {
    /// Load config and registry, exiting with status 1 if the registry fails to load.
    pub fn open(&self) -> Project {
        let config = load_config(self.config.as_deref());
        let registry_path = config.registry_path(self.registry.as_deref());

        match Registry::load(&registry_path) {
            Ok(registry) => {
                tracing::info!("loaded registry {}", registry_path.display());
                Project { config, registry }
            }
            Err(e) => {
                eprintln!(
                    "\x1b[31mError:\x1b[0m Failed to load registry {}: {}",
                    registry_path.display(),
                    e
                );
                std::process::exit(1);
            }
        }
    }

    /// Print `value` as JSON on stdout.
    pub fn print<T: Serialize + ?Sized>(&self, value: &T) {
        let output = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        match output {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("\x1b[31mError:\x1b[0m Failed to serialize output: {}", e);
                std::process::exit(1);
            }
        }
    }
}
