// CLI module - Command line interface and argument parsing
// Licensed under GPL-3.0

use crate::config::AppConfig;
use crate::db::DatabaseConfig;
use clap::Parser;
use std::path::PathBuf;

mod database_args;
mod server_args;

pub use database_args::DatabaseArgs;
pub use server_args::ServerArgs;

/// CipherDir - Directory of TLS cipher suites and the RFCs defining them
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "cipherdir")]
#[command(author, version, about = "Directory of TLS cipher suites and RFCs", long_about = None)]
pub struct Args {
    /// Configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generate example configuration file and exit
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl Args {
    /// Load the configuration file, if any, and apply command line overrides
    pub fn load_config(&self) -> crate::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Apply command line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(host) = &self.server.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.server.port {
            config.server.port = port;
        }
        if self.server.no_openapi {
            config.server.enable_openapi = false;
        }

        if let Some(path) = &self.database.path {
            // Pointing at a file always means SQLite
            let migrations_dir = config.database.migrations_dir.take();
            config.database = DatabaseConfig::sqlite(path.clone());
            config.database.migrations_dir = migrations_dir;
        }
        if let Some(dir) = &self.database.migrations_dir {
            config.database.migrations_dir = Some(dir.clone());
        }
    }
}
