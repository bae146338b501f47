// Database arguments
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Database location and maintenance
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// SQLite database file, overriding the configuration file
    #[arg(long = "db-path", value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Directory holding the postgres/ and sqlite/ migration folders
    #[arg(long = "migrations-dir", value_name = "DIR")]
    pub migrations_dir: Option<PathBuf>,

    /// Initialize database (create tables and run migrations), then exit
    #[arg(long = "db-init")]
    pub init: bool,
}
