// CipherDir - A directory of TLS cipher suites and the RFCs that define them
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use anyhow::{Context, Result};
use cipherdir::api::ApiServer;
use cipherdir::db::DirectoryDatabase;
use cipherdir::{AppConfig, Args};
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // Parse command line arguments
    let args = Args::parse();

    // Handle --config-example (generate config example and exit)
    if let Some(config_path) = &args.config_example {
        AppConfig::create_example(config_path)?;
        println!(
            "{} Example configuration saved to: {}",
            "✓".green(),
            config_path.display()
        );
        return Ok(());
    }

    let config = args.load_config().context("Failed to load configuration")?;

    info!("Opening {:?} database", config.database.db_type);
    let db = DirectoryDatabase::new(&config.database)
        .await
        .context("Failed to open database")?;

    // Handle --db-init (migrations have just been applied)
    if args.database.init {
        println!("{} Database initialized successfully", "✓".green());
        db.close().await;
        return Ok(());
    }

    println!(
        "{} {} on {}",
        "CipherDir".bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed(),
        config.server.bind_address().cyan()
    );

    let server = ApiServer::new(config.server, Arc::new(db));
    server.run().await?;

    Ok(())
}
