// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use rooster_core::{APP_NAME, Rooster};
use tracing_subscriber::EnvFilter;

use crate::config::parse_config;
use crate::format::write_values;

/// Run the rooster command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
    Ok(())
}

/// Command-line interface
#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(about = "Watch a school timetable feed and derive per-day facts", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Refresh once and print every derived value
    Show,

    /// Keep refreshing on an interval, printing the values after each cycle
    Watch {
        /// Seconds between refreshes
        #[arg(short, long, default_value_t = 300)]
        interval: u64,
    },
}

impl Cli {
    async fn run(self) -> Result<(), Box<dyn Error>> {
        let config = parse_config(self.config).await?;
        let mut rooster = Rooster::new(config)?;

        match self.command.unwrap_or(Commands::Show) {
            Commands::Show => {
                rooster.refresh().await?;
                write_values(&mut io::stdout(), &rooster)?;
            }
            Commands::Watch { interval } => {
                let interval = Duration::from_secs(interval);
                loop {
                    // A failed refresh keeps the previous values on screen.
                    if let Err(e) = rooster.refresh().await {
                        tracing::warn!(error = %e, "refresh failed, keeping last values");
                    }
                    write_values(&mut io::stdout(), &rooster)?;
                    tokio::time::sleep(interval).await;
                }
            }
        }

        Ok(())
    }
}
