use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{check, serve};

#[derive(Parser)]
#[command(name = "wardboard")]
#[command(about = "Hospital Data Insights dashboard server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard web server
    ///
    /// Source paths and the bind address come from the environment
    /// (VISITS_CSV, FORECAST_CSV, BIND_ADDRESS) with the conventional
    /// data/ defaults.
    Serve,
    /// Load both source CSV files, report row counts, and exit
    ///
    /// Exercises the same load path the server runs at startup, so a
    /// broken file is caught before deploying.
    Check {
        /// Path to the patient visit CSV
        #[arg(long, env = "VISITS_CSV", default_value = "data/full_data.csv")]
        visits: PathBuf,
        /// Path to the forecast CSV
        #[arg(long, env = "FORECAST_CSV", default_value = "data/forecast.csv")]
        forecast: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve => {
                serve::serve().await?;
            }
            Commands::Check { visits, forecast } => {
                check::check(&visits, &forecast)?;
            }
        }
        Ok(())
    }
}
