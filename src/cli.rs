use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{inspect, serve};

#[derive(Parser)]
#[command(name = "predash")]
#[command(about = "Stock prediction dashboard API server and CLI tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Base location of the prediction documents
        ///
        /// Either an http(s) URL or a filesystem directory containing
        /// future.json and optionally future_summary.json.
        ///
        /// Examples:
        ///   https://example.com/predictions
        ///   ./data
        #[arg(short, long, env = "PREDASH_DATA_BASE", default_value = "./data")]
        data_base: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Load the prediction documents once and print a market summary
    ///
    /// Useful for checking a data drop before pointing the server at it.
    Inspect {
        /// Base location of the prediction documents
        #[arg(short, long, env = "PREDASH_DATA_BASE", default_value = "./data")]
        data_base: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                data_base,
                bind_address,
            } => {
                serve(&data_base, &bind_address).await?;
            }
            Commands::Inspect { data_base } => {
                inspect(&data_base).await?;
            }
        }
        Ok(())
    }
}
