//! Command implementations for the scorecard dashboard CLI.
//!
//! Provides the HTTP server with its UI event handlers, and a summary
//! subcommand for inspecting a scorecard file from the terminal.

use clap::Subcommand;
use std::path::PathBuf;

pub mod context;
pub mod events;
pub mod server;
pub mod summary;

/// Scorecard file used when `--data` is not given.
pub const DEFAULT_DATA_PATH: &str = "fixtures/scorecards.csv";

#[derive(Subcommand)]
pub enum Command {
    /// Serve the dashboard over HTTP
    Serve {
        /// Scorecard CSV file (optionally .gz compressed)
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short = 'p', long, default_value_t = 8050)]
        port: u16,
    },

    /// Print record counts and per-year status counts
    Summary {
        /// Scorecard CSV file (optionally .gz compressed)
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Limit the counts to one scorecard
        #[arg(short = 's', long)]
        scorecard: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve { data, host, port } => server::serve(&data, &host, port).await,
        Command::Summary { data, scorecard } => {
            summary::run_summary(&data, scorecard.as_deref())
        }
    }
}
