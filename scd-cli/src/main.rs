//! scd-cli - Scorecard dashboard server and data summary tool.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "scd-cli",
    version,
    about = "Scorecard IMS status dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: scd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    scd_cmd::run(cli.command).await.inspect_err(|e| {
        log::error!("{:#}", e);
    })
}
