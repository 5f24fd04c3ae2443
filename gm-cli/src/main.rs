//! gm-cli - Command line tool for the Gapminder dashboard dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gm-cli",
    version,
    about = "Gapminder dataset toolkit: fetch, rank, export charts, replay sessions"
)]
struct Cli {
    #[command(subcommand)]
    command: gm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("gm-cli starting");
    gm_cmd::run(cli.command).await
}
