use clap::Parser;
use loadplan_core::LOADPLAN_LOG_VAR;
use tracing_subscriber::EnvFilter;

mod commands;
mod execute;

use commands::Commands;

#[derive(Parser)]
#[command(name = "loadplan")]
#[command(about = "Design, scale, and chart load-test plans", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOADPLAN_LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute()?;
    Ok(())
}
