//! multispin - run concurrent tasks behind terminal spinners

mod cli;
mod cmd;
mod interrupt;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so they never land between spinner rows.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Demo(args) => {
            let config = cmd::resolve_config(config_path, &args.overrides)?;
            cmd::demo::demo(config, &args)
        }
        Commands::Config { path, overrides } => cmd::config::config(config_path, path, &overrides),
    }
}
