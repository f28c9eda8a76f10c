//! Command line definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "multispin")]
#[command(author, version = env!("MULTISPIN_VERSION"), about = "multispin - concurrent tasks behind terminal spinners")]
pub(crate) struct Cli {
    /// Config file to use instead of $MULTISPIN_CONFIG or the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Run simulated tasks, one spinner each
    Demo(DemoArgs),
    /// Print the resolved configuration as TOML
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}

#[derive(Debug, Args)]
pub(crate) struct DemoArgs {
    /// Number of tasks to run
    #[arg(long, default_value_t = 3)]
    pub(crate) tasks: usize,

    /// Zero-based index of a task that fails (repeatable)
    #[arg(long, value_name = "INDEX", default_values_t = [2])]
    pub(crate) fail: Vec<usize>,

    /// Let every task succeed
    #[arg(long, conflicts_with = "fail")]
    pub(crate) all_succeed: bool,

    /// Shortest task duration in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub(crate) min_ms: u64,

    /// Longest task duration in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub(crate) max_ms: u64,

    #[command(flatten)]
    pub(crate) overrides: ConfigOverrides,
}

/// Flags that take precedence over the config file.
#[derive(Debug, Default, Args)]
pub(crate) struct ConfigOverrides {
    /// Milliseconds between animation frames
    #[arg(long, value_name = "MS")]
    pub(crate) frequency_ms: Option<u64>,

    /// Success marker color: a color name or a raw escape sequence
    #[arg(long, value_name = "COLOR")]
    pub(crate) success_color: Option<String>,

    /// Failure marker color: a color name or a raw escape sequence
    #[arg(long, value_name = "COLOR")]
    pub(crate) failure_color: Option<String>,
}
