//! Subcommand implementations.

pub(crate) mod config;
pub(crate) mod demo;

use crate::cli::ConfigOverrides;
use anyhow::{Context, Result};
use multispin::{ConfigFile, SpinnerConfig};
use std::path::Path;

/// Defaults, then the config file, then command line flags.
pub(crate) fn resolve_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<SpinnerConfig> {
    let base = match path {
        Some(path) => SpinnerConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SpinnerConfig::load().context("Failed to load config")?,
    };

    let flags = ConfigFile {
        success_color: overrides.success_color.clone(),
        failure_color: overrides.failure_color.clone(),
        frequency_ms: overrides.frequency_ms,
    };
    Ok(flags.apply(base)?.normalized())
}
