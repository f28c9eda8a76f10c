use crate::cli::ConfigOverrides;
use anyhow::{Context, Result};
use multispin::ConfigFile;
use multispin::config::config_path;
use std::path::Path;

/// Print the configuration a `demo` run would use, or where it is read from.
pub(crate) fn config(path: Option<&Path>, show_path: bool, overrides: &ConfigOverrides) -> Result<()> {
    if show_path {
        match path.map(Path::to_path_buf).or_else(config_path) {
            Some(path) => println!("{}", path.display()),
            None => println!("(no config location)"),
        }
        return Ok(());
    }

    let config = super::resolve_config(path, overrides)?;
    let rendered = ConfigFile::from_config(&config)
        .to_toml_string()
        .context("Failed to render config")?;
    print!("{rendered}");
    Ok(())
}
