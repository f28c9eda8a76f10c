//! Spinner configuration: defaults, fallbacks, and TOML loading.
//!
//! A [`SpinnerConfig`] is immutable once handed to a
//! [`SpinnerSet`](crate::SpinnerSet). Empty colors and a zero frequency are
//! never used as-is; [`SpinnerConfig::normalized`] swaps them for the
//! defaults (green, red, 100ms).

use crate::error::ConfigError;
use crossterm::Command;
use crossterm::style::{Color, SetForegroundColor};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Green foreground.
pub const DEFAULT_SUCCESS_COLOR: &str = "\x1b[32m";
/// Red foreground.
pub const DEFAULT_FAILURE_COLOR: &str = "\x1b[31m";
/// Time between animation frames.
pub const DEFAULT_FREQUENCY: Duration = Duration::from_millis(100);

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "MULTISPIN_CONFIG";

/// Runtime configuration for a [`SpinnerSet`](crate::SpinnerSet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerConfig {
    /// Escape sequence written before the success marker.
    pub success_color: String,
    /// Escape sequence written before the failure marker.
    pub failure_color: String,
    /// Delay between two animation frames.
    pub frequency: Duration,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            success_color: DEFAULT_SUCCESS_COLOR.to_string(),
            failure_color: DEFAULT_FAILURE_COLOR.to_string(),
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl SpinnerConfig {
    pub fn with_success_color(mut self, color: impl Into<String>) -> Self {
        self.success_color = color.into();
        self
    }

    pub fn with_failure_color(mut self, color: impl Into<String>) -> Self {
        self.failure_color = color.into();
        self
    }

    pub fn with_frequency(mut self, frequency: Duration) -> Self {
        self.frequency = frequency;
        self
    }

    /// Replace empty or zero fields with their defaults.
    pub fn normalized(mut self) -> Self {
        if self.success_color.is_empty() {
            self.success_color = DEFAULT_SUCCESS_COLOR.to_string();
        }
        if self.failure_color.is_empty() {
            self.failure_color = DEFAULT_FAILURE_COLOR.to_string();
        }
        if self.frequency.is_zero() {
            self.frequency = DEFAULT_FREQUENCY;
        }
        self
    }

    /// Load a config file on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        ConfigFile::load(path)?.apply(Self::default())
    }

    /// Load the discovered config file, or the defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading spinner config from {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// On-disk representation. Every field is optional.
///
/// ```toml
/// success_color = "green"      # crossterm color name
/// failure_color = "\u001b[31m" # or a raw escape sequence
/// frequency_ms = 80
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_ms: Option<u64>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay the fields that are present onto `base`.
    pub fn apply(&self, mut base: SpinnerConfig) -> Result<SpinnerConfig, ConfigError> {
        if let Some(color) = &self.success_color {
            base.success_color = resolve_color(color)?;
        }
        if let Some(color) = &self.failure_color {
            base.failure_color = resolve_color(color)?;
        }
        if let Some(ms) = self.frequency_ms {
            base.frequency = Duration::from_millis(ms);
        }
        Ok(base)
    }

    pub fn from_config(config: &SpinnerConfig) -> Self {
        Self {
            success_color: Some(config.success_color.clone()),
            failure_color: Some(config.failure_color.clone()),
            frequency_ms: Some(u64::try_from(config.frequency.as_millis()).unwrap_or(u64::MAX)),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Turn a color setting into the escape sequence written to the terminal.
///
/// Raw escape sequences (and the empty string, which later falls back to the
/// default) pass through untouched. Anything else must be a crossterm color
/// name such as `green` or `dark_yellow`.
pub fn resolve_color(value: &str) -> Result<String, ConfigError> {
    if value.is_empty() || value.starts_with('\x1b') {
        return Ok(value.to_string());
    }

    let color =
        Color::try_from(value).map_err(|()| ConfigError::InvalidColor(value.to_string()))?;
    let mut ansi = String::new();
    SetForegroundColor(color)
        .write_ansi(&mut ansi)
        .map_err(|_| ConfigError::InvalidColor(value.to_string()))?;
    Ok(ansi)
}

/// Path of the config file: `$MULTISPIN_CONFIG`, else
/// `<config dir>/multispin/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_path_from(std::env::var_os(CONFIG_ENV))
}

fn config_path_from(override_path: Option<OsString>) -> Option<PathBuf> {
    override_path
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("multispin").join("config.toml")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SpinnerConfig::default();
        assert_eq!(config.success_color, "\x1b[32m");
        assert_eq!(config.failure_color, "\x1b[31m");
        assert_eq!(config.frequency, Duration::from_millis(100));
    }

    #[test]
    fn test_normalized_falls_back_on_empty_fields() {
        let config = SpinnerConfig {
            success_color: String::new(),
            failure_color: String::new(),
            frequency: Duration::ZERO,
        }
        .normalized();
        assert_eq!(config, SpinnerConfig::default());
    }

    #[test]
    fn test_normalized_keeps_explicit_fields() {
        let config = SpinnerConfig::default()
            .with_success_color("\x1b[34m")
            .with_frequency(Duration::from_millis(20))
            .normalized();
        assert_eq!(config.success_color, "\x1b[34m");
        assert_eq!(config.failure_color, DEFAULT_FAILURE_COLOR);
        assert_eq!(config.frequency, Duration::from_millis(20));
    }

    #[test]
    fn test_resolve_color() {
        assert_eq!(resolve_color("\x1b[35m").unwrap(), "\x1b[35m");
        assert_eq!(resolve_color("").unwrap(), "");

        let green = resolve_color("green").unwrap();
        assert!(green.starts_with("\x1b[") && green.ends_with('m'));
        assert_ne!(green, resolve_color("red").unwrap());

        let err = resolve_color("not-a-color").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(name) if name == "not-a-color"));
    }

    #[test]
    fn test_parse_and_apply() {
        let file = ConfigFile::parse("frequency_ms = 250\nfailure_color = \"\\u001b[33m\"\n")
            .unwrap();
        assert_eq!(file.frequency_ms, Some(250));
        assert!(file.success_color.is_none());

        let config = file.apply(SpinnerConfig::default()).unwrap();
        assert_eq!(config.frequency, Duration::from_millis(250));
        assert_eq!(config.failure_color, "\x1b[33m");
        assert_eq!(config.success_color, DEFAULT_SUCCESS_COLOR);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ConfigFile::parse("colour = \"green\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "success_color = \"blue\"\n").unwrap();

        let config = SpinnerConfig::from_file(&path).unwrap();
        assert_eq!(config.success_color, resolve_color("blue").unwrap());
        assert_eq!(config.frequency, DEFAULT_FREQUENCY);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = SpinnerConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_config_file_round_trip() {
        let config = SpinnerConfig::default().with_frequency(Duration::from_millis(40));
        let rendered = ConfigFile::from_config(&config).to_toml_string().unwrap();
        assert!(rendered.contains("frequency_ms = 40"));

        let parsed = ConfigFile::parse(&rendered).unwrap();
        assert_eq!(parsed.apply(SpinnerConfig::default()).unwrap(), config);
    }

    #[test]
    fn test_config_path_override() {
        let path = config_path_from(Some(OsString::from("/tmp/spin.toml")));
        assert_eq!(path, Some(PathBuf::from("/tmp/spin.toml")));

        let fallback = config_path_from(Some(OsString::new()));
        if let Some(path) = fallback {
            assert!(path.ends_with("multispin/config.toml"));
        }
    }
}
