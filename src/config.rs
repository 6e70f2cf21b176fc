//! Persistent settings stored as JSON in the platform config directory.
//!
//! `~/.config/flagkit/config.json` on Linux. A missing file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{FlagError, Result};

/// CDN serving `<code>.svg` files.
pub const DEFAULT_CDN_BASE_URL: &str =
    "https://cdn.jsdelivr.net/npm/@alimcosoft/flexy-flag@latest/src/assets/flags";

const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;

/// Where real flag artwork comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// SVGs compiled into the binary.
    #[default]
    Embedded,
    /// SVGs fetched over HTTP from `cdn_base_url`.
    Cdn,
}

/// Log verbosity, mirrored onto the tracing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Raise verbosity by `steps` levels, saturating at `Trace`.
    pub fn raised(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = ORDER.iter().position(|l| *l == self).unwrap_or(1);
        ORDER[(current + steps as usize).min(ORDER.len() - 1)]
    }
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceKind,
    pub cdn_base_url: String,
    pub fetch_timeout_ms: u64,
    pub log_level: LogLevel,
    pub log_to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            log_level: LogLevel::default(),
            log_to_file: false,
        }
    }
}

impl Config {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// Location of the config file, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("flagkit").join("config.json"))
}

/// Load settings from the default location.
///
/// Never fails: a missing or unreadable file yields defaults.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        debug!("No config directory on this platform, using defaults");
        return Config::default();
    };

    if !path.exists() {
        debug!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
            Config::default()
        }
    }
}

/// Load settings from an explicit path. Errors are returned to the caller.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Write settings to the default location, creating the directory if needed.
pub fn save(config: &Config) -> Result<()> {
    let path = config_path()
        .ok_or_else(|| FlagError::Config("No config directory on this platform".into()))?;
    save_to(config, &path)
}

/// Write settings to an explicit path.
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    debug!(path = %path.display(), "Config saved");
    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    if config.fetch_timeout_ms == 0 {
        return Err(FlagError::Config("fetch_timeout_ms must be greater than zero".into()));
    }
    if config.source == SourceKind::Cdn && config.cdn_base_url.trim().is_empty() {
        return Err(FlagError::Config("cdn_base_url is required for the cdn source".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.source, SourceKind::Embedded);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(5));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "source": "cdn", "fetch_timeout_ms": 250 }"#).unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.source, SourceKind::Cdn);
        assert_eq!(config.fetch_timeout_ms, 250);
        assert_eq!(config.cdn_base_url, DEFAULT_CDN_BASE_URL);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            log_level: LogLevel::Debug,
            log_to_file: true,
            ..Config::default()
        };

        save_to(&config, &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), config);
    }

    #[test]
    fn rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        std::fs::write(&path, r#"{ "fetch_timeout_ms": 0 }"#).unwrap();
        assert!(matches!(load_from(&path), Err(FlagError::Config(_))));

        std::fs::write(&path, r#"{ "source": "ftp" }"#).unwrap();
        assert!(matches!(load_from(&path), Err(FlagError::Json(_))));
    }

    #[test]
    fn raised_saturates() {
        assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
        assert_eq!(LogLevel::Warn.raised(9), LogLevel::Trace);
    }
}
