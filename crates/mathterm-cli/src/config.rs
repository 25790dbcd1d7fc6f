//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `$MATHTERM_CONFIG` environment variable
//! 2. `~/.config/mathterm/config.toml`
//! 3. Built-in defaults (everything is optional)

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub player: PlayerConfig,
    pub timed: TimedConfig,
    pub history: HistoryConfig,
    pub card: CardConfig,
    pub share: ShareConfig,
}

/// Profile storage settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Data directory. Default: platform-specific data dir.
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Overrides the name taken from `$USER` / `$USERNAME`.
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TimedConfig {
    pub duration_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Sessions shown by `mathterm history`.
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub output: String,
}

/// Share server bind address.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub host: String,
    pub port: u16,
}

// --- Defaults ---

impl Default for TimedConfig {
    fn default() -> Self {
        Self { duration_secs: 60 }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { limit: 15 }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            output: "mathterm_status.svg".into(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
        }
    }
}

impl TimedConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs.max(1))
    }
}

impl Config {
    /// Player name: config override, then the login name, then "Guest".
    pub fn username(&self) -> String {
        self.player
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| std::env::var("USER").ok().filter(|n| !n.is_empty()))
            .or_else(|| std::env::var("USERNAME").ok().filter(|n| !n.is_empty()))
            .unwrap_or_else(|| "Guest".into())
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config() -> Result<Config> {
    let path = config_path();

    if let Some(p) = &path {
        if p.exists() {
            let content =
                std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            let config: Config =
                toml::from_str(&content).with_context(|| format!("parsing {}", p.display()))?;
            return Ok(config);
        }
    }

    Ok(Config::default())
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("MATHTERM_CONFIG") {
        return Some(PathBuf::from(p));
    }

    directories::BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("mathterm")
            .join("config.toml")
    })
}

/// Show the active config path (for `mathterm config`).
pub fn show_config_path() -> String {
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timed.duration_secs, 60);
        assert_eq!(config.history.limit, 15);
        assert_eq!(config.share.port, 5000);
        assert_eq!(config.card.output, "mathterm_status.svg");
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
[timed]
duration_secs = 30
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timed.duration(), Duration::from_secs(30));
        // Other fields should be defaults
        assert_eq!(config.history.limit, 15);
        assert!(config.store.path.is_none());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[store]
path = "/tmp/mathterm"

[player]
name = "ada"

[timed]
duration_secs = 90

[history]
limit = 5

[card]
output = "card.svg"

[share]
host = "0.0.0.0"
port = 8080
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.path.as_deref(), Some("/tmp/mathterm"));
        assert_eq!(config.username(), "ada");
        assert_eq!(config.history.limit, 5);
        assert_eq!(config.card.output, "card.svg");
        assert_eq!(config.share.host, "0.0.0.0");
        assert_eq!(config.share.port, 8080);
    }

    #[test]
    fn test_zero_duration_clamped() {
        let config: Config = toml::from_str("[timed]\nduration_secs = 0\n").unwrap();
        assert_eq!(config.timed.duration(), Duration::from_secs(1));
    }
}
