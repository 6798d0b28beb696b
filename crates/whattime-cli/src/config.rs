//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/whattime/config.toml` by default:
//!
//! ```toml
//! home_zone = "America/New_York"
//! zones = ["America/New_York", "Europe/Paris"]
//!
//! [display]
//! style = "cute"
//! time_format = "h24"
//! date_order = "day_month"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use whattime_core::{DateOrder, DisplayStyle, FormatOptions, TimeFormat};

/// Configuration for the whattime CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Debug mode.
    pub debug: bool,

    /// Home zone (IANA id); UTC when unset. Drives the pick-list ordering.
    pub home_zone: Option<String>,

    /// Zones rendered when no `--zone` flag is given.
    #[serde(default)]
    pub zones: Vec<String>,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Display settings for message formatting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Default message style.
    pub style: DisplayStyle,

    /// Clock rendering preference.
    pub time_format: TimeFormat,

    /// Month/day order in day labels.
    pub date_order: DateOrder,
}

impl DisplaySettings {
    /// Converts to formatter options.
    pub fn options(&self) -> FormatOptions {
        FormatOptions {
            time_format: self.time_format,
            date_order: self.date_order,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config: {}", e))?;
            toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("whattime")
    }
}
