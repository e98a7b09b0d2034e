//! Configuration management.
//!
//! Run inputs resolve in precedence order: command-line flag, environment
//! variable, config file, interactive prompt. The config file lives at
//! `~/.config/fmghist/config.toml` and never stores the password.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable names, kept compatible with the original tooling.
pub mod env_keys {
    pub const HOST: &str = "FMG_IP";
    pub const USERNAME: &str = "FMG_USER";
    pub const PASSWORD: &str = "FMG_PASS";
    pub const ADOM: &str = "FMG_ADOM";
    pub const PLATFORM: &str = "FMG_PLATFORM";
    pub const SCRIPT: &str = "FMG_SCRIPT";
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Controller connection defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// FortiManager IP/FQDN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Login username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Default ADOM for device enumeration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adom: Option<String>,
    /// Default platform filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Default script name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Accept invalid/self-signed TLS certificates (opt-in)
    #[serde(default)]
    pub allow_invalid_certs: bool,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            host: None,
            username: None,
            adom: None,
            platform: None,
            script: None,
            timeout_secs: default_timeout_secs(),
            allow_invalid_certs: false,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/fmghist/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the config directory path (~/.config/fmghist)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("fmghist"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Save configuration to file, creating the directory if needed
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;

        let config_path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }
}

/// Flag value, else environment value, else config-file value.
///
/// Empty strings count as unset at every level, so an exported-but-blank
/// variable does not shadow the config file.
pub fn resolve_input(
    flag: Option<String>,
    env_value: Option<String>,
    file_value: Option<&str>,
) -> Option<String> {
    non_empty(flag)
        .or_else(|| non_empty(env_value))
        .or_else(|| non_empty(file_value.map(str::to_string)))
}

/// Read an environment variable, treating empty values as unset.
pub fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
