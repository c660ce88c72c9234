//! Configuration for the stackgen host.
//!
//! The configuration follows XDG Base Directory Specification and supports:
//! - User config: `~/.config/stackgen/config.yaml`
//! - Project config: `.stackgen.yaml` in current directory
//! - Environment variables: `STACKGEN_*`
//! - Command-line flags (highest precedence)
//!
//! Library types never read these sources themselves; the host resolves a
//! [`Config`] and passes explicit values down.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::detect::{DEFAULT_GEOIP_URL, DEFAULT_TIMEOUT};
use crate::error::{Error, Result};
use crate::i18n::Locale;

/// Environment variable overriding the initial locale.
pub const ENV_LOCALE: &str = "STACKGEN_LOCALE";
/// Environment variable enabling or disabling locale detection.
pub const ENV_DETECT: &str = "STACKGEN_DETECT";
/// Environment variable overriding the geolocation endpoint.
pub const ENV_GEOIP_URL: &str = "STACKGEN_GEOIP_URL";
/// Environment variable overriding the geolocation timeout, in seconds.
pub const ENV_GEOIP_TIMEOUT: &str = "STACKGEN_GEOIP_TIMEOUT_SECS";

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Locale active before detection runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    /// Whether to detect the locale from the caller's IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detect: Option<bool>,

    /// Geolocation service settings.
    #[serde(default)]
    pub geoip: GeoIpConfig,
}

/// Geolocation service settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GeoIpConfig {
    /// Endpoint returning a JSON body with a `country_code` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl GeoIpConfig {
    /// The configured endpoint, or ipapi.co.
    pub fn url(&self) -> Result<Url> {
        let raw = self.url.as_deref().unwrap_or(DEFAULT_GEOIP_URL);
        let url = Url::parse(raw)
            .map_err(|e| Error::config(format!("Invalid geoip url '{raw}': {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::config(format!("Unsupported geoip url scheme '{scheme}'"))),
        }
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout_secs.map_or(DEFAULT_TIMEOUT, Duration::from_secs)
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Resolution order (highest to lowest):
    /// 1. CLI flags (handled separately)
    /// 2. Environment variables
    /// 3. Project config (`.stackgen.yaml`)
    /// 4. User config (`~/.config/stackgen/config.yaml`)
    /// 5. Defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Load user config first (lowest precedence)
        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            let user_config = Self::load_from_file(&path)?;
            config.merge(user_config);
        }

        // Load project config (higher precedence)
        let project_path = PathBuf::from(".stackgen.yaml");
        if project_path.exists() {
            let project_config = Self::load_from_file(&project_path)?;
            config.merge(project_config);
        }

        config.apply_overrides(|name| std::env::var(name).ok())?;

        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Merge another config into this one (other takes precedence).
    fn merge(&mut self, other: Self) {
        if other.locale.is_some() {
            self.locale = other.locale;
        }

        if other.detect.is_some() {
            self.detect = other.detect;
        }

        if other.geoip.url.is_some() {
            self.geoip.url = other.geoip.url;
        }

        if other.geoip.timeout_secs.is_some() {
            self.geoip.timeout_secs = other.geoip.timeout_secs;
        }
    }

    /// Apply `STACKGEN_*` overrides read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(locale) = var(ENV_LOCALE) {
            self.locale = Some(
                locale.parse().map_err(|e| Error::config(format!("{ENV_LOCALE}: {e}")))?,
            );
        }

        if let Some(detect) = var(ENV_DETECT) {
            self.detect = Some(parse_bool(&detect).ok_or_else(|| {
                Error::config(format!("{ENV_DETECT}: expected a boolean, got '{detect}'"))
            })?);
        }

        if let Some(url) = var(ENV_GEOIP_URL) {
            self.geoip.url = Some(url);
        }

        if let Some(timeout) = var(ENV_GEOIP_TIMEOUT) {
            self.geoip.timeout_secs = Some(timeout.trim().parse().map_err(|_| {
                Error::config(format!("{ENV_GEOIP_TIMEOUT}: expected seconds, got '{timeout}'"))
            })?);
        }

        Ok(())
    }

    /// Locale active before detection runs.
    pub fn initial_locale(&self) -> Locale {
        self.locale.unwrap_or(Locale::INITIAL)
    }

    /// Whether locale detection is enabled.
    pub fn detect_enabled(&self) -> bool {
        self.detect.unwrap_or(true)
    }

    /// Get the path to the user config file.
    ///
    /// Follows XDG Base Directory Specification:
    /// - Uses `XDG_CONFIG_HOME/stackgen/config.yaml` if set
    /// - Falls back to `~/.config/stackgen/config.yaml`
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.yaml"))
    }

    /// Get the path to the user config directory.
    ///
    /// Cross-platform behavior:
    /// - If `XDG_CONFIG_HOME` is set, uses `$XDG_CONFIG_HOME/stackgen`
    /// - Linux/macOS: Falls back to `~/.config/stackgen` (XDG default)
    /// - Windows: Falls back to `%APPDATA%\stackgen`
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return Some(PathBuf::from(xdg_config).join("stackgen"));
        }

        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join("stackgen"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".config").join("stackgen"))
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
