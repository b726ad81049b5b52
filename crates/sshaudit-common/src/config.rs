//! Tool settings for sshaudit
//!
//! These settings control how the tool behaves (logging, whether the live
//! daemon is probed). They never change what is audited: the rule table,
//! the default sshd_config search paths and the probe command are fixed.

use serde::{Deserialize, Serialize};
use sshaudit_core::{Error, Result};
use std::path::Path;

/// Environment variable naming an optional TOML settings file
pub const SETTINGS_ENV: &str = "SSHAUDIT_CONFIG";

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Live effective-configuration probe settings
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl Config {
    /// Load settings from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read settings file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse settings: {}", e)))
    }

    /// Defaults, then the file named by `SSHAUDIT_CONFIG`, then env overrides
    pub fn load() -> Result<Self> {
        let config = match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.merge_env())
    }

    /// Create a settings builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Merge with environment variables (SSHAUDIT_ prefix)
    pub fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Merge overrides from an arbitrary variable source
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = lookup("SSHAUDIT_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Some(val) = lookup("SSHAUDIT_LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Some(val) = lookup("SSHAUDIT_PROBE") {
            self.probe.enabled = !matches!(
                val.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }

        self
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Emit span open/close events
    #[serde(default)]
    pub spans: bool,

    /// Include source file and line in each event
    #[serde(default)]
    pub file_line: bool,
}

fn default_log_level() -> String {
    String::from("warn")
}

fn default_log_format() -> String {
    String::from("compact")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            spans: false,
            file_line: false,
        }
    }
}

/// Live probe settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Run `sshd -T` after the file audit
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Builder for constructing Config
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn log_format(mut self, format: impl Into<String>) -> Self {
        self.config.logging.format = format.into();
        self
    }

    pub fn probe_enabled(mut self, enabled: bool) -> Self {
        self.config.probe.enabled = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            [logging]
            level = "debug"
            format = "json"
            file_line = true

            [probe]
            enabled = false
        "#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert!(config.logging.file_line);
        assert!(!config.logging.spans);
        assert!(!config.probe.enabled);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("[logging]\nlevel = \"info\"\n").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "compact");
        assert!(config.probe.enabled);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("[logging\nlevel = ").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sshaudit.toml");
        std::fs::write(&path, "[probe]\nenabled = false\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.probe.enabled);

        let missing = Config::from_file(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_merge_vars() {
        let vars: HashMap<&str, &str> = [
            ("SSHAUDIT_LOG_LEVEL", "trace"),
            ("SSHAUDIT_PROBE", "Off"),
        ]
        .into_iter()
        .collect();

        let config = Config::default().merge_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "compact");
        assert!(!config.probe.enabled);

        let config = config.merge_vars(|k| (k == "SSHAUDIT_PROBE").then(|| "1".to_string()));
        assert!(config.probe.enabled);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::builder()
            .log_level("error")
            .log_format("pretty")
            .probe_enabled(false)
            .build();

        assert_eq!(config.logging.level, "error");
        assert_eq!(config.logging.format, "pretty");
        assert!(!config.probe.enabled);
    }
}
