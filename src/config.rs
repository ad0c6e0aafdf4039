//! Dashboard configuration
//!
//! TOML format, every field optional:
//!
//! ```toml
//! [dashboard]
//! initial_section = "logs"
//! tick_rate_ms = 250
//!
//! [event_logs]
//! streaming = true
//!
//! [threat_prevention]
//! auto_mode = true
//! ```
//!
//! A missing file yields the defaults. Command line flags are applied on top
//! by the binary.

use crate::error::{CyberWatchError, Result};
use crate::navigation::SectionId;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Shell settings
    #[serde(default)]
    pub dashboard: ShellSettings,

    /// Event logs panel settings
    #[serde(default)]
    pub event_logs: EventLogSettings,

    /// Threat prevention panel settings
    #[serde(default)]
    pub threat_prevention: PreventionSettings,
}

/// Navigation shell settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSettings {
    /// Section shown at startup; unknown ids fall back to the event logs
    #[serde(default = "default_section")]
    pub initial_section: String,

    /// Input poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            initial_section: default_section(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Event logs panel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLogSettings {
    /// Whether the live indicator starts on
    #[serde(default = "default_true")]
    pub streaming: bool,
}

impl Default for EventLogSettings {
    fn default() -> Self {
        Self { streaming: true }
    }
}

/// Threat prevention panel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreventionSettings {
    /// Whether Auto Mode starts on
    #[serde(default = "default_true")]
    pub auto_mode: bool,
}

impl Default for PreventionSettings {
    fn default() -> Self {
        Self { auto_mode: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_section() -> String {
    SectionId::default().id().to_string()
}

fn default_tick_rate() -> u64 {
    250
}

impl DashboardConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("Config file not found, using defaults: {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;

        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the event loop cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.dashboard.tick_rate_ms == 0 {
            return Err(CyberWatchError::Config(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Initial section resolved against the navigation table
    pub fn initial_section(&self) -> SectionId {
        SectionId::from_id(&self.dashboard.initial_section)
    }

    /// Default config location (`<config dir>/cyberwatch/config.toml`)
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "cyberwatch")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("cyberwatch.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.dashboard.initial_section, "logs");
        assert_eq!(config.dashboard.tick_rate_ms, 250);
        assert!(config.event_logs.streaming);
        assert!(config.threat_prevention.auto_mode);
        assert_eq!(config.initial_section(), SectionId::EventLogs);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = DashboardConfig::from_toml(
            r#"
            [threat_prevention]
            auto_mode = false
            "#,
        )
        .unwrap();

        assert!(!config.threat_prevention.auto_mode);
        assert!(config.event_logs.streaming);
        assert_eq!(config.dashboard.tick_rate_ms, 250);
    }

    #[test]
    fn test_unknown_section_falls_back() {
        let config = DashboardConfig::from_toml(
            r#"
            [dashboard]
            initial_section = "firewall"
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_section(), SectionId::EventLogs);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let result = DashboardConfig::from_toml(
            r#"
            [dashboard]
            tick_rate_ms = 0
            "#,
        );
        assert!(matches!(result, Err(CyberWatchError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let result = DashboardConfig::from_toml("[dashboard\ninitial_section = ");
        assert!(matches!(result, Err(CyberWatchError::ConfigParse(_))));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let temp = TempDir::new().unwrap();
        let config = DashboardConfig::load(&temp.path().join("missing.toml")).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[dashboard]\ninitial_section = \"feedback\"\ntick_rate_ms = 100\n",
        )
        .unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.initial_section(), SectionId::AdminFeedback);
        assert_eq!(config.dashboard.tick_rate_ms, 100);
    }
}
