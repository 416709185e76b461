use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default = "default_primary")]
    pub primary: RigConfig,
    #[serde(default = "default_secondary")]
    pub secondary: RigConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            primary: default_primary(),
            secondary: default_secondary(),
            sync: SyncConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Address of one rigctld-compatible endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Delay between polling iterations in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// How long to wait for a single response before giving up
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            read_timeout_secs: default_read_timeout(),
        }
    }
}

impl SyncConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_primary() -> RigConfig {
    // Default rigctld listen port
    RigConfig {
        host: default_host(),
        port: 4532,
    }
}

fn default_secondary() -> RigConfig {
    RigConfig {
        host: default_host(),
        port: 4533,
    }
}

fn default_poll_interval() -> u64 {
    100
}

fn default_read_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| crate::Error::Config(e.to_string()))?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| crate::Error::Config(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content).map_err(|e| crate::Error::Config(e.to_string()))?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/rigsync/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("rigsync")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rigctld_ports() {
        let config = AppConfig::default();
        assert_eq!(config.primary.host, "localhost");
        assert_eq!(config.primary.port, 4532);
        assert_eq!(config.secondary.port, 4533);
        assert_eq!(config.sync.poll_interval_ms, 100);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [primary]
            host = "10.0.0.5"
            port = 4540

            [sync]
            poll_interval_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.primary.host, "10.0.0.5");
        assert_eq!(config.primary.port, 4540);
        // Untouched sections fall back to defaults
        assert_eq!(config.secondary.port, 4533);
        assert_eq!(config.sync.poll_interval_ms, 250);
        assert_eq!(config.sync.read_timeout_secs, 30);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_durations() {
        let sync = SyncConfig::default();
        assert_eq!(sync.poll_interval(), Duration::from_millis(100));
        assert_eq!(sync.read_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = AppConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.primary.port, config.primary.port);
        assert_eq!(parsed.sync.poll_interval_ms, config.sync.poll_interval_ms);
    }
}
