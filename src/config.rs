//! Configuration management for the MindTracker journal server
//!
//! Loads settings from config.toml with environment variable overrides.
//! All values are read once at startup; changing them requires a restart.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Complete server configuration loaded during initialization
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    // ═══ NETWORK (Environment Override Supported) ═══
    /// IP address to bind the command connection
    pub bind_address: String,

    /// Port for the command connection
    pub control_port: u16,

    /// Root directory holding per-user journal stores
    pub data_root: String,

    // ═══ SESSION LIMITS ═══
    /// Maximum concurrent clients
    pub max_clients: usize,

    /// Connection timeout for idle sessions (seconds)
    pub connection_timeout_secs: u64,

    /// Maximum command line length in bytes
    pub max_command_length: usize,

    /// Maximum user identifier length
    pub max_user_id_length: usize,

    // ═══ TEXT BOUNDS (characters, post-sanitization) ═══
    /// Bound for daily-entry notes
    pub max_note_length: usize,

    /// Bound for tracked list items
    pub max_item_length: usize,

    /// Bound for profile display names
    pub max_name_length: usize,

    // ═══ JOURNAL BEHAVIOR ═══
    /// Cap per tracked list (red flags / triggers / boundaries)
    pub max_list_items: usize,

    /// Number of entries in the stress trend series
    pub trend_window: usize,

    // ═══ WRITE THROTTLING ═══
    /// Maximum write commands admitted per window, per session
    pub rate_limit_max_calls: usize,

    /// Rate limit window in milliseconds
    pub rate_limit_window_ms: u64,
}

impl ServerConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        // Try production path first, then development path
        let config_paths = vec![
            "mindtracker-server/config", // Container deployment: /app/mindtracker-server/config.toml
            "config",                    // Local development: ./config.toml
        ];

        let mut last_error = None;

        for config_path in &config_paths {
            match Config::builder()
                .add_source(File::with_name(config_path))
                .add_source(Environment::with_prefix("MINDTRACKER").separator("_"))
                .build()
            {
                Ok(settings) => {
                    let config: ServerConfig = settings.try_deserialize()?;
                    config.validate()?;
                    return Ok(config);
                }
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            }
        }

        Err(config::ConfigError::Message(format!(
            "Failed to load config.toml from any location. Tried: {config_paths:?}. Last error: {last_error:?}"
        )))
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.control_port == 0 {
            return Err(config::ConfigError::Message(
                "Control port cannot be 0".into(),
            ));
        }

        if self.data_root.is_empty() {
            return Err(config::ConfigError::Message(
                "data_root cannot be empty".into(),
            ));
        }

        if self.max_clients == 0 {
            return Err(config::ConfigError::Message(
                "max_clients must be greater than 0".into(),
            ));
        }

        if self.max_note_length == 0 || self.max_item_length == 0 || self.max_name_length == 0 {
            return Err(config::ConfigError::Message(
                "text bounds must be greater than 0".into(),
            ));
        }

        if self.max_list_items == 0 {
            return Err(config::ConfigError::Message(
                "max_list_items must be greater than 0".into(),
            ));
        }

        if self.trend_window == 0 {
            return Err(config::ConfigError::Message(
                "trend_window must be greater than 0".into(),
            ));
        }

        if self.rate_limit_max_calls == 0 || self.rate_limit_window_ms == 0 {
            return Err(config::ConfigError::Message(
                "rate limit values must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and control port as socket address
    pub fn control_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.control_port)
    }

    /// Get the data root as PathBuf
    pub fn data_root_path(&self) -> PathBuf {
        PathBuf::from(&self.data_root)
    }

    /// Get connection timeout as Duration
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    /// Get the rate limit window as Duration
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_millis(self.rate_limit_window_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            control_port: 2424,
            data_root: "./journal_root".to_string(),
            max_clients: 10,
            connection_timeout_secs: 30,
            max_command_length: 4096,
            max_user_id_length: 64,
            max_note_length: 1000,
            max_item_length: 200,
            max_name_length: 50,
            max_list_items: 40,
            trend_window: 30,
            rate_limit_max_calls: 30,
            rate_limit_window_ms: 60_000,
        }
    }
}
