use crate::constants::{DEFAULT_CAMERA_NAME, DEFAULT_GO_BACK_MINUTES, DEFAULT_WAIT_TIMEOUT_SECS};
use crate::error::{BlinkError, Result};
use chrono::Duration;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Values read from `secrets.toml`.
///
/// `hass_api_base_url` and `hass_api_token` belong to a companion
/// notification step and are not consumed here.
#[derive(Debug, Clone, Deserialize)]
pub struct Secrets {
    pub hass_api_base_url: String,
    pub hass_api_token: String,
    pub username: String,
    pub password: String,
}

impl Secrets {
    /// Load secrets from `<dir>/secrets.toml`
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join("secrets.toml");
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| BlinkError::ConfigError(format!("Cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| BlinkError::ConfigError(format!("Invalid secrets file: {}", e)))
    }
}

/// Runtime settings, compiled defaults overridable through `BLINK_*`
/// environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the downloaded clip is written into
    pub video_save_path: PathBuf,
    /// Directory holding `secrets.toml`
    pub secrets_path: PathBuf,
    /// Camera whose clip should be fetched
    pub camera_name: String,
    /// Videos created before this long ago are ignored
    pub go_back: Duration,
    /// How long to wait for a video before giving up
    pub wait_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            video_save_path: PathBuf::from("."),
            secrets_path: PathBuf::from("."),
            camera_name: DEFAULT_CAMERA_NAME.to_string(),
            go_back: Duration::minutes(DEFAULT_GO_BACK_MINUTES),
            wait_timeout: Duration::seconds(DEFAULT_WAIT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("BLINK_SAVE_PATH") {
            config.video_save_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("BLINK_SECRETS_PATH") {
            config.secrets_path = PathBuf::from(path);
        }
        if let Some(name) = lookup("BLINK_CAMERA") {
            config.camera_name = name;
        }
        if let Some(minutes) = lookup("BLINK_GO_BACK_MINUTES") {
            let minutes = minutes.parse::<i64>().map_err(|_| {
                BlinkError::ConfigError(format!("Invalid BLINK_GO_BACK_MINUTES: {}", minutes))
            })?;
            config.go_back = Duration::minutes(minutes);
        }
        if let Some(seconds) = lookup("BLINK_WAIT_TIMEOUT_SECS") {
            let seconds = seconds.parse::<i64>().map_err(|_| {
                BlinkError::ConfigError(format!("Invalid BLINK_WAIT_TIMEOUT_SECS: {}", seconds))
            })?;
            config.wait_timeout = Duration::seconds(seconds);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_parse_all_four_keys() {
        let secrets: Secrets = toml::from_str(
            r#"
            hass_api_base_url = "https://hass.example.com:8123"
            hass_api_token = "abcdef"
            username = "user@example.com"
            password = "hunter2"
            "#,
        )
        .unwrap();
        assert_eq!(secrets.username, "user@example.com");
        assert_eq!(secrets.password, "hunter2");
    }

    #[test]
    fn secrets_missing_key_is_rejected() {
        let parsed = toml::from_str::<Secrets>(r#"username = "user@example.com""#);
        assert!(parsed.is_err());
    }

    #[test]
    fn config_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.camera_name, "Front Door");
        assert_eq!(config.go_back, Duration::minutes(3));
        assert_eq!(config.wait_timeout, Duration::seconds(60));
    }

    #[test]
    fn config_env_overrides() {
        let config = Config::from_lookup(|key| match key {
            "BLINK_CAMERA" => Some("Back Yard".to_string()),
            "BLINK_WAIT_TIMEOUT_SECS" => Some("120".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.camera_name, "Back Yard");
        assert_eq!(config.wait_timeout, Duration::seconds(120));
    }

    #[test]
    fn config_rejects_bad_numbers() {
        let parsed = Config::from_lookup(|key| match key {
            "BLINK_GO_BACK_MINUTES" => Some("soon".to_string()),
            _ => None,
        });
        assert!(matches!(parsed, Err(BlinkError::ConfigError(_))));
    }
}
