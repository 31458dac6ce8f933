//! Configuration type definitions.
//!
//! These types are serialized/deserialized from TOML config files. Every
//! file-backed field is optional so that a project config only overrides what
//! it names; the accessor methods resolve the effective value.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//! spaces_path = "/api/v1/space/fetch"
//! public_spaces_path = "/api/v1/space/fetch-public"
//! username_path = "/api/v1/user/username"
//! request_timeout_secs = 10
//!
//! [refresh]
//! interval_secs = 5
//!
//! [notification]
//! duration_ms = 3000
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::defaults;

/// Runtime configuration for the client.
///
/// Holds paths and settings derived from environment variables and system
/// defaults, not from config files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for all StudySpace data (default: ~/.studyspace)
    pub data_dir: PathBuf,
    /// Log level for the application
    pub log_level: String,
}

impl Config {
    /// Path of the persisted authentication token.
    pub fn token_path(&self) -> PathBuf {
        self.data_dir.join(defaults::TOKEN_FILE_NAME)
    }
}

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StudySpaceConfig {
    /// Backend endpoints
    #[serde(default)]
    pub api: ApiConfig,

    /// Space list refresh cadence
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Notification banner timing
    #[serde(default)]
    pub notification: NotificationConfig,
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiConfig {
    /// Scheme and host of the backend, without trailing slash.
    /// Default: http://localhost:3000
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Path of the authenticated space listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spaces_path: Option<String>,

    /// Path of the anonymous space listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_spaces_path: Option<String>,

    /// Path of the current-user lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_path: Option<String>,

    /// Per-request timeout in seconds.
    /// Default: 10 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn spaces_url(&self) -> String {
        join_url(
            self.base_url(),
            self.spaces_path
                .as_deref()
                .unwrap_or(defaults::DEFAULT_SPACES_PATH),
        )
    }

    pub fn public_spaces_url(&self) -> String {
        join_url(
            self.base_url(),
            self.public_spaces_path
                .as_deref()
                .unwrap_or(defaults::DEFAULT_PUBLIC_SPACES_PATH),
        )
    }

    pub fn username_url(&self) -> String {
        join_url(
            self.base_url(),
            self.username_path
                .as_deref()
                .unwrap_or(defaults::DEFAULT_USERNAME_PATH),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(defaults::DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

/// Space list refresh configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefreshConfig {
    /// Seconds between refresh ticks.
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(
            self.interval_secs
                .unwrap_or(defaults::DEFAULT_REFRESH_INTERVAL_SECS),
        )
    }
}

/// Notification banner configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NotificationConfig {
    /// How long a banner stays visible, in milliseconds.
    /// Default: 3000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(
            self.duration_ms
                .unwrap_or(defaults::DEFAULT_NOTIFICATION_DURATION_MS),
        )
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.spaces_url(), "http://localhost:3000/api/v1/space/fetch");
        assert_eq!(
            api.public_spaces_url(),
            "http://localhost:3000/api/v1/space/fetch-public"
        );
        assert_eq!(
            api.username_url(),
            "http://localhost:3000/api/v1/user/username"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let api = ApiConfig {
            base_url: Some("https://spaces.example.com/".to_string()),
            spaces_path: Some("/spaces".to_string()),
            ..Default::default()
        };
        assert_eq!(api.spaces_url(), "https://spaces.example.com/spaces");
    }

    #[test]
    fn test_default_durations() {
        let config = StudySpaceConfig::default();
        assert_eq!(config.refresh.interval(), Duration::from_secs(5));
        assert_eq!(config.notification.duration(), Duration::from_millis(3000));
        assert_eq!(config.api.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_serialization_skips_unset_fields() {
        let config = StudySpaceConfig {
            refresh: RefreshConfig {
                interval_secs: Some(7),
            },
            ..Default::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("interval_secs = 7"));
        assert!(!toml_str.contains("base_url"));

        let parsed: StudySpaceConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_token_path() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/studyspace"),
            log_level: "info".to_string(),
        };
        assert_eq!(config.token_path(), PathBuf::from("/tmp/studyspace/token"));
    }
}
