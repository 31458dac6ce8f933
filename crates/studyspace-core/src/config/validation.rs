//! Configuration validation.

use crate::config::types::StudySpaceConfig;
use crate::errors::ConfigError;

/// Validate the effective configuration.
///
/// # Errors
///
/// - base URL without an http(s) scheme
/// - endpoint paths not starting with `/`
/// - zero intervals, durations or timeouts
pub fn validate_config(config: &StudySpaceConfig) -> Result<(), ConfigError> {
    let base_url = config.api.base_url();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
        });
    }

    let paths = [
        ("api.spaces_path", &config.api.spaces_path),
        ("api.public_spaces_path", &config.api.public_spaces_path),
        ("api.username_path", &config.api.username_path),
    ];
    for (name, path) in paths {
        if let Some(path) = path
            && !path.starts_with('/')
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must start with '/', got '{}'", name, path),
            });
        }
    }

    let positives = [
        ("api.request_timeout_secs", config.api.request_timeout_secs),
        ("refresh.interval_secs", config.refresh.interval_secs),
        ("notification.duration_ms", config.notification.duration_ms),
    ];
    for (name, value) in positives {
        if value == Some(0) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must be greater than 0", name),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{ApiConfig, RefreshConfig};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&StudySpaceConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let config = StudySpaceConfig {
            api: ApiConfig {
                base_url: Some("localhost:3000".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_relative_path() {
        let config = StudySpaceConfig {
            api: ApiConfig {
                spaces_path: Some("spaces".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("api.spaces_path"));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = StudySpaceConfig {
            refresh: RefreshConfig {
                interval_secs: Some(0),
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: refresh.interval_secs must be greater than 0"
        );
    }
}
