//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! 1. **Hardcoded defaults**
//! 2. **User config** - `~/.studyspace/config.toml`
//! 3. **Project config** - `./.studyspace/config.toml`
//! 4. **CLI arguments** - applied by the caller after loading

use crate::config::defaults::CONFIG_DIR_NAME;
use crate::config::types::{ApiConfig, NotificationConfig, RefreshConfig, StudySpaceConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be parsed, or if validation
/// fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<StudySpaceConfig, ConfigError> {
    let mut config = StudySpaceConfig::default();

    if let Some(user_path) = user_config_path()
        && let Some(user_config) = load_optional_config_file(&user_path)?
    {
        config = merge_configs(config, user_config);
    }

    let project_path = std::env::current_dir()?
        .join(CONFIG_DIR_NAME)
        .join("config.toml");
    if let Some(project_config) = load_optional_config_file(&project_path)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a config file, treating a missing file as `None`.
fn load_optional_config_file(path: &Path) -> Result<Option<StudySpaceConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::ConfigNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<StudySpaceConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: StudySpaceConfig, override_config: StudySpaceConfig) -> StudySpaceConfig {
    StudySpaceConfig {
        api: ApiConfig {
            base_url: override_config.api.base_url.or(base.api.base_url),
            spaces_path: override_config.api.spaces_path.or(base.api.spaces_path),
            public_spaces_path: override_config
                .api
                .public_spaces_path
                .or(base.api.public_spaces_path),
            username_path: override_config.api.username_path.or(base.api.username_path),
            request_timeout_secs: override_config
                .api
                .request_timeout_secs
                .or(base.api.request_timeout_secs),
        },
        refresh: RefreshConfig {
            interval_secs: override_config
                .refresh
                .interval_secs
                .or(base.refresh.interval_secs),
        },
        notification: NotificationConfig {
            duration_ms: override_config
                .notification
                .duration_ms
                .or(base.notification.duration_ms),
        },
    }
}

/// Path of the user-level config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_override_values() {
        let base = StudySpaceConfig {
            api: ApiConfig {
                base_url: Some("http://base".to_string()),
                spaces_path: Some("/base-spaces".to_string()),
                ..Default::default()
            },
            refresh: RefreshConfig {
                interval_secs: Some(10),
            },
            ..Default::default()
        };
        let override_config = StudySpaceConfig {
            api: ApiConfig {
                base_url: Some("http://override".to_string()),
                ..Default::default()
            },
            notification: NotificationConfig {
                duration_ms: Some(1500),
            },
            ..Default::default()
        };

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.api.base_url.as_deref(), Some("http://override"));
        assert_eq!(merged.api.spaces_path.as_deref(), Some("/base-spaces"));
        assert_eq!(merged.refresh.interval_secs, Some(10));
        assert_eq!(merged.notification.duration_ms, Some(1500));
    }

    #[test]
    fn test_load_config_file_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_file(&dir.path().join("config.toml"));
        assert!(matches!(result, Err(ConfigError::ConfigNotFound { .. })));
        assert!(
            load_optional_config_file(&dir.path().join("config.toml"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_load_config_file_parses_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "https://spaces.example.com"

[refresh]
interval_secs = 2
"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(
            config.api.spaces_url(),
            "https://spaces.example.com/api/v1/space/fetch"
        );
        assert_eq!(config.refresh.interval_secs, Some(2));
        assert_eq!(config.notification.duration_ms, None);
    }

    #[test]
    fn test_load_config_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        let result = load_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }
}
