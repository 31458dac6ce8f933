//! Default values for configuration types.

use crate::config::types::Config;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_SPACES_PATH: &str = "/api/v1/space/fetch";
pub const DEFAULT_PUBLIC_SPACES_PATH: &str = "/api/v1/space/fetch-public";
pub const DEFAULT_USERNAME_PATH: &str = "/api/v1/user/username";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Refresh cadence of the space list (5 seconds).
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;

/// Visibility window of a notification banner (3 seconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// File name of the persisted token inside the data directory.
pub const TOKEN_FILE_NAME: &str = "token";

/// Name of the per-user and per-directory config folder.
pub const CONFIG_DIR_NAME: &str = ".studyspace";

impl Default for Config {
    fn default() -> Self {
        let data_dir = match std::env::var_os("STUDYSPACE_HOME") {
            Some(dir) => dir.into(),
            None => match dirs::home_dir() {
                Some(home) => home.join(CONFIG_DIR_NAME),
                None => {
                    eprintln!(
                        "Warning: Could not find home directory. Set HOME environment variable. \
                        Using fallback directory."
                    );
                    std::env::temp_dir().join(CONFIG_DIR_NAME)
                }
            },
        };

        Self {
            data_dir,
            log_level: std::env::var("STUDYSPACE_LOG_LEVEL").unwrap_or("info".to_string()),
        }
    }
}
