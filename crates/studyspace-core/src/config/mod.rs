//! # Configuration System
//!
//! Hierarchical TOML configuration for the StudySpace client.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.studyspace/config.toml` (global user preferences)
//! 3. **Project config** - `./.studyspace/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.studyspace/config.toml
//! [api]
//! base_url = "https://studyspace.example.com"
//!
//! [refresh]
//! interval_secs = 5
//!
//! [notification]
//! duration_ms = 3000
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use studyspace_core::config::StudySpaceConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StudySpaceConfig::load_hierarchy()?;
//!     println!("{}", config.api.spaces_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{ApiConfig, Config, NotificationConfig, RefreshConfig, StudySpaceConfig};
pub use validation::validate_config;

impl StudySpaceConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
