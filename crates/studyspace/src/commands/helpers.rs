use clap::ArgMatches;
use tokio::runtime::Runtime;
use tracing::warn;

use studyspace_core::{
    Config, CredentialStore, FetchError, FileCredentialStore, HttpSpacesApi, StudySpaceConfig,
};

/// Load the config hierarchy, falling back to defaults on failure.
pub fn load_config_with_warning() -> StudySpaceConfig {
    match StudySpaceConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.studyspace/config.toml and ./.studyspace/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            StudySpaceConfig::default()
        }
    }
}

/// Config for this invocation: file hierarchy plus `--base-url`, validated.
pub fn resolve_config(
    matches: &ArgMatches,
) -> Result<StudySpaceConfig, Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();

    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.api.base_url = Some(base_url.clone());
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ Invalid configuration: {}", e);
        return Err(e.into());
    }

    Ok(config)
}

pub fn credential_store() -> FileCredentialStore {
    FileCredentialStore::new(Config::default().token_path())
}

/// Whether a token is stored. An unreadable token file counts as none.
pub fn has_stored_token(credentials: &dyn CredentialStore) -> bool {
    match credentials.load_token() {
        Ok(token) => token.is_some(),
        Err(e) => {
            warn!(event = "cli.credentials.load_failed", error = %e);
            false
        }
    }
}

pub fn build_api(config: &StudySpaceConfig) -> Result<HttpSpacesApi, FetchError> {
    HttpSpacesApi::new(&config.api)
}

pub fn build_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}
