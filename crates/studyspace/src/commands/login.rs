use clap::ArgMatches;
use tracing::{error, info};

use studyspace_core::CredentialStore;

use super::helpers::credential_store;

pub(crate) fn handle_login_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let token = matches
        .get_one::<String>("token")
        .map(|t| t.trim())
        .ok_or("Token argument is required")?;

    if token.is_empty() {
        eprintln!("❌ Token must not be empty");
        error!(event = "cli.login_failed", reason = "empty_token");
        return Err("Token must not be empty".into());
    }

    info!(event = "cli.login_started");

    let credentials = credential_store();
    match credentials.save_token(token) {
        Ok(()) => {
            println!("✅ Token saved to {}", credentials.path().display());
            info!(event = "cli.login_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to save token: {}", e);

            error!(event = "cli.login_failed", error = %e);

            Err(e.into())
        }
    }
}
