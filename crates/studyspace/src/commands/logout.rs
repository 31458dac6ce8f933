use clap::ArgMatches;
use tracing::{error, info};

use studyspace_core::CredentialStore;

use super::helpers::credential_store;

pub(crate) fn handle_logout_command(
    _matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.logout_started");

    let credentials = credential_store();
    match credentials.clear_token() {
        Ok(()) => {
            println!("✅ Signed out.");
            info!(event = "cli.logout_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to remove token: {}", e);

            error!(event = "cli.logout_failed", error = %e);

            Err(e.into())
        }
    }
}
