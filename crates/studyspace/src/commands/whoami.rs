use clap::ArgMatches;
use tracing::{error, info};

use studyspace_core::auth_ops::{self, AuthStatus};
use studyspace_core::SharedStore;

use super::helpers::{build_api, build_runtime, credential_store, resolve_config};

pub(crate) fn handle_whoami_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.whoami_started");

    let config = resolve_config(matches)?;
    let credentials = credential_store();
    let api = build_api(&config)?;
    let store = SharedStore::new();

    let runtime = build_runtime()?;
    match runtime.block_on(auth_ops::resolve_authentication(&api, &credentials, &store)) {
        Ok(status) => {
            match &status {
                AuthStatus::SignedIn { username } => println!("{}", username),
                AuthStatus::Anonymous => println!("Not signed in."),
                AuthStatus::TokenRevoked => {
                    println!("Not signed in: the stored token was rejected and has been removed.")
                }
            }
            info!(event = "cli.whoami_completed", status = ?status);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to check sign-in: {}", e);

            error!(event = "cli.whoami_failed", error = %e);

            Err(e.into())
        }
    }
}
