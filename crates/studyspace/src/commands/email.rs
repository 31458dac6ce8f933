use clap::ArgMatches;
use tracing::info;

use studyspace_core::{SharedStore, auth_ops};

pub(crate) fn handle_email_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let address = matches
        .get_one::<String>("address")
        .ok_or("Address argument is required")?;

    let store = SharedStore::new();
    auth_ops::capture_signin_email(&store, address);

    println!("Sign-in email: {}", store.signin_email());
    info!(event = "cli.email_captured", length = address.chars().count());

    Ok(())
}
