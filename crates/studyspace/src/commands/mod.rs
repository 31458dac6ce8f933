use clap::ArgMatches;
use tracing::{error, info};

pub mod helpers;

mod email;
mod login;
mod logout;
mod notify;
mod spaces;
mod watch;
mod whoami;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        event = "cli.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        command = matches.subcommand_name().unwrap_or("none")
    );

    match matches.subcommand() {
        Some(("spaces", sub_matches)) => spaces::handle_spaces_command(sub_matches),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("notify", sub_matches)) => notify::handle_notify_command(sub_matches),
        Some(("login", sub_matches)) => login::handle_login_command(sub_matches),
        Some(("logout", sub_matches)) => logout::handle_logout_command(sub_matches),
        Some(("whoami", sub_matches)) => whoami::handle_whoami_command(sub_matches),
        Some(("email", sub_matches)) => email::handle_email_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
