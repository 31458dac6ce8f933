use clap::ArgMatches;
use tracing::{error, info};

use studyspace_core::view::LandingPage;
use studyspace_core::{HomeView, SharedStore, refresh_ops};

use super::helpers::{build_api, build_runtime, credential_store, has_stored_token, resolve_config};

pub(crate) fn handle_spaces_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.spaces_started", json_output = json_output);

    let config = resolve_config(matches)?;
    let credentials = credential_store();
    let api = build_api(&config)?;

    let store = SharedStore::new();
    let has_token = has_stored_token(&credentials);
    store.set_authenticated(has_token);

    let runtime = build_runtime()?;
    let outcome = runtime.block_on(refresh_ops::refresh_once(&api, &credentials, &store));

    let view = HomeView::from_store(&store, has_token);
    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_home_view(&view);
    }

    match outcome {
        Ok(count) => {
            info!(event = "cli.spaces_completed", count = count);
            Ok(())
        }
        Err(e) => {
            error!(
                event = "cli.spaces_failed",
                kind = e.kind(),
                error = %e
            );

            Err(e.into())
        }
    }
}

pub(super) fn print_home_view(view: &HomeView) {
    match view {
        HomeView::Landing(landing) => print_landing(landing),
        HomeView::Error { message } => println!("❌ {}", message),
        HomeView::Grid { cards } => {
            println!("Spaces:");
            let formatter = crate::table::TableFormatter::new(cards);
            formatter.print_table(cards);
        }
    }
}

fn print_landing(landing: &LandingPage) {
    println!("{}", landing.message());
    if landing.offers_create_space() {
        println!("Run 'studyspace login --token <TOKEN>' to sign in.");
    }
}
