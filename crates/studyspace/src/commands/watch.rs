use std::sync::Arc;

use clap::ArgMatches;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use studyspace_core::auth_ops::{self, AuthStatus};
use studyspace_core::{
    CredentialStore, HomeView, NotificationController, PollSupervisor, SPACES_ERROR_MESSAGE,
    SharedStore, SpacesApi, StudySpaceConfig,
};

use super::helpers::{build_api, build_runtime, credential_store, has_stored_token, resolve_config};
use super::spaces::print_home_view;

pub(crate) fn handle_watch_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let ticks = matches.get_one::<u64>("ticks").copied();

    info!(event = "cli.watch_started", ticks = ?ticks);

    let config = resolve_config(matches)?;
    let credentials: Arc<dyn CredentialStore> = Arc::new(credential_store());
    let api: Arc<dyn SpacesApi> = Arc::new(build_api(&config)?);

    let runtime = build_runtime()?;
    runtime.block_on(watch_spaces(api, credentials, &config, ticks));

    Ok(())
}

async fn watch_spaces(
    api: Arc<dyn SpacesApi>,
    credentials: Arc<dyn CredentialStore>,
    config: &StudySpaceConfig,
    ticks: Option<u64>,
) {
    let store = SharedStore::new();

    match auth_ops::resolve_authentication(api.as_ref(), credentials.as_ref(), &store).await {
        Ok(AuthStatus::SignedIn { username }) => println!("Signed in as {}.", username),
        Ok(AuthStatus::TokenRevoked) => println!("Stored token was rejected and has been removed."),
        Ok(AuthStatus::Anonymous) => println!("Not signed in. Showing public spaces."),
        Err(e) => {
            eprintln!("Warning: Could not check sign-in: {}", e);
            warn!(event = "cli.watch_auth_failed", error = %e);
        }
    }

    let supervisor = PollSupervisor::start(
        api,
        credentials.clone(),
        store.clone(),
        config.refresh.interval(),
    );
    let notifications = NotificationController::new(store.clone(), config.notification.duration())
        .spawn();

    let mut outcomes = supervisor.subscribe();
    let mut spaces = store.subscribe_spaces();
    let mut spaces_error = store.subscribe_spaces_error();
    let mut displayed = store.subscribe_notification_displayed();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut received: u64 = 0;
    let mut last_view: Option<HomeView> = None;

    loop {
        let mut view_changed = false;

        tokio::select! {
            _ = &mut shutdown => {
                println!("Stopping.");
                break;
            }
            outcome = outcomes.recv() => match outcome {
                Ok(Ok(count)) => {
                    received += 1;
                    info!(event = "cli.watch_refresh_completed", count = count, received = received);
                }
                Ok(Err(e)) => {
                    received += 1;
                    store.show_message(SPACES_ERROR_MESSAGE, false);
                    warn!(
                        event = "cli.watch_refresh_failed",
                        kind = e.kind(),
                        error = %e,
                        received = received
                    );
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(event = "cli.watch_outcomes_lagged", skipped = skipped);
                }
                Err(RecvError::Closed) => break,
            },
            changed = spaces.changed() => {
                if changed.is_err() {
                    break;
                }
                spaces.borrow_and_update();
                view_changed = true;
            }
            changed = spaces_error.changed() => {
                if changed.is_err() {
                    break;
                }
                spaces_error.borrow_and_update();
                view_changed = true;
            }
            changed = displayed.changed() => {
                if changed.is_err() {
                    break;
                }
                let shown = *displayed.borrow_and_update();
                if shown {
                    if let Some(banner) = notifications.controller().banner() {
                        println!("{} {}", banner.tone.icon(), banner.message);
                    }
                } else {
                    println!("(notification hidden)");
                }
            }
        }

        if view_changed {
            let view = HomeView::from_store(&store, has_stored_token(credentials.as_ref()));
            if last_view.as_ref() != Some(&view) {
                print_home_view(&view);
                last_view = Some(view);
            }
        }

        if ticks.is_some_and(|limit| received >= limit) {
            info!(event = "cli.watch_tick_limit_reached", received = received);
            break;
        }
    }

    notifications.stop();
    supervisor.stop();

    info!(event = "cli.watch_completed", received = received);
}
