use std::time::Duration;

use clap::ArgMatches;
use tracing::info;

use studyspace_core::notification::Banner;
use studyspace_core::{NotificationController, SharedStore};

use super::helpers::{build_runtime, resolve_config};

pub(crate) fn handle_notify_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let message = matches
        .get_one::<String>("message")
        .ok_or("Message argument is required")?;
    let success = !matches.get_flag("error");

    info!(event = "cli.notify_started", success = success);

    if message.is_empty() {
        println!("Nothing to show: the message is empty.");
        return Ok(());
    }

    let config = resolve_config(matches)?;
    let duration = config.notification.duration();

    let runtime = build_runtime()?;
    runtime.block_on(show_until_hidden(message, success, duration))?;

    info!(event = "cli.notify_completed");
    Ok(())
}

async fn show_until_hidden(
    message: &str,
    success: bool,
    duration: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = SharedStore::new();
    let _task = NotificationController::new(store.clone(), duration).spawn();
    let mut displayed = store.subscribe_notification_displayed();

    store.show_message(message, success);

    // A short window can end before this task is polled again.
    displayed.changed().await?;
    if let Some(banner) = Banner::for_display(true, &store.notification()) {
        println!("{} {}", banner.tone.icon(), banner.message);
    }

    displayed.wait_for(|shown| !*shown).await?;
    println!("(notification hidden after {}ms)", duration.as_millis());

    Ok(())
}
