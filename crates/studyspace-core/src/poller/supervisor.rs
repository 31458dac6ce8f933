use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use super::refresh::{RefreshOutcome, refresh_once};
use crate::api::SpacesApi;
use crate::credentials::CredentialStore;
use crate::state::SharedStore;

/// Capacity of the outcome channel; slow subscribers skip old outcomes.
const OUTCOME_CHANNEL_CAPACITY: usize = 64;

#[derive(Clone)]
struct PollContext {
    api: Arc<dyn SpacesApi>,
    credentials: Arc<dyn CredentialStore>,
    store: SharedStore,
    interval: Duration,
    outcomes: broadcast::Sender<RefreshOutcome>,
}

/// Owns the periodic space refresh for the lifetime of a view.
///
/// - Refreshes immediately on start, then once per `interval`. Every tick
///   issues a new request even if earlier ones are still in flight.
/// - When the authentication flag changes the periodic task is cancelled
///   and recreated, so the endpoint is re-selected and the cadence restarts.
/// - Dropping the supervisor (or calling [`PollSupervisor::stop`]) cancels
///   the periodic task and every in-flight request.
///
/// Responses are applied in the order they complete, so a slow request can
/// overwrite the result of a later, faster one.
pub struct PollSupervisor {
    control: JoinHandle<()>,
    outcomes: broadcast::Sender<RefreshOutcome>,
}

impl PollSupervisor {
    /// Start polling. Must be called from within a tokio runtime.
    pub fn start(
        api: Arc<dyn SpacesApi>,
        credentials: Arc<dyn CredentialStore>,
        store: SharedStore,
        interval: Duration,
    ) -> Self {
        let (outcomes, _) = broadcast::channel(OUTCOME_CHANNEL_CAPACITY);
        let context = PollContext {
            api,
            credentials,
            store,
            interval,
            outcomes: outcomes.clone(),
        };

        info!(
            event = "core.poller.supervisor_started",
            interval_secs = interval.as_secs()
        );

        Self {
            control: tokio::spawn(supervise(context)),
            outcomes,
        }
    }

    /// Receive the outcome of every refresh completed from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<RefreshOutcome> {
        self.outcomes.subscribe()
    }

    pub fn is_running(&self) -> bool {
        !self.control.is_finished()
    }

    /// Cancel polling and all in-flight requests.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PollSupervisor {
    fn drop(&mut self) {
        self.control.abort();
        info!(event = "core.poller.supervisor_stopped");
    }
}

/// Restart the periodic task on every authentication change.
async fn supervise(context: PollContext) {
    let mut authenticated = context.store.subscribe_authenticated();
    authenticated.borrow_and_update();

    loop {
        let periodic = PeriodicTask::spawn(context.clone());

        if authenticated.changed().await.is_err() {
            debug!(event = "core.poller.supervisor_exited", reason = "store_dropped");
            break;
        }

        info!(
            event = "core.poller.restarted",
            authenticated = *authenticated.borrow_and_update()
        );
        drop(periodic);
    }
}

/// A running periodic refresh loop, cancelled on drop.
struct PeriodicTask {
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    fn spawn(context: PollContext) -> Self {
        Self {
            handle: tokio::spawn(run_periodic(context)),
        }
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run_periodic(context: PollContext) {
    let mut ticker = tokio::time::interval(context.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // Dropping the set (when this task is aborted) aborts every request in it.
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                debug!(event = "core.poller.tick", in_flight = in_flight.len());
                let context = context.clone();
                in_flight.spawn(async move {
                    let outcome = refresh_once(
                        context.api.as_ref(),
                        context.credentials.as_ref(),
                        &context.store,
                    )
                    .await;
                    // No subscribers is normal.
                    let _ = context.outcomes.send(outcome);
                });
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(e) = joined
                    && e.is_panic()
                {
                    error!(event = "core.poller.refresh_panicked", error = %e);
                }
            }
        }
    }
}
