use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::timer::DelayedTask;
use super::types::{Banner, VisibilityState};
use crate::state::SharedStore;

/// Shows a requested banner for a fixed window, then retracts it.
///
/// Every change to the request flag or message re-evaluates the request
/// from scratch: the pending hide timer is cancelled first, then
/// - flag set and message non-empty: banner displayed, timer armed;
/// - otherwise: banner hidden at once, no timer.
///
/// When the timer fires the banner is hidden and the request flag is reset
/// to `false`; the message text is left as it was. There is no queue: a new
/// request replaces the one on screen and restarts the window.
#[derive(Clone)]
pub struct NotificationController {
    store: SharedStore,
    duration: Duration,
    inner: Arc<Mutex<ControllerInner>>,
}

struct ControllerInner {
    state: VisibilityState,
    /// Bumped on every re-arm so a superseded timer can tell it is stale.
    generation: u64,
    timer: Option<DelayedTask>,
    /// Flag and message of the last evaluated request.
    last_request: Option<(bool, String)>,
}

impl NotificationController {
    pub fn new(store: SharedStore, duration: Duration) -> Self {
        Self {
            store,
            duration,
            inner: Arc::new(Mutex::new(ControllerInner {
                state: VisibilityState::Hidden,
                generation: 0,
                timer: None,
                last_request: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ControllerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> VisibilityState {
        self.lock().state
    }

    /// Whether an automatic hide is scheduled.
    pub fn has_pending_hide(&self) -> bool {
        self.lock().timer.as_ref().is_some_and(DelayedTask::is_pending)
    }

    /// The banner to render right now, if any.
    pub fn banner(&self) -> Option<Banner> {
        Banner::for_display(self.store.notification_displayed(), &self.store.notification())
    }

    /// Re-evaluate the current request.
    ///
    /// Status-only changes do not restart the window.
    pub fn evaluate(&self) {
        let notification = self.store.notification();
        let request = (notification.visible, notification.message.clone());

        let mut inner = self.lock();
        if inner.last_request.as_ref() == Some(&request) {
            return;
        }
        inner.last_request = Some(request);

        if let Some(mut timer) = inner.timer.take() {
            timer.cancel();
        }
        inner.generation += 1;

        if notification.wants_display() {
            inner.state = VisibilityState::Showing;
            self.store.set_notification_displayed(true);
            inner.timer = Some(self.arm_hide(inner.generation));

            info!(
                event = "core.notification.shown",
                message = %notification.message,
                success = notification.success,
                duration_ms = self.duration.as_millis() as u64
            );
        } else {
            let was_showing = inner.state == VisibilityState::Showing;
            inner.state = VisibilityState::Hidden;
            self.store.set_notification_displayed(false);

            if was_showing {
                info!(event = "core.notification.hidden", reason = "request_withdrawn");
            } else {
                debug!(
                    event = "core.notification.skipped",
                    visible = notification.visible,
                    has_message = !notification.message.is_empty()
                );
            }
        }
    }

    fn arm_hide(&self, generation: u64) -> DelayedTask {
        let controller = self.clone();
        DelayedTask::spawn(self.duration, move || controller.hide_on_timeout(generation))
    }

    fn hide_on_timeout(&self, generation: u64) {
        let mut inner = self.lock();
        if inner.generation != generation {
            debug!(event = "core.notification.stale_timer_ignored", generation = generation);
            return;
        }

        // Writes happen under the lock so a concurrent re-evaluation cannot
        // interleave with them.
        inner.state = VisibilityState::Hidden;
        self.store.set_notification_displayed(false);
        self.store.set_notification_visible(false);
        // The watch channel may merge this reset with a re-request of the
        // same message, so the reset counts as already evaluated.
        inner.last_request = Some((false, self.store.notification().message));

        info!(event = "core.notification.hidden", reason = "timeout");
    }

    /// Watch the store and re-evaluate on every request change.
    ///
    /// The returned task stops watching and cancels any pending hide when
    /// dropped. Must be called within a tokio runtime.
    pub fn spawn(&self) -> NotificationTask {
        let controller = self.clone();
        let mut requests = self.store.subscribe_notification();

        let watcher = tokio::spawn(async move {
            loop {
                requests.borrow_and_update();
                controller.evaluate();

                if requests.changed().await.is_err() {
                    break;
                }
            }
        });

        NotificationTask {
            watcher,
            controller: self.clone(),
        }
    }

    fn shutdown(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        if let Some(mut timer) = inner.timer.take() {
            timer.cancel();
        }
    }
}

/// Running [`NotificationController`] watcher, stopped on drop.
pub struct NotificationTask {
    watcher: JoinHandle<()>,
    controller: NotificationController,
}

impl NotificationTask {
    pub fn controller(&self) -> &NotificationController {
        &self.controller
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for NotificationTask {
    fn drop(&mut self) {
        self.watcher.abort();
        self.controller.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationTone;
    use crate::testing::settle;
    use tokio::time::advance;

    const WINDOW: Duration = Duration::from_millis(3000);

    fn start(store: &SharedStore) -> NotificationTask {
        NotificationController::new(store.clone(), WINDOW).spawn()
    }

    #[tokio::test(start_paused = true)]
    async fn test_shows_immediately_and_hides_after_window() {
        let store = SharedStore::new();
        let task = start(&store);

        store.show_message("Saved", true);
        settle().await;
        assert!(store.notification_displayed());
        assert_eq!(task.controller().state(), VisibilityState::Showing);

        advance(Duration::from_millis(2999)).await;
        settle().await;
        assert!(store.notification_displayed());
        assert!(store.notification().visible);

        advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(!store.notification_displayed());
        assert!(!store.notification().visible);
        assert_eq!(store.notification().message, "Saved");
        assert_eq!(task.controller().state(), VisibilityState::Hidden);
        assert!(!task.controller().has_pending_hide());
    }

    #[tokio::test(start_paused = true)]
    async fn test_flag_cleared_midway_hides_at_once_and_cancels_timer() {
        let store = SharedStore::new();
        let task = start(&store);

        store.show_message("Saved", true);
        settle().await;

        advance(Duration::from_millis(1500)).await;
        store.set_notification_visible(false);
        settle().await;

        assert!(!store.notification_displayed());
        assert!(!task.controller().has_pending_hide());

        let mut displayed = store.subscribe_notification_displayed();
        displayed.borrow_and_update();
        advance(Duration::from_millis(5000)).await;
        settle().await;
        assert!(!displayed.has_changed().unwrap());
        assert_eq!(task.controller().state(), VisibilityState::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_message_shows_nothing_and_arms_no_timer() {
        let store = SharedStore::new();
        let task = start(&store);

        store.show_message("", true);
        settle().await;

        assert!(!store.notification_displayed());
        assert!(!task.controller().has_pending_hide());
        assert_eq!(task.controller().banner(), None);

        advance(Duration::from_millis(5000)).await;
        settle().await;
        // Nobody reset the flag: no timer ever ran.
        assert!(store.notification().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_message_replaces_current_and_restarts_window() {
        let store = SharedStore::new();
        let task = start(&store);

        store.show_message("First", true);
        settle().await;
        advance(Duration::from_millis(2000)).await;

        store.show_message("Second", false);
        settle().await;
        assert_eq!(
            task.controller().banner(),
            Some(Banner {
                message: "Second".to_string(),
                tone: NotificationTone::Error,
            })
        );

        // The first window would have ended here.
        advance(Duration::from_millis(1500)).await;
        settle().await;
        assert!(store.notification_displayed());

        advance(Duration::from_millis(1500)).await;
        settle().await;
        assert!(!store.notification_displayed());
        assert!(!store.notification().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_message_can_fire_again_after_reset() {
        let store = SharedStore::new();
        let _task = start(&store);

        store.show_message("Joined", true);
        settle().await;
        advance(WINDOW).await;
        settle().await;
        assert!(!store.notification_displayed());

        store.show_message("Joined", true);
        settle().await;
        assert!(store.notification_displayed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_pending_hide() {
        let store = SharedStore::new();
        let task = start(&store);

        store.show_message("Saved", true);
        settle().await;
        task.stop();

        advance(Duration::from_millis(5000)).await;
        settle().await;
        // The flag is only reset by a timer that ran.
        assert!(store.notification().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_message_requested_right_after_timeout_shows_again() {
        let store = SharedStore::new();
        let controller = NotificationController::new(store.clone(), WINDOW);

        store.show_message("Saved", true);
        controller.evaluate();
        let generation = controller.lock().generation;

        // Reset and re-request land before the watcher runs.
        controller.hide_on_timeout(generation);
        store.show_message("Saved", true);
        controller.evaluate();

        assert!(store.notification_displayed());
        assert_eq!(controller.state(), VisibilityState::Showing);
        assert!(controller.has_pending_hide());

        advance(WINDOW).await;
        settle().await;
        assert!(!store.notification_displayed());
        assert!(!store.notification().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_is_ignored() {
        let store = SharedStore::new();
        let controller = NotificationController::new(store.clone(), WINDOW);

        store.show_message("Saved", true);
        controller.evaluate();
        let stale_generation = controller.lock().generation;

        store.show_message("Updated", true);
        controller.evaluate();

        controller.hide_on_timeout(stale_generation);
        assert!(store.notification_displayed());
        assert_eq!(controller.state(), VisibilityState::Showing);
    }
}
