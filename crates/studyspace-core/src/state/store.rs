use std::sync::Arc;

use tokio::sync::watch;

use super::types::Notification;
use crate::spaces::Space;

/// Process-wide reactive state shared by the controllers and the views.
///
/// Cloning is cheap and every clone observes the same values. Readers take a
/// snapshot with the getters or subscribe to be woken on change.
///
/// | field | writer |
/// |---|---|
/// | spaces, spaces error | space list refresher |
/// | authenticated, username | authentication check and token commands |
/// | sign-in email | sign-in form |
/// | notification | any caller; only the controller clears `visible` |
/// | notification displayed | notification controller |
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    spaces: watch::Sender<Vec<Space>>,
    spaces_error: watch::Sender<Option<String>>,
    authenticated: watch::Sender<bool>,
    username: watch::Sender<Option<String>>,
    signin_email: watch::Sender<String>,
    notification: watch::Sender<Notification>,
    notification_displayed: watch::Sender<bool>,
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                spaces: watch::Sender::new(Vec::new()),
                spaces_error: watch::Sender::new(None),
                authenticated: watch::Sender::new(false),
                username: watch::Sender::new(None),
                signin_email: watch::Sender::new(String::new()),
                notification: watch::Sender::new(Notification::default()),
                notification_displayed: watch::Sender::new(false),
            }),
        }
    }

    // --- spaces ---

    pub fn spaces(&self) -> Vec<Space> {
        self.inner.spaces.borrow().clone()
    }

    pub fn subscribe_spaces(&self) -> watch::Receiver<Vec<Space>> {
        self.inner.spaces.subscribe()
    }

    /// Replace the whole collection in one step.
    pub(crate) fn replace_spaces(&self, spaces: Vec<Space>) {
        self.inner.spaces.send_replace(spaces);
    }

    /// User-facing error from the last failed refresh, if any.
    pub fn spaces_error(&self) -> Option<String> {
        self.inner.spaces_error.borrow().clone()
    }

    pub fn subscribe_spaces_error(&self) -> watch::Receiver<Option<String>> {
        self.inner.spaces_error.subscribe()
    }

    pub(crate) fn set_spaces_error(&self, error: Option<String>) {
        self.inner.spaces_error.send_if_modified(|current| {
            if *current == error {
                return false;
            }
            *current = error;
            true
        });
    }

    // --- authentication ---

    pub fn is_authenticated(&self) -> bool {
        *self.inner.authenticated.borrow()
    }

    pub fn subscribe_authenticated(&self) -> watch::Receiver<bool> {
        self.inner.authenticated.subscribe()
    }

    /// Set the authentication flag. Subscribers are only woken when the
    /// value actually changes. Returns whether it changed.
    pub fn set_authenticated(&self, authenticated: bool) -> bool {
        self.inner.authenticated.send_if_modified(|current| {
            if *current == authenticated {
                return false;
            }
            *current = authenticated;
            true
        })
    }

    pub fn username(&self) -> Option<String> {
        self.inner.username.borrow().clone()
    }

    pub fn set_username(&self, username: Option<String>) {
        self.inner.username.send_replace(username);
    }

    // --- sign-in ---

    pub fn signin_email(&self) -> String {
        self.inner.signin_email.borrow().clone()
    }

    pub fn set_signin_email(&self, email: impl Into<String>) {
        self.inner.signin_email.send_replace(email.into());
    }

    // --- notification ---

    pub fn notification(&self) -> Notification {
        self.inner.notification.borrow().clone()
    }

    pub fn subscribe_notification(&self) -> watch::Receiver<Notification> {
        self.inner.notification.subscribe()
    }

    /// Ask for a banner. Replaces whatever is currently requested.
    pub fn show_message(&self, message: impl Into<String>, success: bool) {
        let next = Notification {
            visible: true,
            message: message.into(),
            success,
        };
        self.inner.notification.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    /// Set the visibility flag, leaving message and status untouched.
    pub fn set_notification_visible(&self, visible: bool) {
        self.inner.notification.send_if_modified(|current| {
            if current.visible == visible {
                return false;
            }
            current.visible = visible;
            true
        });
    }

    /// Whether the banner is currently on screen.
    pub fn notification_displayed(&self) -> bool {
        *self.inner.notification_displayed.borrow()
    }

    pub fn subscribe_notification_displayed(&self) -> watch::Receiver<bool> {
        self.inner.notification_displayed.subscribe()
    }

    pub(crate) fn set_notification_displayed(&self, displayed: bool) {
        self.inner.notification_displayed.send_if_modified(|current| {
            if *current == displayed {
                return false;
            }
            *current = displayed;
            true
        });
    }
}

impl std::fmt::Debug for SharedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStore")
            .field("spaces", &self.inner.spaces.borrow().len())
            .field("spaces_error", &*self.inner.spaces_error.borrow())
            .field("authenticated", &*self.inner.authenticated.borrow())
            .field("notification", &*self.inner.notification.borrow())
            .finish()
    }
}
