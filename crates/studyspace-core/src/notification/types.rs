use serde::Serialize;

use crate::state::Notification;

/// Controller state. `Hidden` is both initial and terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisibilityState {
    Hidden,
    Showing,
}

/// Styling of a banner, picked by the notification's status flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTone {
    Success,
    Error,
}

impl NotificationTone {
    pub fn from_success(success: bool) -> Self {
        if success {
            NotificationTone::Success
        } else {
            NotificationTone::Error
        }
    }

    /// Glyph drawn before the message: a check mark or a cross.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationTone::Success => "✓",
            NotificationTone::Error => "✗",
        }
    }
}

/// What a renderer should draw while the banner is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub message: String,
    pub tone: NotificationTone,
}

impl Banner {
    /// The banner to draw, or `None` when nothing should render.
    ///
    /// Nothing renders while the controller has the banner hidden or when
    /// the message is empty.
    pub fn for_display(displayed: bool, notification: &Notification) -> Option<Self> {
        if !displayed || notification.message.is_empty() {
            return None;
        }
        Some(Self {
            message: notification.message.clone(),
            tone: NotificationTone::from_success(notification.success),
        })
    }
}
