use serde::Serialize;

/// Externally settable notification request.
///
/// Any component may ask for a banner by setting `visible` and `message`.
/// Only the notification controller puts `visible` back to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub visible: bool,
    pub message: String,
    /// `true` renders as success, `false` as error.
    pub success: bool,
}

impl Notification {
    /// Whether this request asks for a banner to be on screen.
    pub fn wants_display(&self) -> bool {
        self.visible && !self.message.is_empty()
    }
}
