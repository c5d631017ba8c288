// src/backend/models/notification.rs
use crate::models::common::{NotificationKind, NotificationPhase};
use serde::{Deserialize, Serialize};

/// A short-lived message shown to the user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            phase: NotificationPhase::Visible,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase == NotificationPhase::Visible
    }
}
