// src/backend/services/notifier.rs
// Transient notifications with cancellable auto-dismiss

use crate::{
    config::NotificationConfig,
    models::{Notification, NotificationKind, NotificationPhase, TimerId},
};
use std::time::Duration;
use tracing::debug;

/// Host timer facility. Expired timers are reported back through
/// `StampCardController::on_timer` with the id returned here.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

/// The current notification and the single timer handle that belongs to it.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    timer: Option<TimerId>,
    display: Duration,
    fade: Duration,
}

impl NotificationCenter {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            current: None,
            timer: None,
            display: config.display_duration(),
            fade: config.fade_duration(),
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Replaces whatever is shown. The previous timer is cancelled first so its
    /// expiry can never dismiss the new message.
    pub fn show<S: Scheduler>(
        &mut self,
        scheduler: &mut S,
        message: impl Into<String>,
        kind: NotificationKind,
    ) {
        self.cancel_timer(scheduler);
        let notification = Notification::new(message, kind);
        debug!(message = %notification.message, ?kind, "Showing notification");
        self.current = Some(notification);
        self.timer = Some(scheduler.schedule(self.display));
    }

    /// Closes the notification immediately.
    pub fn dismiss<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.cancel_timer(scheduler);
        self.current = None;
    }

    /// Advances the notification on timer expiry.
    ///
    /// # Returns
    /// * `true` if `id` belonged to this center and changed its state; stale ids return `false`.
    pub fn on_timer<S: Scheduler>(&mut self, scheduler: &mut S, id: TimerId) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        self.timer = None;
        let visible = self.current.as_ref().is_some_and(Notification::is_visible);
        if visible {
            if let Some(notification) = self.current.as_mut() {
                notification.phase = NotificationPhase::FadingOut;
            }
            self.timer = Some(scheduler.schedule(self.fade));
        } else {
            self.current = None;
        }
        true
    }

    fn cancel_timer<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.timer.take() {
            scheduler.cancel(id);
        }
    }
}
