// src/backend/adapter/manual_clock.rs
use crate::models::TimerId;
use crate::services::notifier::Scheduler;
use std::collections::BTreeMap;
use std::time::Duration;

/// Scheduler driven by a virtual clock. Native hosts and tests advance time
/// explicitly and feed due timers back to the controller.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: TimerId,
    deadlines: BTreeMap<TimerId, Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that are scheduled and not cancelled.
    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Removes the earliest timer due at or before `until` and moves the clock to
    /// its deadline. Timers scheduled in response are therefore measured from the
    /// moment the expired one fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let (id, deadline) = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= until)
            .min_by_key(|(id, deadline)| (**deadline, **id))
            .map(|(id, deadline)| (*id, *deadline))?;
        self.deadlines.remove(&id);
        self.now = self.now.max(deadline);
        Some(id)
    }

    /// Moves the clock forward without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        self.deadlines.insert(self.next_id, self.now + delay);
        self.next_id
    }

    fn cancel(&mut self, id: TimerId) {
        self.deadlines.remove(&id);
    }
}
