// src/backend/services/stamp_store.rs
// Collected-stamp state and its persistence

use crate::{
    error::StampError,
    models::{StampId, StampSet},
    storage::DurableSlot,
};
use tracing::{debug, warn};

/// What an `add` call did to the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The stamp was new; carries its number for the success notification.
    Added(StampId),
    /// Already collected. Idempotent no-op, no notification.
    AlreadyCollected(StampId),
}

/// Owns the StampSet and writes it through to a durable slot on every change.
pub struct StampStore<D: DurableSlot> {
    slot: D,
    storage_key: String,
    stamps: StampSet,
}

impl<D: DurableSlot> StampStore<D> {
    /// Creates a store with an empty set. Call `load` to hydrate it.
    pub fn new(slot: D, storage_key: impl Into<String>, total_stamps: u32) -> Self {
        Self {
            slot,
            storage_key: storage_key.into(),
            stamps: StampSet::empty(total_stamps),
        }
    }

    /// Hydrates the set from the durable slot.
    ///
    /// Missing or malformed data yields the empty set; the problem is logged, never returned.
    pub fn load(&mut self) -> &StampSet {
        let total = self.stamps.total();
        self.stamps = match self.read_persisted() {
            Ok(Some(values)) => {
                let (set, rejected) = StampSet::from_persisted(total, &values);
                if !rejected.is_empty() {
                    warn!(
                        key = %self.storage_key,
                        ?rejected,
                        "Dropped persisted stamp points outside 1..={}",
                        total
                    );
                }
                set
            }
            Ok(None) => StampSet::empty(total),
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "Failed to load stamps; starting empty");
                StampSet::empty(total)
            }
        };
        debug!(stamps = ?self.stamps.to_vec(), "Stamps hydrated");
        &self.stamps
    }

    /// Adds a stamp point. Adding an already-collected point changes nothing and
    /// does not touch the durable slot.
    ///
    /// # Errors
    /// `StampError::InvalidStampPoint` if `id` is outside `1..=N`. Callers validate
    /// first, so this only guards the set invariant.
    pub fn add(&mut self, id: StampId) -> Result<AddOutcome, StampError> {
        if !self.stamps.insert(id)? {
            debug!(id, "Stamp already collected");
            return Ok(AddOutcome::AlreadyCollected(id));
        }
        self.persist();
        Ok(AddOutcome::Added(id))
    }

    /// Clears every stamp and persists the empty set.
    pub fn reset(&mut self) -> &StampSet {
        self.stamps.clear();
        self.persist();
        &self.stamps
    }

    pub fn stamps(&self) -> &StampSet {
        &self.stamps
    }

    pub fn is_complete(&self) -> bool {
        self.stamps.is_complete()
    }

    pub fn total(&self) -> u32 {
        self.stamps.total()
    }

    pub fn slot(&self) -> &D {
        &self.slot
    }

    pub fn into_slot(self) -> D {
        self.slot
    }

    fn read_persisted(&self) -> Result<Option<Vec<i64>>, StampError> {
        match self.slot.get(&self.storage_key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    // Write failures leave the in-memory set as is.
    fn persist(&mut self) {
        let result = serde_json::to_string(&self.stamps.to_vec())
            .map_err(StampError::from)
            .and_then(|json| self.slot.set(&self.storage_key, &json));
        if let Err(e) = result {
            warn!(key = %self.storage_key, error = %e, "Failed to persist stamps");
        }
    }
}
