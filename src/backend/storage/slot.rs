// src/backend/storage/slot.rs
use crate::error::StampError;

/// A durable key-value slot: browser `localStorage`, stable memory, or a test double.
///
/// Writes overwrite the whole value for a key in one call; there are no partial writes.
pub trait DurableSlot {
    /// Reads the value stored under `key`, `Ok(None)` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StampError>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StampError>;
}
