// src/backend/storage/slots.rs
use crate::error::StampError;
use crate::storage::memory::CardMemory;
use crate::storage::slot::DurableSlot;
use ic_stable_structures::memory_manager::VirtualMemory;
use ic_stable_structures::storable::Blob;
use ic_stable_structures::{Memory, StableBTreeMap};

/// Maximum key length in bytes.
pub const MAX_KEY_BYTES: usize = 64;

type SlotKey = Blob<MAX_KEY_BYTES>;

/// Durable slots kept in stable-structures memory.
///
/// With `VectorMemory` this is an in-process store whose memory handle can be
/// cloned and reopened to simulate a page reload. With a `FileMemory` it
/// survives process restarts.
pub struct StableSlotStore<M: Memory> {
    slots: StableBTreeMap<SlotKey, String, VirtualMemory<M>>,
    quota_bytes: Option<usize>,
}

impl<M: Memory> StableSlotStore<M> {
    /// Opens (or creates) the slot map inside `memory`.
    pub fn init(memory: M) -> Self {
        let card_memory = CardMemory::init(memory);
        Self {
            slots: StableBTreeMap::init(card_memory.slots()),
            quota_bytes: None,
        }
    }

    /// Caps the total size of stored values, like a browser storage quota.
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    /// Total bytes of all stored values.
    pub fn used_bytes(&self) -> usize {
        self.slots.iter().map(|(_, value)| value.len()).sum()
    }

    pub fn len(&self) -> u64 {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn key(key: &str) -> Result<SlotKey, StampError> {
        SlotKey::try_from(key.as_bytes()).map_err(|_| {
            StampError::StorageError(format!(
                "Slot key '{}' exceeds {} bytes",
                key, MAX_KEY_BYTES
            ))
        })
    }
}

impl<M: Memory> DurableSlot for StableSlotStore<M> {
    fn get(&self, key: &str) -> Result<Option<String>, StampError> {
        Ok(self.slots.get(&Self::key(key)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StampError> {
        let slot_key = Self::key(key)?;
        if let Some(quota) = self.quota_bytes {
            let previous = self.slots.get(&slot_key).map(|v| v.len()).unwrap_or(0);
            let projected = self.used_bytes() - previous + value.len();
            if projected > quota {
                return Err(StampError::StorageError(format!(
                    "Quota exceeded: {} bytes requested, {} allowed",
                    projected, quota
                )));
            }
        }
        self.slots.insert(slot_key, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ic_stable_structures::VectorMemory;

    #[test]
    fn missing_key_reads_none() {
        let store = StableSlotStore::init(VectorMemory::default());
        assert_eq!(store.get("myStamps"), Ok(None));
        assert!(store.is_empty());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = StableSlotStore::init(VectorMemory::default());
        store.set("myStamps", "[1]").unwrap();
        store.set("myStamps", "[1,2]").unwrap();
        assert_eq!(store.get("myStamps").unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn values_survive_reopening_the_memory() {
        let memory = VectorMemory::default();
        {
            let mut store = StableSlotStore::init(memory.clone());
            store.set("myStamps", "[2,5]").unwrap();
        }
        let reopened = StableSlotStore::init(memory);
        assert_eq!(reopened.get("myStamps").unwrap().as_deref(), Some("[2,5]"));
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() {
        let mut store = StableSlotStore::init(VectorMemory::default()).with_quota(5);
        store.set("k", "[1,2]").unwrap();
        let err = store.set("k", "[1,2,3]").unwrap_err();
        assert!(matches!(err, StampError::StorageError(_)));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn overlong_key_is_an_error() {
        let mut store = StableSlotStore::init(VectorMemory::default());
        let key = "k".repeat(MAX_KEY_BYTES + 1);
        assert!(store.set(&key, "[]").is_err());
        assert!(store.get(&key).is_err());
    }
}
