// src/backend/storage/memory.rs
use ic_stable_structures::memory_manager::{MemoryId, MemoryManager, VirtualMemory};
use ic_stable_structures::Memory;

// Memory IDs for stable structures. Keep them non-overlapping.
const SLOTS_MEM_ID: MemoryId = MemoryId::new(0);
// Reserve IDs 1-9 for future use

/// Splits one backing memory into the virtual memories used by the stamp card.
pub struct CardMemory<M: Memory> {
    manager: MemoryManager<M>,
}

impl<M: Memory> CardMemory<M> {
    /// Initializes the memory manager. Existing layouts in `memory` are reopened, not wiped.
    pub fn init(memory: M) -> Self {
        Self {
            manager: MemoryManager::init(memory),
        }
    }

    /// Get memory instance for a specific MemoryId.
    pub fn get(&self, id: MemoryId) -> VirtualMemory<M> {
        self.manager.get(id)
    }

    /// Memory backing the key-value slots.
    pub fn slots(&self) -> VirtualMemory<M> {
        self.get(SLOTS_MEM_ID)
    }
}
