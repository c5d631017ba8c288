// src/backend/storage/mod.rs
// Durable key-value slots backing the stamp card

pub mod memory;
pub mod slot;
pub mod slots;

// Re-export key storage types for easier access
pub use memory::CardMemory;
pub use slot::DurableSlot;
pub use slots::{StableSlotStore, MAX_KEY_BYTES};
