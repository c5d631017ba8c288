// src/backend/adapter/mod.rs
// Host adapters for the controller's seams

#[cfg(feature = "web")]
pub mod browser;
pub mod manual_clock;
pub mod memory_navigation;

#[cfg(feature = "web")]
pub use browser::{BrowserNavigation, LocalStorageSlot};
pub use manual_clock::ManualScheduler;
pub use memory_navigation::MemoryNavigation;
