// src/backend/models/common.rs
use serde::{Deserialize, Serialize};

pub type StampId = u32; // 1-based stamp point identifier
pub type TimerId = u64; // Handle returned by a Scheduler

/// Which of the two screens is active.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum ViewState {
    #[default]
    StampsView,
    QrView,
}

/// Startup barrier: entry-point resolution must wait for hydration.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum StartupPhase {
    #[default]
    Pending,  // Nothing loaded yet
    Hydrated, // Stamps loaded from the durable slot
    Resolved, // `?point=` handled for this page load
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum NotificationPhase {
    Visible,
    FadingOut,
}
