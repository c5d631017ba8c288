// src/backend/lib.rs
//! Stamp card core: collected-stamp state, landing-URL handling, the admin QR
//! screen and transient notifications. Hosts plug in storage, navigation and
//! timers through the traits re-exported here.

pub mod adapter;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use config::StampCardConfig;
pub use error::StampError;
pub use models::{Screen, StampId, StampSet, ViewState};
pub use services::{
    AddOutcome, EntryPoint, Navigation, QrEncoder, Scheduler, StampCardController,
};
pub use storage::{DurableSlot, StableSlotStore};
