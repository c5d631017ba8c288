// src/backend/services/mod.rs

pub mod access_gate;
pub mod entry_point;
pub mod notifier;
pub mod qr_materializer;
pub mod stamp_store;
pub mod view_controller;

pub use access_gate::{AccessGate, PasswordPrompt};
pub use entry_point::{EntryPoint, EntryPointResolver, Navigation};
pub use notifier::{NotificationCenter, Scheduler};
pub use qr_materializer::{QrEncoder, QrMaterializer, SvgQrEncoder};
pub use stamp_store::{AddOutcome, StampStore};
pub use view_controller::{QrPanel, StampCardController};
