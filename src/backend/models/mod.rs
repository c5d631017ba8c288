pub mod common;
pub mod notification;
pub mod qr_code;
pub mod screen;
pub mod stamp_set;

// Re-export common types/enums for easier access
pub use common::*;
pub use notification::Notification;
pub use qr_code::{EncodedImage, QrCodeRecord};
pub use screen::Screen;
pub use stamp_set::StampSet;
