// src/backend/models/screen.rs
// Serializable render models handed to the host UI.

use crate::models::common::StampId;
use crate::models::notification::Notification;
use crate::models::qr_code::QrCodeRecord;
use serde::{Deserialize, Serialize};

pub const HEADER_TITLE: &str = "My Digital Stamp Book";
pub const HEADER_SUBTITLE: &str = "Scan the QR codes to collect every stamp!";
pub const COMPLETION_TITLE: &str = "Congratulations!";
pub const COMPLETION_BODY: &str = "You have collected every stamp!";
pub const SHOW_QR_LABEL: &str = "Show QR codes (password required)";
pub const RESET_LABEL: &str = "Reset stamp record";
pub const QR_TITLE: &str = "QR Code Generator";
pub const QR_LOADING_TEXT: &str = "Generating QR codes...";
pub const BACK_LABEL: &str = "Back";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Stamps(StampsScreen),
    Qr(QrScreen),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StampsScreen {
    pub title: String,
    pub subtitle: String,
    pub slots: Vec<StampSlot>,
    pub completion_banner: Option<CompletionBanner>,
    pub show_qr_label: String,
    pub reset_label: String,
    pub password_prompt: Option<PasswordPromptView>,
    pub notification: Option<Notification>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StampSlot {
    pub number: StampId,
    pub stamped: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CompletionBanner {
    pub title: String,
    pub body: String,
}

/// Modal state. The typed input is exposed only as its length.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PasswordPromptView {
    pub input_len: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QrScreen {
    pub title: String,
    pub back_label: String,
    pub panel: QrPanelView,
    pub notification: Option<Notification>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QrPanelView {
    Loading { text: String },
    Ready { cards: Vec<QrCard> },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QrCard {
    pub id: StampId,
    pub label: String,
    pub url: String,
    pub image_src: String,
    pub download_name: String,
}

impl From<&QrCodeRecord> for QrCard {
    fn from(record: &QrCodeRecord) -> Self {
        Self {
            id: record.id,
            label: format!("Stamp point {}", record.id),
            url: record.url.clone(),
            image_src: record.data_url(),
            download_name: record.download_file_name(),
        }
    }
}
