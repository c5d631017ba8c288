// src/backend/models/qr_code.rs
use crate::models::common::StampId;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

/// Encoded image bytes plus the MIME type they were rendered as.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// File extension matching the MIME type, used for download names.
    pub fn extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/svg+xml" => "svg",
            "image/png" => "png",
            _ => "bin",
        }
    }

    /// `data:` URL suitable for an `<img src>` or download link.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// One generated QR code for a stamp point. Lives only while the QR screen is open.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QrCodeRecord {
    pub id: StampId,
    /// Full collection URL; also the exact payload of the image.
    pub url: String,
    pub image: EncodedImage,
}

impl QrCodeRecord {
    pub fn download_file_name(&self) -> String {
        format!("stamp_point_{}.{}", self.id, self.image.extension())
    }

    pub fn data_url(&self) -> String {
        self.image.data_url()
    }
}
