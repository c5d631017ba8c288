// src/backend/config.rs
use crate::error::StampError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::{Validate, ValidationErrors};

// Default values, matching the deployed stamp card
pub const DEFAULT_TOTAL_STAMPS: u32 = 6;
pub const DEFAULT_STORAGE_KEY: &str = "myStamps";
pub const DEFAULT_ADMIN_SECRET: &str = "423609";
pub const DEFAULT_BASE_URL: &str = "https://digistampv3.netlify.app/";
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u64 = 3_000;
pub const DEFAULT_NOTIFICATION_FADE_MS: u64 = 300;
pub const DEFAULT_QR_SIZE_PX: u32 = 256;

/// Upper bound on stamp points. Keeps the card and the QR batch small.
pub const MAX_TOTAL_STAMPS: u32 = 64;

/// Top-level configuration for a stamp card.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct StampCardConfig {
    /// Number of stamp points (N). Valid identifiers are `1..=N`.
    #[validate(range(min = 1, max = 64))]
    pub total_stamps: u32,
    /// Key of the durable slot holding the collected stamps.
    #[validate(length(min = 1, max = 64))]
    pub storage_key: String,
    /// Secret guarding the QR screen. Compared verbatim, never hashed.
    #[validate(length(min = 1))]
    pub admin_secret: String,
    /// Collection URL the QR codes point at; `?point={n}` is appended.
    #[validate(url)]
    pub base_url: String,
    #[validate(nested)]
    pub notification: NotificationConfig,
    #[validate(nested)]
    pub qr: QrPresentation,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct NotificationConfig {
    #[validate(range(min = 1))]
    pub display_ms: u64,
    pub fade_ms: u64,
}

/// Presentation settings for generated QR images. They do not change the payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct QrPresentation {
    pub error_correction: ErrorCorrection,
    #[validate(range(min = 21, max = 2048))]
    pub size_px: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    H,
}

impl Default for StampCardConfig {
    fn default() -> Self {
        Self {
            total_stamps: DEFAULT_TOTAL_STAMPS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            admin_secret: DEFAULT_ADMIN_SECRET.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            notification: NotificationConfig::default(),
            qr: QrPresentation::default(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: DEFAULT_NOTIFICATION_DISPLAY_MS,
            fade_ms: DEFAULT_NOTIFICATION_FADE_MS,
        }
    }
}

impl Default for QrPresentation {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::H,
            size_px: DEFAULT_QR_SIZE_PX,
        }
    }
}

impl NotificationConfig {
    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl StampCardConfig {
    /// Parses a JSON configuration document and validates it.
    /// Missing fields fall back to the defaults.
    pub fn from_json(raw: &str) -> Result<Self, StampError> {
        let config: StampCardConfig = serde_json::from_str(raw)
            .map_err(|e| StampError::InvalidConfig(format!("malformed config: {}", e)))?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Validates a configuration, mapping validator errors into `StampError::InvalidConfig`.
pub fn validate_config(config: &StampCardConfig) -> Result<(), StampError> {
    config
        .validate()
        .map_err(|e: ValidationErrors| StampError::InvalidConfig(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StampCardConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.total_stamps, 6);
        assert_eq!(config.storage_key, "myStamps");
        assert_eq!(config.notification.display_duration(), Duration::from_millis(3000));
        assert_eq!(config.notification.fade_duration(), Duration::from_millis(300));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = StampCardConfig::from_json(r#"{"total_stamps": 10}"#).unwrap();
        assert_eq!(config.total_stamps, 10);
        assert_eq!(config.admin_secret, DEFAULT_ADMIN_SECRET);
        assert_eq!(config.qr.error_correction, ErrorCorrection::H);
    }

    #[test]
    fn rejects_zero_stamps() {
        let err = StampCardConfig::from_json(r#"{"total_stamps": 0}"#).unwrap_err();
        assert!(matches!(err, StampError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_too_many_stamps() {
        let config = StampCardConfig {
            total_stamps: MAX_TOTAL_STAMPS + 1,
            ..StampCardConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_non_url_base() {
        let err = StampCardConfig::from_json(r#"{"base_url": "not a url"}"#).unwrap_err();
        assert!(matches!(err, StampError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            StampCardConfig::from_json("{"),
            Err(StampError::InvalidConfig(_))
        ));
    }
}
