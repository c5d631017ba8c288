// src/backend/error.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Error, Debug, Clone, PartialEq, Eq)]
pub enum StampError {
    #[error("invalid stamp point: {0}")]
    InvalidStampPoint(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("QR encoding error: {0}")]
    EncodingError(String),

    #[error("Navigation error: {0}")]
    NavigationError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Entry point resolved before stamps were hydrated")]
    NotHydrated,
}

impl From<serde_json::Error> for StampError {
    fn from(e: serde_json::Error) -> Self {
        StampError::SerializationError(e.to_string())
    }
}
