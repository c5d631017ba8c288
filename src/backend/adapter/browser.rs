// src/backend/adapter/browser.rs
// Browser bindings: localStorage slot and window.location/history navigation

use crate::error::StampError;
use crate::services::entry_point::Navigation;
use crate::storage::DurableSlot;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

fn js_error(context: &str, value: JsValue) -> String {
    format!("{}: {:?}", context, value)
}

fn window() -> Result<Window, StampError> {
    web_sys::window()
        .ok_or_else(|| StampError::NavigationError("No global window available".to_string()))
}

/// `window.localStorage` as a durable slot.
pub struct LocalStorageSlot {
    storage: Storage,
}

impl LocalStorageSlot {
    pub fn from_window() -> Result<Self, StampError> {
        let storage = window()?
            .local_storage()
            .map_err(|e| StampError::StorageError(js_error("localStorage unavailable", e)))?
            .ok_or_else(|| StampError::StorageError("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl DurableSlot for LocalStorageSlot {
    fn get(&self, key: &str) -> Result<Option<String>, StampError> {
        self.storage
            .get_item(key)
            .map_err(|e| StampError::StorageError(js_error("getItem failed", e)))
    }

    // Quota errors surface here as a thrown DOMException.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StampError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StampError::StorageError(js_error("setItem failed", e)))
    }
}

/// The page's own address bar.
pub struct BrowserNavigation {
    window: Window,
}

impl BrowserNavigation {
    pub fn from_window() -> Result<Self, StampError> {
        Ok(Self { window: window()? })
    }
}

impl Navigation for BrowserNavigation {
    fn current_url(&self) -> Result<String, StampError> {
        self.window
            .location()
            .href()
            .map_err(|e| StampError::NavigationError(js_error("location.href failed", e)))
    }

    fn replace_url(&mut self, url: &str) -> Result<(), StampError> {
        self.window
            .history()
            .map_err(|e| StampError::NavigationError(js_error("history unavailable", e)))?
            .replace_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(|e| StampError::NavigationError(js_error("history.replaceState failed", e)))
    }
}
