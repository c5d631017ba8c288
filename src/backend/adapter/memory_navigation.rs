// src/backend/adapter/memory_navigation.rs
use crate::error::StampError;
use crate::services::entry_point::Navigation;

/// Navigation context held in memory. Records every history replacement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryNavigation {
    href: String,
    replacements: Vec<String>,
}

impl MemoryNavigation {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            replacements: Vec::new(),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// URLs passed to `replace_url`, oldest first.
    pub fn replacements(&self) -> &[String] {
        &self.replacements
    }
}

impl Navigation for MemoryNavigation {
    fn current_url(&self) -> Result<String, StampError> {
        Ok(self.href.clone())
    }

    fn replace_url(&mut self, url: &str) -> Result<(), StampError> {
        self.href = url.to_string();
        self.replacements.push(url.to_string());
        Ok(())
    }
}
