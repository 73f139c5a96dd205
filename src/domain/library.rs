//! Owned library items.

use serde::{Deserialize, Serialize};

/// Name used when the library service omits a title
pub const UNKNOWN_NAME: &str = "Unknown";

/// One game owned by an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedItem {
    /// Store application id (if reported)
    pub app_id: Option<u64>,

    /// Title as reported by the library service
    pub name: String,

    /// Accumulated playtime in minutes
    pub usage_minutes: u64,
}

impl OwnedItem {
    pub fn new(name: impl Into<String>, usage_minutes: u64) -> Self {
        Self {
            app_id: None,
            name: name.into(),
            usage_minutes,
        }
    }

    /// Attach the store application id
    pub fn with_app_id(mut self, app_id: u64) -> Self {
        self.app_id = Some(app_id);
        self
    }
}
