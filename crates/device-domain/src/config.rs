//! Page Configuration
//!
//! Optional JSON overrides; every field has a default.

use tracing::Level;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, DraftResetPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// Oldest toasts are dropped beyond this many
    pub max_toasts: usize,
    pub draft_reset: DraftResetPolicy,
    /// One of error/warn/info/debug/trace
    pub log_level: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5000,
            max_toasts: 3,
            draft_reset: DraftResetPolicy::Always,
            log_level: "info".to_string(),
        }
    }
}

impl AdminConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidInput(format!("config: {}", e)))
    }

    /// Most verbose level to emit; unknown names fall back to info
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
