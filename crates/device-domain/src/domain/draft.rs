//! Form Draft
//!
//! Input collected by one open add-item dialog.

use serde::{Deserialize, Serialize};

/// Uncommitted form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub value: String,
    pub description: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: description.into(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Draft::default();
    }
}

/// When the form clears its inputs after a submit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftResetPolicy {
    /// Clear after every submit, accepted or not
    #[default]
    Always,
    /// Keep the input when the submit was rejected so it can be corrected
    OnAccept,
}

impl DraftResetPolicy {
    pub fn should_reset(&self, accepted: bool) -> bool {
        match self {
            DraftResetPolicy::Always => true,
            DraftResetPolicy::OnAccept => accepted,
        }
    }
}
