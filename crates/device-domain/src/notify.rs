//! Operator Feedback Capabilities
//!
//! Notifications and confirmations are injected into the controller so the
//! page logic never reaches for browser globals.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A transient message for the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// Fire-and-forget notification display
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Synchronous yes/no question for destructive actions
pub trait ConfirmationPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<T: NotificationSink + ?Sized> NotificationSink for Rc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<T: ConfirmationPrompt + ?Sized> ConfirmationPrompt for Rc<T> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Discards every notification
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SilentSink;

#[cfg(test)]
impl NotificationSink for SilentSink {
    fn notify(&self, _notification: Notification) {}
}

/// Answers every prompt with the same value
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct AutoConfirm(pub bool);

#[cfg(test)]
impl ConfirmationPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
