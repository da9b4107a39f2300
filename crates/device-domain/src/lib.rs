//! Device Admin Domain
//!
//! Layered the same way as the page uses it:
//! - domain: item types, items, drafts and field labels
//! - store: in-memory item collection
//! - controller: dialog state machine wiring drafts into the store
//! - notify / clock: capabilities injected into the controller

pub mod domain;
pub mod store;
pub mod controller;
pub mod notify;
pub mod clock;
pub mod config;


pub use config::AdminConfig;
pub use controller::{DeleteOutcome, DialogState, PageController, SubmitOutcome};
pub use domain::{DeviceItem, DomainError, DomainResult, Draft, DraftResetPolicy, FieldLabels, ItemId, ItemType};
pub use notify::{ConfirmationPrompt, Notification, NotificationSink, Severity};
pub use store::ItemStore;
