//! Domain Layer
//!
//! Entities and value types of the add-device page.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod item_type;
mod item;
mod labels;
mod draft;

pub use entity::{Entity, DomainError, DomainResult};
pub use item_type::{ItemType, capitalize};
pub use item::{DeviceItem, ItemId, IdGenerator};
pub use labels::{FieldLabels, placeholder_for, DESCRIPTION_PLACEHOLDER};
pub use draft::{Draft, DraftResetPolicy};
