//! Device Item Entity
//!
//! A single typed piece of device metadata added by the operator.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::item_type::ItemType;

/// Identifier handed out by the controller's monotonic counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out strictly increasing ids, starting at 1
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ItemId {
        self.last += 1;
        ItemId(self.last)
    }
}

/// A device metadata item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceItem {
    /// Unique within the page's lifetime
    pub id: ItemId,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Never empty for items created through the controller
    pub name: String,
    /// Empty when the operator left the field blank
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// RFC 3339 UTC, millisecond precision
    pub created_at: String,
}

impl DeviceItem {
    pub fn new(id: ItemId, item_type: ItemType, name: String, created_at: String) -> Self {
        Self {
            id,
            item_type,
            name,
            value: String::new(),
            description: None,
            created_at,
        }
    }

    pub fn with_value(mut self, value: String) -> Self {
        self.value = value;
        self
    }

    /// Blank descriptions are stored as absent
    pub fn with_description(mut self, description: String) -> Self {
        self.description = if description.is_empty() { None } else { Some(description) };
        self
    }

    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }
}

impl Entity for DeviceItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
