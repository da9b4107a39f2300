//! Item Type
//!
//! The closed set of device metadata kinds an operator can add.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use super::entity::DomainError;

/// Item type determines dialog labels and the list section an item lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Brand,
    Model,
    Category,
    Tag,
    Media,
    Url,
}

impl ItemType {
    /// All types in display order (trigger buttons and list sections)
    pub const ALL: [ItemType; 6] = [
        ItemType::Brand,
        ItemType::Model,
        ItemType::Category,
        ItemType::Tag,
        ItemType::Media,
        ItemType::Url,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Brand => "brand",
            ItemType::Model => "model",
            ItemType::Category => "category",
            ItemType::Tag => "tag",
            ItemType::Media => "media",
            ItemType::Url => "url",
        }
    }

    /// Capitalized tag, e.g. "Brand"
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }

    /// Section heading, e.g. "Brands"
    pub fn plural_label(&self) -> String {
        format!("{}s", self.label())
    }
}

impl FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown item type: {}", s)))
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
