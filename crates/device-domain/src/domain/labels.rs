//! Field Labels
//!
//! Prompts shown next to the three inputs of an add-item dialog.

use super::item_type::ItemType;

/// Placeholder for the optional description input
pub const DESCRIPTION_PLACEHOLDER: &str = "Enter description (optional)";

/// Display labels for the name / value / description inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabels {
    pub name: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

impl FieldLabels {
    /// Used for tags that do not name a known item type
    pub const GENERIC: FieldLabels = FieldLabels {
        name: "Name",
        value: "Value",
        description: "Description",
    };

    /// Resolve labels from a raw type tag, falling back to [`FieldLabels::GENERIC`]
    pub fn resolve(tag: &str) -> FieldLabels {
        tag.parse::<ItemType>()
            .map(|t| t.field_labels())
            .unwrap_or(FieldLabels::GENERIC)
    }

    pub fn name_placeholder(&self) -> String {
        placeholder_for(self.name)
    }

    pub fn value_placeholder(&self) -> String {
        placeholder_for(self.value)
    }
}

impl ItemType {
    pub fn field_labels(&self) -> FieldLabels {
        let (name, value, description) = match self {
            ItemType::Brand => ("Brand Name", "Manufacturer", "Description"),
            ItemType::Model => ("Model Name", "Model Code", "Specifications"),
            ItemType::Category => ("Category Name", "Category Code", "Description"),
            ItemType::Tag => ("Tag Name", "Tag ID", "Description"),
            ItemType::Media => ("Media Name", "Media URL", "Description"),
            ItemType::Url => ("URL Name", "URL Link", "Description"),
        };
        FieldLabels { name, value, description }
    }
}

/// "Enter " followed by the lower-cased label
pub fn placeholder_for(label: &str) -> String {
    format!("Enter {}", label.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table() {
        let model = ItemType::Model.field_labels();
        assert_eq!(model.name, "Model Name");
        assert_eq!(model.value, "Model Code");
        assert_eq!(model.description, "Specifications");

        let tag = ItemType::Tag.field_labels();
        assert_eq!((tag.name, tag.value), ("Tag Name", "Tag ID"));

        let url = ItemType::Url.field_labels();
        assert_eq!((url.name, url.value), ("URL Name", "URL Link"));
    }

    #[test]
    fn test_every_type_has_specific_labels() {
        for t in ItemType::ALL {
            assert_ne!(t.field_labels(), FieldLabels::GENERIC);
        }
    }

    #[test]
    fn test_resolve_falls_back_to_generic() {
        assert_eq!(FieldLabels::resolve("media"), ItemType::Media.field_labels());
        assert_eq!(FieldLabels::resolve("firmware"), FieldLabels::GENERIC);
        assert_eq!(FieldLabels::resolve(""), FieldLabels::GENERIC);
    }

    #[test]
    fn test_placeholders() {
        let labels = ItemType::Media.field_labels();
        assert_eq!(labels.name_placeholder(), "Enter media name");
        assert_eq!(labels.value_placeholder(), "Enter media url");
    }
}
