//! Item Store
//!
//! In-memory, insertion-ordered collection of device items.
//! Lives only as long as the page; nothing is persisted.

use crate::domain::{DeviceItem, Entity, ItemId, ItemType};

/// Ordered collection of every item added on the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<DeviceItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, keeping insertion order
    pub fn add(&mut self, item: DeviceItem) {
        self.items.push(item);
    }

    /// Remove the item with `id`; absent ids are a no-op
    pub fn remove(&mut self, id: ItemId) -> Option<DeviceItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: ItemId) -> Option<&DeviceItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items of one type in insertion order. The iterator is lazy and can be
    /// cloned to walk the view again.
    pub fn list_by_type(&self, item_type: ItemType) -> impl Iterator<Item = &DeviceItem> + Clone + '_ {
        self.items.iter().filter(move |item| item.item_type == item_type)
    }

    /// Types that have at least one item, in [`ItemType::ALL`] order
    pub fn group_types(&self) -> Vec<ItemType> {
        ItemType::ALL
            .into_iter()
            .filter(|&t| self.list_by_type(t).next().is_some())
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeviceItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, item_type: ItemType, name: &str) -> DeviceItem {
        DeviceItem::new(ItemId(id), item_type, name.to_string(), "2026-10-19T00:00:00.000Z".to_string())
    }

    #[test]
    fn test_add_preserves_order() {
        let mut store = ItemStore::new();
        store.add(item(1, ItemType::Brand, "Acme"));
        store.add(item(2, ItemType::Brand, "Globex"));
        let names: Vec<_> = store.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Acme", "Globex"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = ItemStore::new();
        store.add(item(1, ItemType::Tag, "wifi"));
        let before = store.clone();
        assert!(store.remove(ItemId(99)).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_returns_item() {
        let mut store = ItemStore::new();
        store.add(item(1, ItemType::Tag, "wifi"));
        store.add(item(2, ItemType::Tag, "zigbee"));
        let removed = store.remove(ItemId(1)).expect("item 1 present");
        assert_eq!(removed.name, "wifi");
        assert!(store.get(ItemId(1)).is_none());
        assert_eq!(store.get(ItemId(2)).map(|i| i.name.as_str()), Some("zigbee"));
    }

    #[test]
    fn test_list_by_type_filters_in_order() {
        let mut store = ItemStore::new();
        store.add(item(1, ItemType::Brand, "Acme"));
        store.add(item(2, ItemType::Model, "X1"));
        store.add(item(3, ItemType::Brand, "Globex"));
        store.add(item(4, ItemType::Url, "Docs"));
        store.add(item(5, ItemType::Brand, "Initech"));

        let brands = store.list_by_type(ItemType::Brand);
        let ids: Vec<_> = brands.clone().map(|i| i.id.0).collect();
        assert_eq!(ids, [1, 3, 5]);
        // restartable
        assert_eq!(brands.count(), 3);
        assert_eq!(store.list_by_type(ItemType::Media).count(), 0);
    }

    #[test]
    fn test_groups_skip_empty_types() {
        let mut store = ItemStore::new();
        store.add(item(1, ItemType::Url, "Docs"));
        store.add(item(2, ItemType::Brand, "Acme"));
        assert_eq!(store.group_types(), [ItemType::Brand, ItemType::Url]);
        assert!(ItemStore::new().group_types().is_empty());
    }
}
