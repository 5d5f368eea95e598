//! Append-only inventory store.

use crate::model::{Item, ItemId};

/// Ordered collection of every item added during the session.
///
/// Items keep their insertion order and are never reordered, edited or removed.
/// Identical items may appear more than once.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: Vec<Item>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item at the end and return its id.
    pub fn append(&mut self, item: Item) -> ItemId {
        let id = ItemId::new(self.items.len());
        log::info!(
            "📦 Added item {} '{}' ({}, {} images)",
            id,
            item.name(),
            item.category(),
            item.image_count()
        );
        self.items.push(item);
        id
    }

    /// All items in insertion order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index())
    }

    /// Id of the item at `index`, if the store has one there.
    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        (index < self.items.len()).then(|| ItemId::new(index))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        id.index() < self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items paired with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId::new(index), item))
    }

    /// End the store's lifetime, handing back its items.
    pub fn teardown(self) -> Vec<Item> {
        log::debug!("Tearing down store with {} items", self.items.len());
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ImageHandle};

    fn item(name: &str, extra: usize) -> Item {
        Item::new(
            name,
            format!("{} description", name),
            Category::Shirt,
            ImageHandle::new(format!("blob:test/{}-cover", name)),
            (0..extra)
                .map(|i| ImageHandle::new(format!("blob:test/{}-{}", name, i)))
                .collect(),
        )
    }

    #[test]
    fn test_empty_store() {
        let store = InventoryStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert!(!store.contains(ItemId::new(0)));
        assert_eq!(store.id_at(0), None);
    }

    #[test]
    fn test_append_preserves_call_order() {
        let mut store = InventoryStore::new();
        let names = ["a", "b", "c", "d"];
        let ids: Vec<ItemId> = names.iter().map(|n| store.append(item(n, 1))).collect();

        assert_eq!(store.len(), names.len());
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(store.get(*id).map(Item::name), Some(names[i]));
        }
        let listed: Vec<&str> = store.list().iter().map(Item::name).collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_append_does_not_touch_existing_items() {
        let mut store = InventoryStore::new();
        store.append(item("first", 2));
        let before = store.list()[0].clone();

        store.append(item("second", 0));
        store.append(item("third", 5));

        assert_eq!(store.list()[0], before);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = InventoryStore::new();
        let a = store.append(item("same", 0));
        let b = store.append(item("same", 0));

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(a), store.get(b));
    }

    #[test]
    fn test_iter_pairs_ids_with_items() {
        let mut store = InventoryStore::new();
        store.append(item("x", 0));
        store.append(item("y", 0));

        let pairs: Vec<(usize, &str)> = store
            .iter()
            .map(|(id, item)| (id.index(), item.name()))
            .collect();
        assert_eq!(pairs, vec![(0, "x"), (1, "y")]);
    }

    #[test]
    fn test_teardown_returns_items_in_order() {
        let mut store = InventoryStore::new();
        store.append(item("x", 0));
        store.append(item("y", 3));

        let items = store.teardown();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].image_count(), 4);
    }
}
