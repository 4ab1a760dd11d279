//! Menu Store
//!
//! In-memory menu with stock counts. Items are never added or removed after
//! seeding; only their stock moves.

use shared::models::{MenuItem, seed_menu};

#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Store loaded with the fixed seed menu
    pub fn seeded() -> Self {
        Self::new(seed_menu())
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Position of an item in display order
    pub fn index_of(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn stock(&self, id: i64) -> Option<u32> {
        self.get(id).map(|item| item.quantity)
    }

    /// Decrement stock; `None` if the item is unknown or stock is short.
    /// Returns the remaining stock.
    pub fn take_stock(&mut self, id: i64, quantity: u32) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.quantity = item.quantity.checked_sub(quantity)?;
        Some(item.quantity)
    }

    /// Increment stock; `None` if the item is unknown.
    pub fn restock(&mut self, id: i64, quantity: u32) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.quantity = item.quantity.saturating_add(quantity);
        Some(item.quantity)
    }
}
