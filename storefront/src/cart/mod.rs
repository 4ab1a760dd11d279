//! Cart Store
//!
//! One line per menu item id; repeat orders add to the existing line.

use shared::models::{CartItem, MenuItem};

use crate::order_money;

#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartItem] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&CartItem> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Quantity held for a menu item (0 if absent)
    pub fn quantity_of(&self, id: i64) -> u32 {
        self.get(id).map(|line| line.quantity).unwrap_or(0)
    }

    /// Upsert a line for `item`; returns the line's new quantity
    pub fn add(&mut self, item: &MenuItem, quantity: u32) -> u32 {
        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                line.quantity += quantity;
                line.quantity
            }
            None => {
                self.lines.push(CartItem::from_menu_item(item, quantity));
                quantity
            }
        }
    }

    /// Remove a whole line
    pub fn remove(&mut self, id: i64) -> Option<CartItem> {
        let index = self.lines.iter().position(|line| line.id == id)?;
        Some(self.lines.remove(index))
    }

    /// Sum of price x quantity over all lines
    pub fn total(&self) -> f64 {
        order_money::cart_total(&self.lines)
    }
}
