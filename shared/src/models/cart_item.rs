//! Cart Item Model

use serde::{Deserialize, Serialize};

use super::MenuItem;

/// Aggregated cart line for a single menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Menu item reference
    pub id: i64,
    /// Name snapshot
    pub name: String,
    /// Unit price snapshot
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart line from a menu item
    pub fn from_menu_item(item: &MenuItem, quantity: u32) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity,
        }
    }

    /// Unit price times quantity (float, display only)
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
