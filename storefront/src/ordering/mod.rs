//! Order placement and cart removal
//!
//! Stock and cart quantity move in lockstep: for every menu item,
//! `stock + cart quantity` is the same before and after each operation.
//! A rejected operation leaves both stores untouched.

use shared::models::CartItem;
use thiserror::Error;

use crate::cart::CartStore;
use crate::menu::MenuStore;

/// Maximum quantity accepted in a single order
pub const MAX_QUANTITY: u32 = 9999;

/// Ordering errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Quantity {requested} exceeds stock {stock} for item {item_id}")]
    ExceedsStock {
        item_id: i64,
        requested: u32,
        stock: u32,
    },

    #[error("Menu item not found: {0}")]
    ItemNotFound(i64),

    #[error("Cart line not found: {0}")]
    CartLineNotFound(i64),
}

/// Result of a successful order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedOrder {
    pub item_id: i64,
    pub quantity: u32,
    /// Stock left after the order
    pub remaining_stock: u32,
    /// Cart quantity for the item after the order
    pub cart_quantity: u32,
}

/// Validate a requested quantity: finite, whole, positive, bounded
pub fn validate_quantity(requested: f64) -> Result<u32, OrderError> {
    if !requested.is_finite() {
        return Err(OrderError::InvalidQuantity(format!(
            "must be a finite number, got {}",
            requested
        )));
    }
    if requested <= 0.0 {
        return Err(OrderError::InvalidQuantity(format!(
            "must be positive, got {}",
            requested
        )));
    }
    if requested.fract() != 0.0 {
        return Err(OrderError::InvalidQuantity(format!(
            "must be a whole number, got {}",
            requested
        )));
    }
    if requested > f64::from(MAX_QUANTITY) {
        return Err(OrderError::InvalidQuantity(format!(
            "exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, requested
        )));
    }
    Ok(requested as u32)
}

/// Move `requested` units of an item from stock into the cart
pub fn place_order(
    menu: &mut MenuStore,
    cart: &mut CartStore,
    item_id: i64,
    requested: f64,
) -> Result<PlacedOrder, OrderError> {
    let quantity = validate_quantity(requested)?;

    // Always check against the live stock, not a copy held by the view
    let item = menu
        .get(item_id)
        .cloned()
        .ok_or(OrderError::ItemNotFound(item_id))?;
    if quantity > item.quantity {
        return Err(OrderError::ExceedsStock {
            item_id,
            requested: quantity,
            stock: item.quantity,
        });
    }

    let remaining_stock = menu
        .take_stock(item_id, quantity)
        .ok_or(OrderError::ExceedsStock {
            item_id,
            requested: quantity,
            stock: item.quantity,
        })?;
    let cart_quantity = cart.add(&item, quantity);

    Ok(PlacedOrder {
        item_id,
        quantity,
        remaining_stock,
        cart_quantity,
    })
}

/// Remove a whole cart line and return its quantity to stock
pub fn remove_from_cart(
    menu: &mut MenuStore,
    cart: &mut CartStore,
    id: i64,
) -> Result<CartItem, OrderError> {
    let line = cart.remove(id).ok_or(OrderError::CartLineNotFound(id))?;
    if menu.restock(id, line.quantity).is_none() {
        // Lines are only created from menu items, which are never deleted
        tracing::error!(item_id = id, "Cart line without menu item; quantity not restored");
    }
    Ok(line)
}

#[cfg(test)]
mod tests;
