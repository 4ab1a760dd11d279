//! Shared types for the storefront workspace
//!
//! Data model used by both the order feed and the storefront application,
//! plus small time and id helpers.

pub mod models;
pub mod util;

// Re-exports
pub use models::{CartItem, MenuItem, Order, OrderPatch, OrderStatus, seed_menu};
pub use serde::{Deserialize, Serialize};
