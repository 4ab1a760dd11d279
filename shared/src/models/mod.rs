//! Data models
//!
//! Shared between the order feed and the storefront.
//! Menu and cart ids are `i64`; order ids are strings owned by the remote store.

pub mod cart_item;
pub mod menu_item;
pub mod order;

// Re-exports
pub use cart_item::*;
pub use menu_item::*;
pub use order::*;
