//! Order Feed - live mirror of a remote order collection
//!
//! Defines the collaborator contract the storefront depends on
//! ([`OrderFeed`]: subscribe / patch / delete) and ships an in-process
//! document store ([`MemoryOrderStore`]) that implements it.
//!
//! ```ignore
//! let store = MemoryOrderStore::spawn(FeedConfig::default());
//! let sub = store.subscribe(
//!     Box::new(|orders| println!("{} orders", orders.len())),
//!     Box::new(|e| eprintln!("feed error: {e}")),
//! );
//! store.patch(&id, OrderPatch::status(OrderStatus::Paid));
//! drop(sub); // no callbacks after this point
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod memory;

pub use config::FeedConfig;
pub use error::{FeedError, FeedResult};
pub use feed::{OnData, OnError, OrderFeed, Subscription};
pub use memory::MemoryOrderStore;

// Re-export shared order types for convenience
pub use shared::models::{Order, OrderPatch, OrderStatus};
