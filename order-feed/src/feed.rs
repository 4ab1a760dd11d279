//! Order feed contract
//!
//! A feed pushes the *full* order list on every remote change. Mutations are
//! fire-and-forget: their effect is only observed through the next push.

use std::fmt;
use std::sync::Arc;

use shared::models::{Order, OrderPatch};
use uuid::Uuid;

use crate::FeedError;

/// Data callback: receives the complete, current order list
pub type OnData = Box<dyn Fn(Vec<Order>) + Send + Sync>;
/// Error callback
pub type OnError = Box<dyn Fn(FeedError) + Send + Sync>;

/// Remote order collection
///
/// Callbacks may run on any thread and must not call back into the feed.
pub trait OrderFeed: Send + Sync {
    /// Register a callback pair; exactly one callback runs per remote event.
    fn subscribe(&self, on_data: OnData, on_error: OnError) -> Subscription;

    /// Request a partial update of an order
    fn patch(&self, id: &str, patch: OrderPatch);

    /// Request deletion of an order
    fn delete_by_id(&self, id: &str);
}

impl<T: OrderFeed + ?Sized> OrderFeed for Arc<T> {
    fn subscribe(&self, on_data: OnData, on_error: OnError) -> Subscription {
        (**self).subscribe(on_data, on_error)
    }

    fn patch(&self, id: &str, patch: OrderPatch) {
        (**self).patch(id, patch)
    }

    fn delete_by_id(&self, id: &str) {
        (**self).delete_by_id(id)
    }
}

/// Handle to a live registration
///
/// Releasing the handle (explicitly or by drop) unregisters both callbacks.
/// Once release returns no callback of this registration runs again.
pub struct Subscription {
    id: Uuid,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(id: Uuid, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            id,
            release: Some(Box::new(release)),
        }
    }

    /// Handle for a registration that was never established
    pub fn noop() -> Self {
        Self {
            id: Uuid::nil(),
            release: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether the registration still needs releasing
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::debug!(subscription = %self.id, "Releasing order feed subscription");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
