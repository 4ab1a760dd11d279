//! Order feed mirror
//!
//! Holds the local copy of the remote order list. Subscription callbacks run
//! on the feed's thread and only enqueue a [`FeedUpdate`]; the UI thread
//! applies queued updates in [`OrdersMirror::drain`], so state is never
//! touched concurrently.

use std::sync::Arc;

use order_feed::{OrderFeed, Subscription};
use shared::models::{Order, OrderPatch, OrderStatus};
use tokio::sync::mpsc;

/// One remote event
#[derive(Debug, Clone, PartialEq)]
pub enum FeedUpdate {
    /// Full replacement list
    Data(Vec<Order>),
    Failed(String),
}

/// Local order list plus loading / error flags
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersView {
    pub orders: Vec<Order>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for OrdersView {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl OrdersView {
    pub fn apply(&mut self, update: FeedUpdate) {
        match update {
            FeedUpdate::Data(orders) => {
                self.orders = orders;
                self.loading = false;
                self.error = None;
            }
            FeedUpdate::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }

    /// Nothing to show: loaded, no error, no orders
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.orders.is_empty()
    }

    /// Orders are listed only once loaded without error
    pub fn visible_orders(&self) -> &[Order] {
        if self.loading || self.error.is_some() {
            &[]
        } else {
            &self.orders
        }
    }
}

/// Live mirror of an [`OrderFeed`]
pub struct OrdersMirror {
    feed: Arc<dyn OrderFeed>,
    view: OrdersView,
    updates: Option<mpsc::UnboundedReceiver<FeedUpdate>>,
    subscription: Option<Subscription>,
}

impl OrdersMirror {
    pub fn new(feed: Arc<dyn OrderFeed>) -> Self {
        Self {
            feed,
            view: OrdersView::default(),
            updates: None,
            subscription: None,
        }
    }

    pub fn view(&self) -> &OrdersView {
        &self.view
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Establish the single live subscription
    pub fn mount(&mut self) {
        if self.is_mounted() {
            tracing::debug!("Orders: already subscribed");
            return;
        }
        tracing::debug!("Orders: subscribe start");
        self.view.loading = true;

        let (tx, rx) = mpsc::unbounded_channel();
        let error_tx = tx.clone();
        let subscription = self.feed.subscribe(
            Box::new(move |orders| {
                let _ = tx.send(FeedUpdate::Data(orders));
            }),
            Box::new(move |e| {
                let _ = error_tx.send(FeedUpdate::Failed(e.to_string()));
            }),
        );

        self.updates = Some(rx);
        self.subscription = Some(subscription);
    }

    /// Release the subscription; queued updates are discarded
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            tracing::debug!("Orders: unsubscribed");
        }
        self.updates = None;
    }

    /// Apply every queued update; returns how many were applied
    pub fn drain(&mut self) -> usize {
        let Some(rx) = self.updates.as_mut() else {
            return 0;
        };

        let mut applied = 0;
        while let Ok(update) = rx.try_recv() {
            match &update {
                FeedUpdate::Data(orders) => {
                    tracing::debug!(count = orders.len(), "Orders: snapshot received");
                }
                FeedUpdate::Failed(message) => {
                    tracing::error!(error = %message, "Orders: subscribe error");
                }
            }
            self.view.apply(update);
            applied += 1;
        }
        applied
    }

    /// Fire-and-forget status patch
    pub fn mark_paid(&self, id: &str) {
        self.feed.patch(id, OrderPatch::status(OrderStatus::Paid));
    }

    /// Fire-and-forget delete
    pub fn delete(&self, id: &str) {
        self.feed.delete_by_id(id);
    }
}

impl Drop for OrdersMirror {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
pub(crate) mod testing;
