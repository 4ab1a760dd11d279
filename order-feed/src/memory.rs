//! In-process order store
//!
//! # Architecture
//!
//! ```text
//! patch / delete / insert / fail ──▶ mpsc ──▶ worker task ──▶ orders (Vec)
//!                                                 │
//!                                                 ▼
//!                                     listeners (DashMap<Uuid, Listener>)
//!                                     on_data(full snapshot) / on_error
//! ```
//!
//! The worker owns the order list; callers never touch it directly. Every
//! applied mutation pushes a full snapshot to every listener. Dispatch holds
//! the listener's map shard while calling it, so removing a listener waits
//! for an in-flight callback and nothing fires after removal. When the
//! worker stops, every listener still registered gets `FeedError::Closed`
//! exactly once.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use shared::models::{Order, OrderPatch, OrderStatus};
use shared::util::{now_millis, snowflake_id};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::feed::{OnData, OnError, OrderFeed, Subscription};
use crate::{FeedConfig, FeedError};

struct Listener {
    on_data: OnData,
    on_error: OnError,
}

type Listeners = Arc<DashMap<Uuid, Listener>>;

/// Commands processed by the worker, in order
#[derive(Debug)]
enum StoreCommand {
    /// Push the current list to one listener
    Snapshot(Uuid),
    Insert(Order),
    Patch { id: String, patch: OrderPatch },
    Delete(String),
    /// Report a remote failure to every listener
    Fail(String),
}

/// Memory-backed order store
///
/// Must be created inside a tokio runtime. Clones share the same store.
#[derive(Clone)]
pub struct MemoryOrderStore {
    listeners: Listeners,
    commands: mpsc::UnboundedSender<StoreCommand>,
    shutdown: CancellationToken,
}

impl MemoryOrderStore {
    /// Start an empty store
    pub fn spawn(config: FeedConfig) -> Self {
        Self::with_orders(config, Vec::new())
    }

    /// Start a store pre-populated with `orders`
    pub fn with_orders(config: FeedConfig, orders: Vec<Order>) -> Self {
        let listeners: Listeners = Arc::new(DashMap::new());
        let (commands, rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();

        tokio::spawn(run_worker(
            rx,
            listeners.clone(),
            orders,
            config,
            shutdown.clone(),
        ));

        Self {
            listeners,
            commands,
            shutdown,
        }
    }

    /// Add a pending order; returns its id. The push happens asynchronously.
    pub fn insert(&self, status: OrderStatus, total: f64) -> String {
        let order = Order {
            id: snowflake_id().to_string(),
            status,
            total,
            created_at: now_millis(),
        };
        let id = order.id.clone();
        self.send(StoreCommand::Insert(order));
        id
    }

    /// Simulate a remote failure; every subscriber's error callback fires
    pub fn fail(&self, message: impl Into<String>) {
        self.send(StoreCommand::Fail(message.into()));
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled() || self.commands.is_closed()
    }

    /// Stop the worker. Pending commands are dropped.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    fn send(&self, cmd: StoreCommand) {
        if self.is_closed() {
            tracing::warn!(command = ?cmd, "Order store closed, dropping command");
            return;
        }
        if let Err(e) = self.commands.send(cmd) {
            tracing::warn!(command = ?e.0, "Order store closed, dropping command");
        }
    }
}

impl OrderFeed for MemoryOrderStore {
    fn subscribe(&self, on_data: OnData, on_error: OnError) -> Subscription {
        if self.is_closed() {
            on_error(FeedError::Closed);
            return Subscription::noop();
        }

        let id = Uuid::new_v4();
        self.listeners.insert(id, Listener { on_data, on_error });
        tracing::debug!(subscription = %id, "Order feed subscribed");

        if self.commands.send(StoreCommand::Snapshot(id)).is_err() {
            self.listeners.remove_if(&id, |_, listener| {
                (listener.on_error)(FeedError::Closed);
                true
            });
            return Subscription::noop();
        }

        let listeners = self.listeners.clone();
        Subscription::new(id, move || {
            listeners.remove(&id);
        })
    }

    fn patch(&self, id: &str, patch: OrderPatch) {
        self.send(StoreCommand::Patch {
            id: id.to_string(),
            patch,
        });
    }

    fn delete_by_id(&self, id: &str) {
        self.send(StoreCommand::Delete(id.to_string()));
    }
}

impl fmt::Debug for MemoryOrderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryOrderStore")
            .field("subscribers", &self.listeners.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}

async fn run_worker(
    mut rx: mpsc::UnboundedReceiver<StoreCommand>,
    listeners: Listeners,
    mut orders: Vec<Order>,
    config: FeedConfig,
    shutdown: CancellationToken,
) {
    tracing::debug!(orders = orders.len(), "Order store worker started");

    loop {
        let cmd = tokio::select! {
            _ = shutdown.cancelled() => break,
            cmd = rx.recv() => match cmd {
                Some(cmd) => cmd,
                None => break,
            },
        };

        if !config.latency.is_zero() {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(config.latency) => {}
            }
        }

        match cmd {
            StoreCommand::Snapshot(id) => {
                if let Some(listener) = listeners.get(&id) {
                    (listener.on_data)(orders.clone());
                }
            }
            StoreCommand::Insert(order) => {
                tracing::debug!(order_id = %order.id, "Order inserted");
                orders.push(order);
                publish(&listeners, &orders);
            }
            StoreCommand::Patch { id, patch } => {
                match orders.iter_mut().find(|o| o.id == id) {
                    Some(order) => {
                        patch.apply_to(order);
                        tracing::debug!(order_id = %id, status = %order.status, "Order patched");
                        publish(&listeners, &orders);
                    }
                    None => tracing::warn!(order_id = %id, "Patch for unknown order ignored"),
                }
            }
            StoreCommand::Delete(id) => {
                let before = orders.len();
                orders.retain(|o| o.id != id);
                if orders.len() < before {
                    tracing::debug!(order_id = %id, "Order deleted");
                    publish(&listeners, &orders);
                } else {
                    tracing::warn!(order_id = %id, "Delete for unknown order ignored");
                }
            }
            StoreCommand::Fail(message) => {
                tracing::debug!(error = %message, "Reporting order feed failure");
                for listener in listeners.iter() {
                    (listener.on_error)(FeedError::Remote(message.clone()));
                }
            }
        }
    }

    // A subscribe racing with this sees its send fail and reports Closed itself
    drop(rx);
    let remaining: Vec<Uuid> = listeners.iter().map(|entry| *entry.key()).collect();
    for id in remaining {
        listeners.remove_if(&id, |_, listener| {
            (listener.on_error)(FeedError::Closed);
            true
        });
    }
    tracing::debug!("Order store worker stopped");
}

fn publish(listeners: &Listeners, orders: &[Order]) {
    for listener in listeners.iter() {
        (listener.on_data)(orders.to_vec());
    }
}
