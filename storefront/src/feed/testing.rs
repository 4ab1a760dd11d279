//! Hand-driven order feed for tests

use std::sync::{Arc, Mutex};

use order_feed::{FeedError, OnData, OnError, OrderFeed, Subscription};
use shared::models::{Order, OrderPatch};
use uuid::Uuid;

struct Registration {
    id: Uuid,
    on_data: OnData,
    on_error: OnError,
}

/// Feed whose pushes are triggered by the test
#[derive(Default)]
pub(crate) struct ManualFeed {
    registrations: Arc<Mutex<Vec<Registration>>>,
    patches: Mutex<Vec<(String, OrderPatch)>>,
    deletes: Mutex<Vec<String>>,
}

impl ManualFeed {
    pub(crate) fn push(&self, orders: Vec<Order>) {
        for r in self.registrations.lock().unwrap().iter() {
            (r.on_data)(orders.clone());
        }
    }

    pub(crate) fn push_error(&self, message: &str) {
        for r in self.registrations.lock().unwrap().iter() {
            (r.on_error)(FeedError::remote(message));
        }
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.registrations.lock().unwrap().len()
    }

    pub(crate) fn patches(&self) -> Vec<(String, OrderPatch)> {
        self.patches.lock().unwrap().clone()
    }

    pub(crate) fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

impl OrderFeed for ManualFeed {
    fn subscribe(&self, on_data: OnData, on_error: OnError) -> Subscription {
        let id = Uuid::new_v4();
        self.registrations.lock().unwrap().push(Registration {
            id,
            on_data,
            on_error,
        });

        let registrations = self.registrations.clone();
        Subscription::new(id, move || {
            registrations.lock().unwrap().retain(|r| r.id != id);
        })
    }

    fn patch(&self, id: &str, patch: OrderPatch) {
        self.patches.lock().unwrap().push((id.to_string(), patch));
    }

    fn delete_by_id(&self, id: &str) {
        self.deletes.lock().unwrap().push(id.to_string());
    }
}
