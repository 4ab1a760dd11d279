// storefront/tests/live_orders.rs
// Storefront state wired to the in-process order store

use std::sync::Arc;
use std::time::Duration;

use order_feed::{FeedConfig, MemoryOrderStore, OrderStatus};
use storefront::{Action, StorefrontState};

/// Pump the feed until `done` holds or a second has passed
async fn wait_for(state: &mut StorefrontState, done: impl Fn(&StorefrontState) -> bool) -> bool {
    for _ in 0..100 {
        state.pump_feed();
        if done(state) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

fn mounted(store: &MemoryOrderStore) -> StorefrontState {
    let mut state = StorefrontState::new(Arc::new(store.clone()));
    state.mount();
    state
}

#[tokio::test]
async fn test_mark_paid_round_trip() {
    let store = MemoryOrderStore::spawn(FeedConfig::default());
    let id = store.insert(OrderStatus::Pending, 48.0);
    let mut state = mounted(&store);

    assert!(state.orders().loading);
    assert!(wait_for(&mut state, |s| !s.orders().loading).await);
    assert_eq!(state.orders().orders.len(), 1);

    state.dispatch(Action::MarkPaid(id.clone()));
    assert!(
        wait_for(&mut state, |s| {
            s.orders().orders.first().map(|o| o.status) == Some(OrderStatus::Paid)
        })
        .await
    );
    assert_eq!(state.orders().orders[0].id, id);
    assert_eq!(state.orders().orders[0].total, 48.0);
}

#[tokio::test]
async fn test_delete_round_trip() {
    let store = MemoryOrderStore::spawn(FeedConfig::default());
    let first = store.insert(OrderStatus::Pending, 24.0);
    let second = store.insert(OrderStatus::Paid, 30.0);
    let mut state = mounted(&store);
    assert!(wait_for(&mut state, |s| s.orders().orders.len() == 2).await);

    state.dispatch(Action::DeleteOrder(first));
    assert!(wait_for(&mut state, |s| s.orders().orders.len() == 1).await);
    assert_eq!(state.orders().orders[0].id, second);
}

#[tokio::test]
async fn test_remote_failure_shows_error() {
    let store = MemoryOrderStore::spawn(FeedConfig::default());
    store.insert(OrderStatus::Pending, 48.0);
    let mut state = mounted(&store);
    assert!(wait_for(&mut state, |s| !s.orders().loading).await);

    store.fail("network down");
    assert!(wait_for(&mut state, |s| s.orders().error.is_some()).await);

    let orders = state.orders();
    assert!(!orders.loading);
    assert_eq!(orders.error.as_deref(), Some("network down"));
    assert!(orders.visible_orders().is_empty());
}

#[tokio::test]
async fn test_unmount_releases_subscription() {
    let store = MemoryOrderStore::spawn(FeedConfig::default());
    let mut state = mounted(&store);
    assert_eq!(store.subscriber_count(), 1);

    state.unmount();
    assert_eq!(store.subscriber_count(), 0);

    store.insert(OrderStatus::Pending, 10.0);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(state.pump_feed(), 0);
}

#[tokio::test]
async fn test_cart_is_independent_of_feed() {
    let store = MemoryOrderStore::spawn(FeedConfig::new().with_latency(Duration::from_millis(20)));
    let mut state = mounted(&store);

    state.dispatch(Action::OrderFood { id: 4, quantity: 1.0 });
    state.dispatch(Action::OrderFood { id: 3, quantity: 1.0 });
    state.dispatch(Action::OrderFood { id: 2, quantity: 1.0 });
    state.dispatch(Action::OrderFood { id: 1, quantity: 1.0 });
    assert_eq!(state.cart().total(), 205.0);

    assert!(wait_for(&mut state, |s| !s.orders().loading).await);
    assert!(state.orders().is_empty());
}

#[tokio::test]
async fn test_store_shutdown_ends_loading() {
    let store = MemoryOrderStore::spawn(FeedConfig::new().with_latency(Duration::from_millis(200)));
    let mut state = mounted(&store);
    store.shutdown();

    assert!(wait_for(&mut state, |s| !s.orders().loading).await);
    assert_eq!(state.orders().error.as_deref(), Some("Order feed closed"));
}
