//! Storefront state
//!
//! Owns every store and is mutated only from the UI thread: user actions go
//! through [`StorefrontState::dispatch`], feed pushes through
//! [`StorefrontState::pump_feed`]. Each mutation is followed by a redraw.

use std::sync::Arc;

use order_feed::OrderFeed;
use shared::models::{CartItem, MenuItem, Order};

use crate::cart::CartStore;
use crate::feed::{OrdersMirror, OrdersView};
use crate::menu::MenuStore;
use crate::navigation::{Navigation, Page, Panel};
use crate::ordering::{self, OrderError, PlacedOrder};

/// User intents
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    TogglePage,
    SelectFood(i64),
    ReturnToMenu,
    OrderFood { id: i64, quantity: f64 },
    RemoveFromCart(i64),
    MarkPaid(String),
    DeleteOrder(String),
    FocusNext,
    FocusPrev,
    MoveUp,
    MoveDown,
}

pub struct StorefrontState {
    menu: MenuStore,
    cart: CartStore,
    nav: Navigation,
    orders: OrdersMirror,
}

impl StorefrontState {
    /// State with the seed menu and an empty cart
    pub fn new(feed: Arc<dyn OrderFeed>) -> Self {
        Self::with_menu(MenuStore::seeded(), feed)
    }

    pub fn with_menu(menu: MenuStore, feed: Arc<dyn OrderFeed>) -> Self {
        Self {
            menu,
            cart: CartStore::new(),
            nav: Navigation::default(),
            orders: OrdersMirror::new(feed),
        }
    }

    pub fn menu(&self) -> &MenuStore {
        &self.menu
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn nav(&self) -> &Navigation {
        &self.nav
    }

    pub fn orders(&self) -> &OrdersView {
        self.orders.view()
    }

    /// Live copy of the selected item, if any
    pub fn selected_food(&self) -> Option<&MenuItem> {
        self.nav.selected_item().and_then(|id| self.menu.get(id))
    }

    pub fn highlighted_food(&self) -> Option<&MenuItem> {
        self.menu.items().get(self.nav.food_cursor)
    }

    pub fn highlighted_cart_line(&self) -> Option<&CartItem> {
        self.cart.lines().get(self.nav.cart_cursor)
    }

    pub fn highlighted_order(&self) -> Option<&Order> {
        self.orders.view().visible_orders().get(self.nav.order_cursor)
    }

    // ========== Lifecycle ==========

    /// Start mirroring the order feed
    pub fn mount(&mut self) {
        self.orders.mount();
    }

    /// Stop mirroring; no feed update is applied afterwards
    pub fn unmount(&mut self) {
        self.orders.unmount();
    }

    /// Apply queued feed pushes; returns how many were applied
    pub fn pump_feed(&mut self) -> usize {
        let applied = self.orders.drain();
        if applied > 0 {
            self.clamp_cursors();
        }
        applied
    }

    // ========== Actions ==========

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::TogglePage => {
                tracing::info!(current = self.nav.page.as_str(), "UI: toggle page");
                self.nav.toggle_page();
            }
            Action::SelectFood(id) => match self.menu.get(id) {
                Some(food) => {
                    tracing::info!(id = food.id, name = %food.name, "UI: food selected");
                    self.nav.select(id);
                }
                None => tracing::warn!(id, "UI: unknown food selected"),
            },
            Action::ReturnToMenu => {
                tracing::debug!("UI: return to menu");
                self.nav.return_to_menu();
            }
            Action::OrderFood { id, quantity } => {
                // Rejections are logged only; the view stays as it was
                let _ = self.order_food(id, quantity);
            }
            Action::RemoveFromCart(id) => {
                let _ = self.remove_from_cart(id);
            }
            Action::MarkPaid(id) => self.mark_paid(&id),
            Action::DeleteOrder(id) => self.delete_order(&id),
            Action::FocusNext => self.nav.focus = self.nav.focus.next(),
            Action::FocusPrev => self.nav.focus = self.nav.focus.prev(),
            Action::MoveUp => self.nav.move_up(),
            Action::MoveDown => {
                let len = self.focused_len();
                self.nav.move_down(len);
            }
        }
    }

    /// Move stock into the cart
    pub fn order_food(&mut self, id: i64, quantity: f64) -> Result<PlacedOrder, OrderError> {
        tracing::info!(food_id = id, qty = quantity, "Order: start");

        match ordering::place_order(&mut self.menu, &mut self.cart, id, quantity) {
            Ok(placed) => {
                tracing::debug!(
                    food_id = id,
                    stock = placed.remaining_stock,
                    in_cart = placed.cart_quantity,
                    "Order: applied"
                );
                Ok(placed)
            }
            Err(e) => {
                match &e {
                    OrderError::ExceedsStock {
                        requested, stock, ..
                    } => {
                        tracing::warn!(food_id = id, qty = requested, stock, "Order: qty > stock");
                    }
                    other => {
                        tracing::warn!(food_id = id, qty = quantity, error = %other, "Order: rejected");
                    }
                }
                Err(e)
            }
        }
    }

    /// Return a whole cart line to stock
    pub fn remove_from_cart(&mut self, id: i64) -> Result<CartItem, OrderError> {
        tracing::info!(id, "Cart: remove clicked");

        match ordering::remove_from_cart(&mut self.menu, &mut self.cart, id) {
            Ok(line) => {
                tracing::debug!(id, restored = line.quantity, "Cart: line removed");
                self.clamp_cursors();
                Ok(line)
            }
            Err(e) => {
                tracing::warn!(id, "Cart: item not found");
                Err(e)
            }
        }
    }

    pub fn mark_paid(&self, id: &str) {
        tracing::info!(id, "Orders: mark paid");
        self.orders.mark_paid(id);
    }

    pub fn delete_order(&self, id: &str) {
        tracing::warn!(id, "Orders: delete");
        self.orders.delete(id);
    }

    fn focused_len(&self) -> usize {
        if self.nav.page != Page::Ordering {
            return 0;
        }
        match self.nav.focus {
            Panel::Foods => self.menu.len(),
            Panel::Cart => self.cart.len(),
            Panel::Orders => self.orders.view().visible_orders().len(),
        }
    }

    fn clamp_cursors(&mut self) {
        let orders = self.orders.view().visible_orders().len();
        self.nav.clamp(self.menu.len(), self.cart.len(), orders);
    }
}
