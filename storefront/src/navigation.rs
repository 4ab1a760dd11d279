//! Selection / navigation state

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Stock overview
    #[default]
    Menu,
    /// Food list, cart and orders
    Ordering,
}

impl Page {
    pub fn toggled(self) -> Self {
        match self {
            Page::Menu => Page::Ordering,
            Page::Ordering => Page::Menu,
        }
    }

    /// Label of the button that leaves this page
    pub fn toggle_label(self) -> &'static str {
        match self {
            Page::Menu => "Order Food",
            Page::Ordering => "Availability",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Menu => "STOCK",
            Page::Ordering => "ORDER",
        }
    }
}

/// Sub-view of the ordering page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderingView {
    #[default]
    Browse,
    /// Detail of one menu item (by id)
    Selected(i64),
}

/// Focused panel while browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Foods,
    Cart,
    Orders,
}

impl Panel {
    pub fn next(self) -> Self {
        match self {
            Panel::Foods => Panel::Cart,
            Panel::Cart => Panel::Orders,
            Panel::Orders => Panel::Foods,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Panel::Foods => Panel::Orders,
            Panel::Cart => Panel::Foods,
            Panel::Orders => Panel::Cart,
        }
    }
}

/// Where the user is and what is highlighted
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    pub page: Page,
    pub view: OrderingView,
    pub focus: Panel,
    /// Highlighted row per panel
    pub food_cursor: usize,
    pub cart_cursor: usize,
    pub order_cursor: usize,
}

impl Navigation {
    /// Switch page; always drops the selected item
    pub fn toggle_page(&mut self) {
        self.page = self.page.toggled();
        self.view = OrderingView::Browse;
    }

    pub fn select(&mut self, item_id: i64) {
        self.view = OrderingView::Selected(item_id);
    }

    pub fn return_to_menu(&mut self) {
        self.view = OrderingView::Browse;
    }

    pub fn selected_item(&self) -> Option<i64> {
        match self.view {
            OrderingView::Selected(id) => Some(id),
            OrderingView::Browse => None,
        }
    }

    pub fn is_browsing(&self) -> bool {
        self.page == Page::Ordering && self.view == OrderingView::Browse
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Panel::Foods => &mut self.food_cursor,
            Panel::Cart => &mut self.cart_cursor,
            Panel::Orders => &mut self.order_cursor,
        }
    }

    pub fn move_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    /// Move down within a panel holding `len` rows
    pub fn move_down(&mut self, len: usize) {
        let cursor = self.cursor_mut();
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    /// Keep every cursor inside its panel after the lists changed
    pub fn clamp(&mut self, foods: usize, cart: usize, orders: usize) {
        self.food_cursor = self.food_cursor.min(foods.saturating_sub(1));
        self.cart_cursor = self.cart_cursor.min(cart.saturating_sub(1));
        self.order_cursor = self.order_cursor.min(orders.saturating_sub(1));
    }
}
