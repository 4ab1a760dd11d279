//! Fast Food Online - terminal storefront
//!
//! A menu with live stock, a cart, and a live view of the remote order list.
//!
//! # Module layout
//!
//! ```text
//! storefront/src/
//! ├── core/          # Config, application state, actions
//! ├── menu/          # Menu items and their stock
//! ├── cart/          # Cart lines
//! ├── ordering/      # Moving stock into and out of the cart
//! ├── order_money/   # Decimal totals
//! ├── feed/          # Mirror of the remote order feed
//! ├── navigation.rs  # Page / selection state
//! ├── ui/            # Rendering, key bindings, error boundary
//! ├── app.rs         # Event loop
//! └── utils/         # Logging
//! ```

pub mod app;
pub mod cart;
pub mod core;
pub mod feed;
pub mod menu;
pub mod navigation;
pub mod order_money;
pub mod ordering;
pub mod ui;
pub mod utils;

pub use app::App;
pub use core::{Action, Config, StorefrontState};
pub use ordering::{MAX_QUANTITY, OrderError};

pub use utils::logger::{init_logger, install_panic_hook};

pub fn print_banner() {
    println!(
        r#"
    ______           __     ______                __
   / ____/___ ______/ /_   / ____/___  ____  ____/ /
  / /_  / __ `/ ___/ __/  / /_  / __ \/ __ \/ __  /
 / __/ / /_/ (__  ) /_   / __/ / /_/ / /_/ / /_/ /
/_/    \__,_/____/\__/  /_/    \____/\____/\__,_/
    "#
    );
}
