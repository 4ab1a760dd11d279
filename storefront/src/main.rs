use std::io;
use std::sync::Arc;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use order_feed::{FeedConfig, MemoryOrderStore, OrderStatus};
use ratatui::prelude::*;
use shared::models::seed_menu;
use storefront::{App, Config, StorefrontState, init_logger, install_panic_hook, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    print_banner();

    let config = Config::from_env();
    init_logger(&config);
    install_panic_hook();

    tracing::info!(
        tick_ms = config.tick_ms,
        feed_latency_ms = config.feed_latency_ms,
        "Storefront starting"
    );

    // Stand-in for the hosted order service
    let store = MemoryOrderStore::spawn(FeedConfig::new().with_latency(config.feed_latency()));
    seed_demo_orders(&store, config.demo_orders);

    let state = StorefrontState::new(Arc::new(store.clone()));
    let mut app = App::new(state, &config);

    let screen = RawScreen::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = app.run(&mut terminal);

    drop(terminal);
    screen.restore()?;
    drop(app);
    store.shutdown();

    res?;
    Ok(())
}

/// Raw mode + alternate screen for as long as the guard lives.
///
/// Dropping the guard (also while unwinding) puts the terminal back.
struct RawScreen {
    active: bool,
}

impl RawScreen {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let screen = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(screen)
    }

    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, Show)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        }
    }
}

fn seed_demo_orders(store: &MemoryOrderStore, count: usize) {
    let menu = seed_menu();
    for i in 0..count {
        let Some(item) = menu.get(i % menu.len().max(1)) else {
            break;
        };
        let quantity = (i % 3 + 1) as f64;
        let status = if i % 2 == 0 {
            OrderStatus::Pending
        } else {
            OrderStatus::Paid
        };
        let id = store.insert(status, item.price * quantity);
        tracing::debug!(%id, item = %item.name, "Seeded demo order");
    }
}
