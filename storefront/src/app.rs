//! Terminal event loop
//!
//! Single-threaded: every state mutation happens here, between two frames.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{prelude::*, widgets::*};
use tui_input::Input;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

use crate::core::{Config, StorefrontState};
use crate::ui::{self, Command, ErrorBoundary};

pub struct App {
    state: StorefrontState,
    /// Quantity field of the food detail view
    quantity: Input,
    boundary: ErrorBoundary,
    logger_state: TuiWidgetState,
    tick: Duration,
}

impl App {
    pub fn new(state: StorefrontState, config: &Config) -> Self {
        Self {
            state,
            quantity: Input::default(),
            boundary: ErrorBoundary::new("storefront"),
            logger_state: TuiWidgetState::new(),
            tick: config.tick(),
        }
    }

    pub fn state(&self) -> &StorefrontState {
        &self.state
    }

    /// Run until the user quits; the feed is unmounted on the way out
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.state.mount();
        tracing::info!("Tab switches pages, q quits, PgUp/PgDown scroll logs");

        let result = self.event_loop(terminal);

        self.state.unmount();
        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.state.pump_feed();
            terminal.draw(|f| self.draw(f))?;

            if !event::poll(self.tick)? {
                continue;
            }
            if let Event::Key(key) = event::read()?
                && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
                && self.handle_key(key)
            {
                return Ok(());
            }
        }
    }

    /// Returns `true` when the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::PageUp => {
                self.logger_state.transition(TuiWidgetEvent::PrevPageKey);
                return false;
            }
            KeyCode::PageDown => {
                self.logger_state.transition(TuiWidgetEvent::NextPageKey);
                return false;
            }
            _ => {}
        }

        match ui::map_key(&self.state, &mut self.quantity, key) {
            Some(Command::Quit) => {
                tracing::info!("Quit requested");
                true
            }
            Some(Command::Dispatch(action)) => {
                self.state.dispatch(action);
                false
            }
            None => false,
        }
    }

    /// Apply queued feed updates outside the loop (tests, headless use)
    pub fn pump_feed(&mut self) -> usize {
        self.state.pump_feed()
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(16),   // Storefront
                Constraint::Length(8), // Logs
            ])
            .split(f.area());

        let path = ui::render_path(&self.state);
        let state = &self.state;
        let quantity = &self.quantity;
        self.boundary.render(f, chunks[0], &path, |f, area| {
            ui::render(f, area, state, quantity)
        });

        let logs = TuiLoggerWidget::default()
            .block(
                Block::default()
                    .title(" Logs ")
                    .border_style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::DIM),
                    )
                    .borders(Borders::ALL),
            )
            .output_separator('|')
            .output_timestamp(Some("%H:%M:%S".to_string()))
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
            .output_target(false)
            .output_file(false)
            .output_line(false)
            .style(Style::default().fg(Color::White))
            .state(&self.logger_state);
        f.render_widget(logs, chunks[1]);
    }
}
