//! Error boundary
//!
//! Last-resort guard around a render step. The first panic inside the
//! guarded closure is caught, reported through the log, and from then on
//! the boundary draws its fallback instead of the subtree. There is no
//! recovery for the lifetime of the boundary.
//!
//! While a guarded closure runs, the thread is marked as guarded so the
//! process panic hook leaves the report to the boundary and only hands over
//! the captured stack trace.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};

use ratatui::{prelude::*, widgets::*};

const DEFAULT_FALLBACK: &str = "Something went wrong!";

thread_local! {
    static GUARDED: Cell<bool> = const { Cell::new(false) };
    static TRACE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Whether the current thread is inside [`ErrorBoundary::render`]
pub(crate) fn is_guarded() -> bool {
    GUARDED.with(Cell::get)
}

/// Stash the stack trace of a guarded panic for the boundary to report
pub(crate) fn record_trace(trace: String) {
    TRACE.with(|t| *t.borrow_mut() = Some(trace));
}

fn take_trace() -> Option<String> {
    TRACE.with(|t| t.borrow_mut().take())
}

#[derive(Debug, Clone)]
pub struct ErrorBoundary {
    name: &'static str,
    fallback: String,
    /// Message of the caught panic
    failure: Option<String>,
}

impl ErrorBoundary {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fallback: DEFAULT_FALLBACK.to_string(),
            failure: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn has_error(&self) -> bool {
        self.failure.is_some()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Run `child` unless the boundary has already tripped.
    ///
    /// `path` names the guarded subtree for the debug report.
    pub fn render<F>(&mut self, f: &mut Frame, area: Rect, path: &str, child: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        if self.failure.is_none() {
            take_trace();
            let outer = GUARDED.with(|g| g.replace(true));
            let result = panic::catch_unwind(AssertUnwindSafe(|| child(f, area)));
            GUARDED.with(|g| g.set(outer));

            match result {
                Ok(()) => return,
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    let trace = take_trace()
                        .unwrap_or_else(|| "stack trace unavailable (no panic hook)".to_string());
                    tracing::warn!(boundary = self.name, "Error caught by boundary: {}", message);
                    tracing::debug!(boundary = self.name, "Error details at {}\n{}", path, trace);
                    self.failure = Some(message);
                }
            }
        }

        self.render_fallback(f, area);
    }

    fn render_fallback(&self, f: &mut Frame, area: Rect) {
        let fallback = Paragraph::new(self.fallback.as_str())
            .style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        // The subtree may have drawn half a frame before failing
        f.render_widget(Clear, area);
        f.render_widget(fallback, area);
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
