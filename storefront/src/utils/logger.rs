//! Logging Infrastructure
//!
//! Everything goes through `tracing`. The terminal belongs to the UI, so
//! records are shown in the on-screen log pane and, when `LOG_DIR` points
//! to an existing directory, also written to a daily-rolling file.

use std::backtrace::Backtrace;
use std::path::Path;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::Config;
use crate::ui::boundary;

/// Initialize the logger
pub fn init_logger(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let file_layer = config
        .log_dir
        .as_deref()
        .filter(|dir| Path::new(dir).is_dir())
        .map(|dir| {
            let file_appender = tracing_appender::rolling::daily(dir, "storefront");
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(false)
        });

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .with(env_filter)
        .init();

    // Dependencies on the `log` crate end up in the same pane
    let level = level_filter(&config.log_level);
    tui_logger::init_logger(level).ok();
    tui_logger::set_default_level(level);
}

/// Route panic reports through the log
///
/// A panic inside [`ErrorBoundary::render`](crate::ui::ErrorBoundary::render)
/// only hands its stack trace to the boundary, which reports it. Any other
/// panic is logged at error and then passed to the previous hook.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if boundary::is_guarded() {
            boundary::record_trace(Backtrace::force_capture().to_string());
            return;
        }

        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let message = boundary::panic_message(info.payload());
        tracing::error!(target: "panic", %location, "Panic: {}", message);
        previous(info);
    }));
}

fn level_filter(level: &str) -> log::LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing::Subscriber;

    /// In-memory sink for formatted log records
    #[derive(Clone, Default)]
    pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        pub(crate) fn subscriber(
            &self,
            level: tracing::Level,
        ) -> impl Subscriber + Send + Sync + use<> {
            let sink = self.clone();
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(move || sink.clone())
                .finish()
        }

        pub(crate) fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
