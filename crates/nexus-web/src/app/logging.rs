//! Platform-aware logging initialization.
//!
//! For WASM builds `tracing` events are routed to the browser console. Host
//! builds leave subscriber setup to the caller (tests install none).

use std::sync::Once;

use tracing::level_filters::LevelFilter;

#[cfg(feature = "web")]
use crate::app::storage::{BrowserStorage, StorageBackend};

/// Local storage key holding the persisted console log level.
pub const LOG_LEVEL_KEY: &str = "nexus_web_log_level";

static INIT: Once = Once::new();

/// Initialize logging for the current platform.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
static RELOAD_HANDLE: std::sync::OnceLock<
    tracing_subscriber::reload::Handle<LevelFilter, tracing_subscriber::Registry>,
> = std::sync::OnceLock::new();

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // WASM doesn't have std::time

    let initial_level = get_log_level();

    let (filter, handle) = tracing_subscriber::reload::Layer::new(initial_level);
    let _ = RELOAD_HANDLE.set(handle);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

pub fn level_name(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::OFF => "off",
        LevelFilter::ERROR => "error",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
        _ => "warn",
    }
}

/// Change the console level at runtime and remember it for the next visit.
pub fn set_log_level(level: LevelFilter) {
    #[cfg(feature = "web")]
    {
        if let Some(handle) = RELOAD_HANDLE.get() {
            let _ = handle.reload(level);
        }
        if let Err(e) = BrowserStorage::local().set(LOG_LEVEL_KEY, level_name(level)) {
            tracing::warn!(error = %e, "failed to persist log level");
        }
    }
    #[cfg(not(feature = "web"))]
    let _ = level;
}

/// Persisted level, defaulting to WARN in the browser.
pub fn get_log_level() -> LevelFilter {
    #[cfg(feature = "web")]
    return BrowserStorage::local()
        .get(LOG_LEVEL_KEY)
        .and_then(|v| parse_level(&v))
        .unwrap_or(LevelFilter::WARN);

    #[cfg(not(feature = "web"))]
    return LevelFilter::INFO;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_round_trip() {
        for level in [
            LevelFilter::OFF,
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ] {
            assert_eq!(parse_level(level_name(level)), Some(level));
        }
        assert_eq!(parse_level(" Debug "), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
