//! Message display macros with conditional tracing support.
//!
//! In debug mode (`TOCK_DEBUG` or `RUST_LOG` set) messages are routed
//! through the tracing subscriber; otherwise they go straight to the
//! console. Errors always land on stderr in console mode.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Debug mode is detected once and cached for the life of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TOCK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a plain message.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix, on stderr in console mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Debug-only trace output with a 🔍 prefix; suppressed in console mode.
#[macro_export]
macro_rules! msg_debug {
    ($($arg:tt)*) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", format!($($arg)*));
        }
    };
}

/// Early return with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
