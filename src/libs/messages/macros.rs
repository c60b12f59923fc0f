//! Message display macros with conditional tracing support.
//!
//! The `msg_*` macros are the single way user-facing text reaches the
//! terminal. In normal mode they print directly (stdout for regular
//! messages, stderr for errors). When debug mode is active the same calls
//! route through `tracing` instead, so interactive output and diagnostic
//! logs never interleave on the same stream.
//!
//! Debug mode is on when either `TYDO_DEBUG` or `RUST_LOG` is set in the
//! environment. The check is cached in a `OnceLock` on first use.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether diagnostic output is routed through `tracing`.
///
/// `TYDO_DEBUG` enables it explicitly; a `RUST_LOG` filter implies the
/// user expects structured logs as well.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TYDO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message. Pass `true` as the second argument to pad the
/// message with blank lines (section headers).
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success confirmation with a ✅ prefix.
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

/// Prints an error with a ❌ prefix. Normal mode writes to stderr so
/// errors stay separable from regular output under shell redirection.
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

/// Prints a warning with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
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

/// Debug-only message with a 🔍 prefix; suppressed entirely outside debug
/// mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message, for propagation with `?`.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
