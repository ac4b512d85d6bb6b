//! Logging functionality for plugins
//!
//! Re-exports the `liblogger` macros so plugins and the host log through the
//! same library. Without the `logging` feature the macros compile to nothing.
//! A plugin built as a cdylib carries its own logger instance, which writes
//! every line to stderr because nothing initializes it.

// No-op versions of the macros when logging is disabled, exported at the
// crate root like the real ones
#[cfg(not(feature = "logging"))]
mod no_op_macros {
    #[macro_export]
    macro_rules! log_debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! log_info {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! log_warn {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! log_error {
        ($($arg:tt)*) => {};
    }
}
