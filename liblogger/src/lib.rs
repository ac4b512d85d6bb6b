/*
 * Logging for the launcher host and the plugins it loads
 *
 * The host configures the logger once from the [logging] section of
 * app_config.toml. A plugin built as a cdylib links its own copy of this
 * crate that nobody configures, so its lines fall through to stderr.
 * Console output also goes to stderr, which leaves stdout to the listing
 * and selection output.
 *
 * Every macro takes a message and an optional Option<String> context and
 * records the call site, e.g. log_warn!("Skipping handle", Some(e.to_string())).
 */

mod config;
mod outputs;
mod logger;

pub use logger::Logger;
pub use config::LogConfig;
pub use config::LogLevel;
pub use config::LogType;

#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        $crate::log_debug!($message, None)
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::log_at($crate::LogLevel::Debug, $message, $context, file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::log_info!($message, None)
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::log_at($crate::LogLevel::Info, $message, $context, file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_warn {
    ($message:expr) => {
        $crate::log_warn!($message, None)
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::log_at($crate::LogLevel::Warn, $message, $context, file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_error {
    ($message:expr) => {
        $crate::log_error!($message, None)
    };
    ($message:expr, $context:expr) => {
        $crate::Logger::log_at($crate::LogLevel::Error, $message, $context, file!(), line!(), module_path!())
    };
}
