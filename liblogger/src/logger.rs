/*
 * Logger implementation module
 *
 * A single process-wide logger behind a OnceCell. Every call formats one
 * line and writes it synchronously to the configured output. Until the
 * logger is initialized, lines of every level go to stderr so messages from
 * a plugin loaded into an unconfigured host are not lost.
 */

use chrono::Utc;
use once_cell::sync::OnceCell;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::config::{LogConfig, LogLevel};
use crate::outputs::{create_log_output, LogOutput};

static LOGGER_INSTANCE: OnceCell<Mutex<LoggerInner>> = OnceCell::new();

struct LoggerInner {
    config: Option<LogConfig>,
    output: Option<Box<dyn LogOutput>>,
}

impl LoggerInner {
    fn new() -> Self {
        LoggerInner {
            config: None,
            output: None,
        }
    }

    fn init_with_config(&mut self, config: LogConfig) -> Result<(), String> {
        let output = create_log_output(&config)?;
        self.output = Some(output);
        self.config = Some(config);
        Ok(())
    }

    fn log(&mut self, level: LogLevel, message: &str, context: Option<&str>, file: &str, line: u32, module: &str) {
        if let Some(ref config) = self.config {
            if level < config.threshold {
                return;
            }
        }

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let formatted_message = format_log_message(&timestamp, level, message, context, file, line, module);

        match self.output {
            Some(ref mut output) => {
                if let Err(e) = output.write_log(&formatted_message) {
                    eprintln!("Failed to write log: {}", e);
                }
            }
            None => {
                let _ = writeln!(io::stderr(), "{}", formatted_message);
            }
        }
    }
}

// Format a log message for output
fn format_log_message(timestamp: &str, level: LogLevel, message: &str,
                      context: Option<&str>, file: &str, line: u32, module: &str) -> String {
    let level_str = level.as_str();
    match context {
        Some(ctx) => format!("{} [{}] [{}:{}] [{}] {} | {}",
            timestamp, level_str, file, line, module, message, ctx),
        None => format!("{} [{}] [{}:{}] [{}] {}",
            timestamp, level_str, file, line, module, message),
    }
}

fn instance() -> &'static Mutex<LoggerInner> {
    LOGGER_INSTANCE.get_or_init(|| Mutex::new(LoggerInner::new()))
}

pub struct Logger;

impl Logger {
    /// Initialize the logger with a specific configuration file
    pub fn init_with_config_file<P: AsRef<Path>>(config_path: P) -> Result<(), String> {
        let config = LogConfig::from_file(config_path)?;
        Self::init_with_config(config)
    }

    /// Initialize (or re-initialize) the logger with a LogConfig struct
    pub fn init_with_config(config: LogConfig) -> Result<(), String> {
        let mut logger_guard = match instance().lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        logger_guard.init_with_config(config)
    }

    /// Writes one line at `level`. Called by the `log_*!` macros, which fill
    /// in the call site.
    pub fn log_at(level: LogLevel, message: &str, context: Option<String>, file: &'static str, line: u32, module: &'static str) {
        // Extract just the filename from the path
        let file_name = Path::new(file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file);

        match instance().lock() {
            Ok(mut logger) => logger.log(level, message, context.as_deref(), file_name, line, module),
            Err(_) => {
                let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
                let log_line = format!("{} | MUTEX POISONED",
                    format_log_message(&timestamp, level, message, None, file_name, line, module));
                let _ = writeln!(io::stderr(), "{}", log_line);
            }
        }
    }
}
