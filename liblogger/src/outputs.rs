/*
 * Log output implementations
 *
 * - ConsoleOutput: writes lines to stderr, stdout belongs to the host's
 *   listing and to plugin selection output
 * - FileOutput: appends lines to a file, creating its folder on demand
 *
 * Both implement LogOutput; create_log_output picks one from the config.
 */

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::config::{LogConfig, LogType};

pub trait LogOutput: Send + Sync {
    fn write_log(&mut self, formatted_message: &str) -> Result<(), String>;
}

// Console output implementation
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput {}
    }
}

impl LogOutput for ConsoleOutput {
    fn write_log(&mut self, formatted_message: &str) -> Result<(), String> {
        writeln!(io::stderr(), "{}", formatted_message)
            .map_err(|e| format!("Failed to write to console: {}", e))
    }
}

pub struct FileOutput {
    file: File,
    force_flush: bool,
}

impl FileOutput {
    pub fn new(file_path: &Path, force_flush: bool) -> Result<Self, String> {
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create log directory: {}", e))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        Ok(FileOutput { file, force_flush })
    }
}

impl LogOutput for FileOutput {
    fn write_log(&mut self, formatted_message: &str) -> Result<(), String> {
        self.file
            .write_all(formatted_message.as_bytes())
            .map_err(|e| format!("Failed to write to log file: {}", e))?;
        self.file
            .write_all(b"\n")
            .map_err(|e| format!("Failed to write newline to log file: {}", e))?;

        if self.force_flush {
            self.file
                .flush()
                .map_err(|e| format!("Failed to flush log file: {}", e))?;
        }

        Ok(())
    }
}

/// Creates the log output selected by the configuration
pub fn create_log_output(config: &LogConfig) -> Result<Box<dyn LogOutput>, String> {
    match config.log_type {
        LogType::Console => Ok(Box::new(ConsoleOutput::new())),
        LogType::File => {
            let full_path = config.resolved_file_path()?;
            Ok(Box::new(FileOutput::new(&full_path, config.force_flush)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn file_output_appends_lines_and_creates_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("plugin.log");

        let mut output = FileOutput::new(&path, true).unwrap();
        output.write_log("first").unwrap();
        output.write_log("second").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "first\nsecond\n");
    }

    #[test]
    fn file_output_requires_a_path() {
        let config = LogConfig {
            log_type: LogType::File,
            threshold: LogLevel::Info,
            ..LogConfig::default()
        };
        assert!(create_log_output(&config).is_err());
    }
}
