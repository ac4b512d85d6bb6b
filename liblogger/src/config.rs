/*
 * Configuration management for the logger
 *
 * Parses the [logging] section of app_config.toml into a LogConfig. The
 * configuration decides where lines are written (console or file), the
 * minimum severity that is kept, and whether file writes are flushed
 * eagerly. Level and type names are matched case-insensitively.
 */

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Log severity levels, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

// Separate implementation of Deserialize to handle case-insensitive values
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(serde::de::Error::unknown_variant(
                &s,
                &["debug", "info", "warn", "warning", "error"],
            )),
        }
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Supported output types for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    Console,
    File,
}

impl<'de> Deserialize<'de> for LogType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "console" => Ok(LogType::Console),
            "file" => Ok(LogType::File),
            _ => Err(serde::de::Error::unknown_variant(&s, &["console", "file"])),
        }
    }
}

/// Configuration for the logger
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogConfig {
    /// Type of output (console, file)
    #[serde(rename = "type")]
    pub log_type: LogType,

    /// Minimum log level to record
    pub threshold: LogLevel,

    /// File name (or path) for file-based logging
    #[serde(default)]
    pub file_path: Option<String>,

    /// Folder the log file is placed in, created on demand
    #[serde(default)]
    pub log_folder: Option<String>,

    /// Whether to flush after every write (default: false)
    #[serde(default)]
    pub force_flush: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            log_type: LogType::Console,
            threshold: LogLevel::Info,
            file_path: None,
            log_folder: None,
            force_flush: false,
        }
    }
}

/// Configuration wrapper to handle the [logging] section in TOML
#[derive(Debug, Clone, Deserialize)]
struct ConfigWrapper {
    logging: LogConfig,
}

impl LogConfig {
    /// Create configuration from a TOML file.
    ///
    /// A missing or unreadable file yields the default configuration; a file
    /// that exists but does not parse is an error.
    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Self, String> {
        let file_path = file_path.as_ref();
        match fs::read_to_string(file_path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) => {
                eprintln!(
                    "Warning: Could not read config file '{}': {}. Using defaults.",
                    file_path.display(),
                    e
                );
                Ok(LogConfig::default())
            }
        }
    }

    /// Parse either a document with a `[logging]` table or a bare logging table.
    pub fn from_toml_str(config_str: &str) -> Result<Self, String> {
        match toml::from_str::<ConfigWrapper>(config_str) {
            Ok(wrapper) => Ok(wrapper.logging),
            Err(e) => toml::from_str::<LogConfig>(config_str)
                // Report the wrapper error, the [logging] layout is the documented one
                .map_err(|_| format!("Failed to parse config file: {}", e)),
        }
    }

    /// Full path of the log file, joined onto `log_folder` when one is set.
    pub fn resolved_file_path(&self) -> Result<PathBuf, String> {
        let file_path = self
            .file_path
            .as_ref()
            .ok_or_else(|| "File path not specified in configuration".to_string())?;
        Ok(match &self.log_folder {
            Some(folder) => Path::new(folder).join(file_path),
            None => PathBuf::from(file_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_logging_section() {
        let config = LogConfig::from_toml_str(
            r#"
            [logging]
            type = "File"
            threshold = "warning"
            file_path = "catalog.log"
            log_folder = "logs"
            force_flush = true
            "#,
        )
        .unwrap();

        assert_eq!(config.log_type, LogType::File);
        assert_eq!(config.threshold, LogLevel::Warn);
        assert!(config.force_flush);
        assert_eq!(
            config.resolved_file_path().unwrap(),
            Path::new("logs").join("catalog.log")
        );
    }

    #[test]
    fn parses_bare_table() {
        let config = LogConfig::from_toml_str("type = \"console\"\nthreshold = \"DEBUG\"\n").unwrap();
        assert_eq!(config.log_type, LogType::Console);
        assert_eq!(config.threshold, LogLevel::Debug);
        assert_eq!(config.file_path, None);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = LogConfig::from_toml_str("[logging]\ntype = \"console\"\nthreshold = \"loud\"\n")
            .unwrap_err();
        assert!(err.starts_with("Failed to parse config file"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig::from_file(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn reads_config_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\ntype = \"console\"\nthreshold = \"error\"").unwrap();
        let config = LogConfig::from_file(file.path()).unwrap();
        assert_eq!(config.threshold, LogLevel::Error);
    }

    #[test]
    fn file_path_required_for_resolution() {
        assert!(LogConfig::default().resolved_file_path().is_err());
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
