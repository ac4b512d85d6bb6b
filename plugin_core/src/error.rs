use std::io;
use thiserror::Error;

/// Errors surfaced by search modules, on either side of the plugin boundary.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("invalid item handle {0}")]
    InvalidHandle(i32),

    #[error("malformed plugin info '{0}', expected \"<name>,<icon>\"")]
    MalformedInfo(String),

    #[error("plugin returned a string that is not valid UTF-8")]
    InvalidUtf8,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl SearchError {
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, SearchError::InvalidHandle(_))
    }
}
