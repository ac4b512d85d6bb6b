use plugin_core::SearchError;
use thiserror::Error;

/// Errors raised while opening a plugin library and binding its exports.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to load plugin library: {0}")]
    Library(#[from] libloading::Error),

    #[error("plugin {0}() returned a null pointer")]
    NullPointer(&'static str),

    #[error("plugin info rejected: {0}")]
    Info(#[from] SearchError),
}

/// Errors raised when acting on the host's match list.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("no match at index {index}, {available} listed")]
    NoSuchMatch { index: usize, available: usize },

    #[error("match refers to module {0}, which is not registered")]
    UnknownModule(usize),

    #[error(transparent)]
    Search(#[from] SearchError),
}
