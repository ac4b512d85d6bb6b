pub mod error;
pub use error::{LoaderError, RegistryError};

pub mod plugin_binding;
pub use plugin_binding::{PluginBinding, PluginExports};

pub mod plugin_loader;
pub use plugin_loader::load_plugin;

pub mod plugin_module;
pub use plugin_module::PluginModule;

pub mod plugin_registry;
pub use plugin_registry::{MatchRow, ModuleMatches, ModuleRegistry};

pub mod plugin_utils;
