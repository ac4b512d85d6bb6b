//! Loads plugin libraries named on the command line into the registry.

use std::path::{Path, PathBuf};

use engine_core::plugin_utils::resolve_plugin_path;
use engine_core::{ModuleRegistry, PluginModule};
use liblogger::{log_info, log_warn};

/// Loads every plugin in `plugins`, skipping the ones that fail, and returns
/// how many were registered.
pub fn load_plugins(registry: &mut ModuleRegistry, plugins: &[PathBuf], plugin_dir: &Path) -> usize {
    let mut loaded = 0;
    for arg in plugins {
        let path = resolve_plugin_path(arg, plugin_dir);
        // Plugins are trusted to export the catalog C interface
        match unsafe { PluginModule::load(&path) } {
            Ok(module) => {
                log_info!(&format!(
                    "Registered plugin '{}' from {}",
                    module.binding().name,
                    path.display()
                ));
                registry.register(module);
                loaded += 1;
            }
            Err(e) => log_warn!(
                &format!("Failed to load library {}", path.display()),
                Some(e.to_string())
            ),
        }
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_plugins_are_skipped() {
        let mut registry = ModuleRegistry::new();
        let loaded = load_plugins(
            &mut registry,
            &[PathBuf::from("definitely_not_a_plugin")],
            Path::new("/nonexistent"),
        );
        assert_eq!(loaded, 0);
        assert!(registry.is_empty());
    }
}
