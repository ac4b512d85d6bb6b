use std::path::Path;

use libloading::{Library, Symbol};
use plugin_core::{HandleSelectionFn, HandleToStrFn, InitFn, QueeryFn};
use liblogger::log_debug;

use crate::plugin_binding::{PluginBinding, PluginExports};
use crate::LoaderError;

/// Loads a plugin from a shared library file.
///
/// Every export is resolved up front, so a library missing any of them is
/// rejected here rather than on first use. The returned `Library` must
/// outlive the binding.
pub fn load_plugin<P: AsRef<Path>>(path: P) -> Result<(PluginBinding, Library), LoaderError> {
    unsafe {
        let lib = Library::new(path.as_ref())?;

        // Symbols borrow the library, copy the pointers out before moving it
        let exports = {
            let init: Symbol<InitFn> = lib.get(b"init")?;
            let queery: Symbol<QueeryFn> = lib.get(b"queery")?;
            let name: Symbol<HandleToStrFn> = lib.get(b"name")?;
            let desc: Symbol<HandleToStrFn> = lib.get(b"desc")?;
            let icon_name: Symbol<HandleToStrFn> = lib.get(b"icon_name")?;
            let handle_selection: Symbol<HandleSelectionFn> = lib.get(b"handle_selection")?;

            PluginExports {
                init: *init,
                queery: *queery,
                name: *name,
                desc: *desc,
                icon_name: *icon_name,
                handle_selection: *handle_selection,
            }
        };

        let binding = PluginBinding::from_exports(exports)?;
        log_debug!(&format!(
            "Loaded plugin '{}' from {}",
            binding.name,
            path.as_ref().display()
        ));

        Ok((binding, lib))
    }
}
