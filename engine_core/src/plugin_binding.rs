use std::ffi::CStr;

use plugin_core::{HandleSelectionFn, HandleToStrFn, InitFn, PluginInfo, QueeryFn};

use crate::LoaderError;

/// The six functions a plugin exports, resolved but not yet validated.
#[derive(Clone, Copy)]
pub struct PluginExports {
    pub init: InitFn,
    pub queery: QueeryFn,
    pub name: HandleToStrFn,
    pub desc: HandleToStrFn,
    pub icon_name: HandleToStrFn,
    pub handle_selection: HandleSelectionFn,
}

/// Represents a loaded plugin and the host's binding to it.
///
/// Created after the plugin's `init` has been called and its identification
/// string parsed. The function pointers are only valid while the library they
/// came from stays loaded, which [`PluginModule`](crate::PluginModule) takes
/// care of.
#[derive(Clone)]
pub struct PluginBinding {
    /// Display name, e.g. `"Example plugin"`.
    pub name: String,

    /// Icon name or MIME-type-like tag, e.g. `"text-x-rust"`.
    pub icon: String,

    pub exports: PluginExports,
}

impl PluginBinding {
    /// Calls `init` and parses `"<name>,<icon>"`.
    ///
    /// # Safety
    /// Every pointer in `exports` must be a function with the declared
    /// signature that stays callable for as long as the binding is used.
    pub unsafe fn from_exports(exports: PluginExports) -> Result<Self, LoaderError> {
        let info_ptr = (exports.init)();
        if info_ptr.is_null() {
            return Err(LoaderError::NullPointer("init"));
        }

        let raw = CStr::from_ptr(info_ptr).to_string_lossy();
        let info = PluginInfo::parse(&raw)?;

        Ok(PluginBinding {
            name: info.name.to_string(),
            icon: info.icon.to_string(),
            exports,
        })
    }

    pub fn info(&self) -> PluginInfo<'_> {
        PluginInfo {
            name: &self.name,
            icon: &self.icon,
        }
    }
}
