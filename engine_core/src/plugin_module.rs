//! Wraps a plugin's C exports in the host's [`SearchModule`] trait.

use std::ffi::{CStr, CString};
use std::path::Path;

use libloading::Library;
use liblogger::{log_error, log_warn};
use plugin_core::{HandleToStrFn, MatchInfo, PluginInfo, SearchError, SearchItemHandle, SearchModule};

use crate::{load_plugin, LoaderError, PluginBinding};

/// Upper bound on handles read from one `queery` table, in case a plugin
/// forgets the terminator.
pub const MAX_HANDLES: usize = 4096;

pub struct PluginModule {
    binding: PluginBinding,
    // Declared last so the library is unloaded after the binding is dropped
    _lib: Option<Library>,
}

impl PluginModule {
    /// Loads the shared object at `lib_path`.
    ///
    /// # Safety
    /// Loading runs the library's initializers, and its exports are trusted
    /// to have the signatures in `plugin_core::plugin`.
    pub unsafe fn load<P: AsRef<Path>>(lib_path: P) -> Result<Self, LoaderError> {
        let (binding, lib) = load_plugin(lib_path)?;
        Ok(PluginModule {
            binding,
            _lib: Some(lib),
        })
    }

    /// Wraps exports that are linked into the current binary.
    ///
    /// # Safety
    /// Same contract as [`PluginBinding::from_exports`].
    pub unsafe fn from_binding(binding: PluginBinding) -> Self {
        PluginModule { binding, _lib: None }
    }

    pub fn binding(&self) -> &PluginBinding {
        &self.binding
    }

    fn string_field(&self, field: HandleToStrFn, item: SearchItemHandle) -> Result<&str, SearchError> {
        let ptr = unsafe { field(item) };
        if ptr.is_null() {
            return Err(SearchError::InvalidHandle(item.0));
        }
        // Plugin strings are static for the lifetime of the library
        unsafe { CStr::from_ptr(ptr) }
            .to_str()
            .map_err(|_| SearchError::InvalidUtf8)
    }
}

impl SearchModule for PluginModule {
    fn info(&self) -> PluginInfo<'_> {
        self.binding.info()
    }

    fn query(&self, input: &str, max_returned: u32) -> Vec<SearchItemHandle> {
        let input = match CString::new(input) {
            Ok(input) => input,
            Err(_) => {
                log_warn!("Query contains a NUL byte, sending an empty query", Some(self.binding.name.clone()));
                CString::default()
            }
        };

        let mut res = Vec::new();
        let table = unsafe { (self.binding.exports.queery)(input.as_ptr(), max_returned) };
        if table.is_null() {
            log_error!("Plugin returned a null handle table", Some(self.binding.name.clone()));
            return res;
        }

        let limit = (max_returned as usize).min(MAX_HANDLES);
        let mut cursor = table;
        while res.len() < limit {
            let handle = unsafe { *cursor };
            if handle.is_terminator() {
                break;
            }
            res.push(handle);
            cursor = cursor.wrapping_add(1);
        }
        res
    }

    fn match_info(&self, item: SearchItemHandle) -> Result<MatchInfo<'_>, SearchError> {
        let exports = self.binding.exports;
        Ok(MatchInfo {
            name: self.string_field(exports.name, item)?,
            desc: self.string_field(exports.desc, item)?,
            icon: self.string_field(exports.icon_name, item)?,
        })
    }

    // The C action reports nothing back, a null name marks the handle as invalid
    fn handle_selection(&self, selection: SearchItemHandle) -> Result<(), SearchError> {
        self.string_field(self.binding.exports.name, selection)?;
        unsafe { (self.binding.exports.handle_selection)(selection) };
        Ok(())
    }
}
