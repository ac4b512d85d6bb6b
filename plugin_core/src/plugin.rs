use std::os::raw::c_char;

use crate::{MatchInfo, PluginInfo, SearchError, SearchItemHandle};

/// Returns the plugin identification string, `"<name>,<icon>"`.
pub type InitFn = unsafe extern "C" fn() -> *const c_char;

/// Returns a table of handles terminated by [`SearchItemHandle::TERMINATOR`].
///
/// The table is owned by the plugin and stays valid until the next call.
pub type QueeryFn = unsafe extern "C" fn(input: *const c_char, max_returned: u32) -> *const SearchItemHandle;

/// Used for `name`, `desc` and `icon_name`. Null means the handle is invalid.
pub type HandleToStrFn = unsafe extern "C" fn(SearchItemHandle) -> *const c_char;

/// Runs the selection action. Nothing comes back, so hosts check the handle
/// with `name` before calling it.
pub type HandleSelectionFn = unsafe extern "C" fn(SearchItemHandle);

/// Methods every module the host can query must provide.
///
/// Handles passed to `match_info` and `handle_selection` should come from
/// `query`, but implementations still reject anything out of range with
/// [`SearchError::InvalidHandle`].
pub trait SearchModule {
    fn info(&self) -> PluginInfo<'_>;

    /// Handles for items matching `input`, at most `max_returned` of them,
    /// best match first.
    fn query(&self, input: &str, max_returned: u32) -> Vec<SearchItemHandle>;

    fn match_info(&self, item: SearchItemHandle) -> Result<MatchInfo<'_>, SearchError>;

    // NOTE: "handle" means two different things here, the item and the action
    fn handle_selection(&self, selection: SearchItemHandle) -> Result<(), SearchError>;
}
