pub mod catalog;
pub mod error;
pub mod exports;
pub mod fuzzy;
pub mod handle;
pub mod logging;
pub mod plugin;
pub mod plugin_macros;
pub mod search_info;

pub use catalog::{Catalog, Entry, StaticText};
pub use error::SearchError;
pub use fuzzy::{FuzzySearch, SearchMethod};
pub use handle::SearchItemHandle;
pub use plugin::{HandleSelectionFn, HandleToStrFn, InitFn, QueeryFn, SearchModule};
pub use search_info::{MatchInfo, PluginInfo};

#[cfg(feature = "logging")]
pub use liblogger::{log_debug, log_error, log_info, log_warn};
