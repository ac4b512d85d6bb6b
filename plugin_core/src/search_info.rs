use serde::Serialize;

use crate::SearchError;

/// Name and icon a module registers itself with.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct PluginInfo<'a> {
    pub name: &'a str,
    pub icon: &'a str,
}

impl<'a> PluginInfo<'a> {
    /// Parses the identification string a plugin returns from `init`,
    /// `"<plugin name>,<mime-type>"`. Only the first comma separates.
    pub fn parse(info: &'a str) -> Result<Self, SearchError> {
        match info.split_once(',') {
            Some((name, icon)) if !name.is_empty() => Ok(PluginInfo { name, icon }),
            _ => Err(SearchError::MalformedInfo(info.to_string())),
        }
    }
}

/// Display fields of a single item.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct MatchInfo<'a> {
    pub name: &'a str,
    pub desc: &'a str,
    pub icon: &'a str,
}
