//! A fixed list of entries compiled into a plugin.
//!
//! A [`Catalog`] is built by a `const fn` and lives in a `static`, so it
//! exists before the host makes its first call and never changes afterwards.
//! Every string is kept both as a NUL-terminated C string, handed out through
//! the C exports, and as a `&str` for Rust callers.

use std::ffi::CStr;
use std::io::{self, Write};

use crate::{MatchInfo, PluginInfo, SearchError, SearchItemHandle, SearchModule};

/// A `'static` C string that is known to be UTF-8.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StaticText {
    c: &'static CStr,
    s: &'static str,
}

impl StaticText {
    pub const fn new(c: &'static CStr) -> Self {
        let s = match core::str::from_utf8(c.to_bytes()) {
            Ok(s) => s,
            Err(_) => panic!("catalog text must be UTF-8"),
        };
        StaticText { c, s }
    }

    pub const fn as_str(&self) -> &'static str {
        self.s
    }

    pub const fn as_c_str(&self) -> &'static CStr {
        self.c
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Entry {
    name: StaticText,
    desc: StaticText,
    icon: StaticText,
}

impl Entry {
    pub const fn new(name: &'static CStr, desc: &'static CStr, icon: &'static CStr) -> Self {
        Entry {
            name: StaticText::new(name),
            desc: StaticText::new(desc),
            icon: StaticText::new(icon),
        }
    }

    /// An entry whose name, description and icon are the same string.
    pub const fn uniform(value: &'static CStr) -> Self {
        Self::new(value, value, value)
    }

    pub const fn name(&self) -> StaticText {
        self.name
    }

    pub const fn desc(&self) -> StaticText {
        self.desc
    }

    pub const fn icon(&self) -> StaticText {
        self.icon
    }
}

/// Immutable, ordered list of entries addressed by their index.
#[derive(Debug)]
pub struct Catalog {
    info: StaticText,
    entries: &'static [Entry],
    handles: &'static [SearchItemHandle],
}

impl Catalog {
    /// Builds a catalog from its identification string, its entries and the
    /// handle table the C `queery` export returns.
    ///
    /// `handles` must be `[0, 1, .., entries.len() - 1, -1]` and `info` must
    /// contain a comma; both are checked when the `static` is evaluated.
    pub const fn new(
        info: &'static CStr,
        entries: &'static [Entry],
        handles: &'static [SearchItemHandle],
    ) -> Self {
        assert!(
            handles.len() == entries.len() + 1,
            "handle table needs one handle per entry plus the terminator"
        );
        let mut idx = 0;
        while idx < entries.len() {
            assert!(handles[idx].0 == idx as i32, "handle table must list entries in order");
            idx += 1;
        }
        assert!(
            handles[entries.len()].is_terminator(),
            "handle table must end with the terminator"
        );

        let info_bytes = info.to_bytes();
        let mut has_separator = false;
        let mut idx = 0;
        while idx < info_bytes.len() {
            if info_bytes[idx] == b',' {
                has_separator = true;
            }
            idx += 1;
        }
        assert!(has_separator, "plugin info must look like \"<name>,<icon>\"");

        Catalog {
            info: StaticText::new(info),
            entries,
            handles,
        }
    }

    /// The identification string registered with the host.
    pub const fn init(&self) -> &'static str {
        self.info.as_str()
    }

    pub const fn init_c_str(&self) -> &'static CStr {
        self.info.as_c_str()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every handle in the catalog, in insertion order.
    pub fn query(&self) -> &'static [SearchItemHandle] {
        let handles: &'static [SearchItemHandle] = self.handles;
        &handles[..self.entries.len()]
    }

    /// The same handles followed by [`SearchItemHandle::TERMINATOR`].
    pub const fn terminated_handles(&self) -> &'static [SearchItemHandle] {
        self.handles
    }

    pub fn entry(&self, handle: SearchItemHandle) -> Result<&'static Entry, SearchError> {
        let entries: &'static [Entry] = self.entries;
        handle
            .index(entries.len())
            .map(|idx| &entries[idx])
            .ok_or(SearchError::InvalidHandle(handle.0))
    }

    pub fn name(&self, handle: SearchItemHandle) -> Result<&'static str, SearchError> {
        self.entry(handle).map(|e| e.name().as_str())
    }

    pub fn description(&self, handle: SearchItemHandle) -> Result<&'static str, SearchError> {
        self.entry(handle).map(|e| e.desc().as_str())
    }

    pub fn icon_name(&self, handle: SearchItemHandle) -> Result<&'static str, SearchError> {
        self.entry(handle).map(|e| e.icon().as_str())
    }

    /// Writes the one-line selection confirmation to `out`.
    pub fn select_into<W: Write>(&self, handle: SearchItemHandle, out: &mut W) -> Result<(), SearchError> {
        let entry = self.entry(handle)?;
        writeln!(out, "{} handling: {}", self.plugin_name(), entry.name().as_str())?;
        Ok(())
    }

    /// Prints the selection confirmation on stdout.
    pub fn handle_selection(&self, handle: SearchItemHandle) -> Result<(), SearchError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.select_into(handle, &mut lock)?;
        lock.flush()?;
        Ok(())
    }

    fn plugin_name(&self) -> &'static str {
        self.info.as_str().split_once(',').map_or(self.info.as_str(), |(name, _)| name)
    }
}

impl SearchModule for Catalog {
    fn info(&self) -> PluginInfo<'_> {
        let (name, icon) = self.info.as_str().split_once(',').unwrap_or((self.info.as_str(), ""));
        PluginInfo { name, icon }
    }

    // The catalog is a demonstration list, every entry matches any input
    fn query(&self, _input: &str, max_returned: u32) -> Vec<SearchItemHandle> {
        self.query().iter().copied().take(max_returned as usize).collect()
    }

    fn match_info(&self, item: SearchItemHandle) -> Result<MatchInfo<'_>, SearchError> {
        let entry = self.entry(item)?;
        Ok(MatchInfo {
            name: entry.name().as_str(),
            desc: entry.desc().as_str(),
            icon: entry.icon().as_str(),
        })
    }

    fn handle_selection(&self, selection: SearchItemHandle) -> Result<(), SearchError> {
        Catalog::handle_selection(self, selection)
    }
}
