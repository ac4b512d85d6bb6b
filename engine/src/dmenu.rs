//! Built-in module that offers the lines of a reader, usually stdin.

use std::io::{self, BufRead, Write};

use liblogger::log_warn;
use plugin_core::{FuzzySearch, MatchInfo, PluginInfo, SearchError, SearchItemHandle, SearchMethod, SearchModule};

static EMPTY: &str = "";

pub struct DmenuModule {
    name: String,
    icon: String,
    options: Vec<String>,
}

impl DmenuModule {
    pub fn from_reader<R: BufRead>(prompt: Option<String>, reader: R) -> Self {
        let options = reader
            .lines()
            .filter_map(|line| match line {
                Ok(line) => Some(line),
                Err(e) => {
                    log_warn!("Skipping unreadable dmenu line", Some(e.to_string()));
                    None
                }
            })
            .collect();
        Self::with_options(prompt, options)
    }

    pub fn with_options(prompt: Option<String>, options: Vec<String>) -> Self {
        Self {
            name: prompt.unwrap_or_else(|| "Dmenu".into()),
            icon: "system-search".into(),
            options,
        }
    }

    fn option(&self, item: SearchItemHandle) -> Result<&str, SearchError> {
        item.index(self.options.len())
            .map(|idx| self.options[idx].as_str())
            .ok_or(SearchError::InvalidHandle(item.0))
    }

    /// Writes the selected line, which is the whole point of dmenu mode.
    pub fn select_into<W: Write>(&self, selection: SearchItemHandle, out: &mut W) -> Result<(), SearchError> {
        writeln!(out, "{}", self.option(selection)?)?;
        Ok(())
    }
}

impl SearchModule for DmenuModule {
    fn info(&self) -> PluginInfo<'_> {
        PluginInfo {
            name: &self.name,
            icon: &self.icon,
        }
    }

    fn query(&self, input: &str, max_returned: u32) -> Vec<SearchItemHandle> {
        let mut matches = Vec::new();
        for (idx, opt) in self.options.iter().enumerate() {
            // Lines past i32::MAX cannot be addressed by a handle
            let Ok(handle) = SearchItemHandle::try_from(idx) else {
                log_warn!("Ignoring dmenu lines past the handle range", Some(format!("{} lines", self.options.len())));
                break;
            };
            if let Some((score, _)) = FuzzySearch::match_idxs(opt, input) {
                matches.push((score, handle));
            }
        }
        // Stable, so equal scores keep the input order
        matches.sort_by(|a, b| b.0.cmp(&a.0));
        matches
            .into_iter()
            .take(max_returned as usize)
            .map(|(_, handle)| handle)
            .collect()
    }

    fn match_info(&self, item: SearchItemHandle) -> Result<MatchInfo<'_>, SearchError> {
        Ok(MatchInfo {
            name: self.option(item)?,
            desc: EMPTY,
            icon: EMPTY,
        })
    }

    fn handle_selection(&self, selection: SearchItemHandle) -> Result<(), SearchError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.select_into(selection, &mut lock)?;
        lock.flush()?;
        Ok(())
    }
}
