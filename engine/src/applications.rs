//! Built-in module that searches installed applications.
//!
//! Applications are read from freedesktop `.desktop` files under the
//! `applications` folder of every XDG data directory. Selecting one launches
//! its `Exec` line, through `$TERMINAL` (or `$TERM`) when the entry asks for
//! a terminal.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use liblogger::{log_debug, log_info, log_warn};
use plugin_core::{FuzzySearch, MatchInfo, PluginInfo, SearchError, SearchItemHandle, SearchMethod, SearchModule};
use walkdir::WalkDir;

static EMPTY: &str = "";

/// The parts of a `[Desktop Entry]` group the launcher uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    pub name: String,
    pub desc: Option<String>,
    pub icon: String,
    pub exec: String,
    pub path: Option<PathBuf>,
    pub term: bool,
    pub keywords: Vec<String>,
}

impl DesktopEntry {
    /// Parses the contents of a `.desktop` file.
    ///
    /// Returns `None` for anything that should not be offered: entries that
    /// are not applications, hidden ones, and ones without a name or command.
    /// Localized keys such as `Name[de]` are ignored.
    pub fn parse(contents: &str) -> Option<Self> {
        let mut in_entry = false;
        let mut name = None;
        let mut desc = None;
        let mut icon = None;
        let mut exec = None;
        let mut path = None;
        let mut term = false;
        let mut keywords = Vec::new();
        let mut is_application = false;

        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') {
                in_entry = line == "[Desktop Entry]";
                continue;
            }
            if !in_entry {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "Type" => is_application = value == "Application",
                "Name" => name = Some(value.to_string()),
                "Comment" => desc = Some(value.to_string()),
                "Icon" => icon = Some(value.to_string()),
                "Exec" => exec = Some(strip_field_codes(value)),
                "Path" if !value.is_empty() => path = Some(PathBuf::from(value)),
                "Terminal" => term = value == "true",
                "Keywords" => {
                    keywords = value
                        .split(';')
                        .filter(|k| !k.is_empty())
                        .map(str::to_string)
                        .collect()
                }
                "NoDisplay" | "Hidden" if value == "true" => return None,
                _ => {}
            }
        }

        if !is_application {
            return None;
        }
        let exec = exec.filter(|e| !e.is_empty())?;
        Some(DesktopEntry {
            name: name?,
            desc,
            icon: icon.unwrap_or_default(),
            exec,
            path,
            term,
            keywords,
        })
    }

    /// Lowercased text the query is matched against: name, keywords and
    /// description.
    fn search_text(&self) -> String {
        let mut text = self.name.clone();
        for part in self.keywords.iter().chain(self.desc.as_ref()) {
            text.push_str("||");
            text.push_str(part);
        }
        text.to_lowercase()
    }

    /// Builds the command that launches this entry.
    ///
    /// `terminal` is the emulator used for `Terminal=true` entries.
    pub fn launch_command(&self, terminal: Option<&str>) -> Result<Command, SearchError> {
        let mut cmd = if self.term {
            let terminal = terminal.ok_or_else(|| {
                SearchError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    "$TERMINAL or $TERM must be set to run terminal applications",
                ))
            })?;
            let mut cmd = Command::new(terminal);
            cmd.arg("-e").arg(self.exec.trim());
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(&self.exec);
            cmd
        };
        if let Some(dir) = self.path.as_ref().filter(|p| p.exists()) {
            cmd.current_dir(dir);
        }
        Ok(cmd)
    }
}

/// Removes `%f`, `%U` and the other field codes from an `Exec` value; `%%`
/// stands for a literal percent sign.
fn strip_field_codes(exec: &str) -> String {
    let mut out = String::with_capacity(exec.len());
    let mut chars = exec.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                out.push('%');
                chars.next();
            }
            Some(code) if code.is_ascii_alphabetic() => {
                chars.next();
            }
            _ => out.push('%'),
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `applications` folders in XDG precedence order: the user's data
/// directory first, then `$XDG_DATA_DIRS`.
pub fn application_dirs() -> Vec<PathBuf> {
    let mut dirs_found = Vec::new();
    if let Some(data_home) = dirs::data_dir() {
        dirs_found.push(data_home.join("applications"));
    }
    let data_dirs = env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
    dirs_found.extend(
        data_dirs
            .split(':')
            .filter(|d| !d.is_empty())
            .map(|d| Path::new(d).join("applications")),
    );
    dirs_found
}

struct IndexedEntry {
    entry: DesktopEntry,
    search_text: String,
}

pub struct ApplicationsModule {
    name: String,
    icon: String,
    entries: Vec<IndexedEntry>,
}

impl ApplicationsModule {
    /// Reads the applications installed in the XDG data directories.
    pub fn discover() -> Self {
        Self::from_dirs(&application_dirs())
    }

    /// Reads every `.desktop` file below `dirs`.
    ///
    /// A desktop file ID (its path relative to the `applications` folder)
    /// seen in an earlier directory hides the same ID in later ones.
    pub fn from_dirs(dirs: &[PathBuf]) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for dir in dirs.iter().filter(|d| d.is_dir()) {
            for file in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
                let file = match file {
                    Ok(file) => file,
                    Err(e) => {
                        log_warn!(&format!("Cannot walk {}", dir.display()), Some(e.to_string()));
                        continue;
                    }
                };
                let path = file.path();
                if !file.file_type().is_file() || path.extension().map_or(true, |ext| ext != "desktop") {
                    continue;
                }
                let id = path.strip_prefix(dir).unwrap_or(path).to_string_lossy().replace('/', "-");
                if !seen.insert(id) {
                    continue;
                }
                match fs::read_to_string(path) {
                    Ok(contents) => {
                        if let Some(entry) = DesktopEntry::parse(&contents) {
                            entries.push(entry);
                        }
                    }
                    Err(e) => log_warn!(&format!("Skipping {}", path.display()), Some(e.to_string())),
                }
            }
        }

        log_debug!(&format!("Found {} applications", entries.len()));
        Self::with_entries(entries)
    }

    pub fn with_entries(entries: Vec<DesktopEntry>) -> Self {
        Self {
            name: "Applications".into(),
            icon: "application-x-executable".into(),
            entries: entries
                .into_iter()
                .map(|entry| IndexedEntry {
                    search_text: entry.search_text(),
                    entry,
                })
                .collect(),
        }
    }

    fn entry(&self, item: SearchItemHandle) -> Result<&DesktopEntry, SearchError> {
        item.index(self.entries.len())
            .map(|idx| &self.entries[idx].entry)
            .ok_or(SearchError::InvalidHandle(item.0))
    }
}

impl SearchModule for ApplicationsModule {
    fn info(&self) -> PluginInfo<'_> {
        PluginInfo {
            name: &self.name,
            icon: &self.icon,
        }
    }

    fn query(&self, input: &str, max_returned: u32) -> Vec<SearchItemHandle> {
        let input = input.to_lowercase();
        let mut matches = Vec::new();
        for (idx, indexed) in self.entries.iter().enumerate() {
            let Ok(handle) = SearchItemHandle::try_from(idx) else {
                break;
            };
            if let Some((score, _)) = FuzzySearch::match_idxs(&indexed.search_text, &input) {
                matches.push((score, handle));
            }
        }
        matches.sort_by(|a, b| b.0.cmp(&a.0));
        matches
            .into_iter()
            .take(max_returned as usize)
            .map(|(_, handle)| handle)
            .collect()
    }

    fn match_info(&self, item: SearchItemHandle) -> Result<MatchInfo<'_>, SearchError> {
        let entry = self.entry(item)?;
        Ok(MatchInfo {
            name: &entry.name,
            desc: entry.desc.as_deref().unwrap_or(EMPTY),
            icon: &entry.icon,
        })
    }

    fn handle_selection(&self, selection: SearchItemHandle) -> Result<(), SearchError> {
        let entry = self.entry(selection)?;
        let terminal = env::var("TERMINAL").or_else(|_| env::var("TERM")).ok();
        let mut cmd = entry.launch_command(terminal.as_deref())?;
        let child = cmd.spawn()?;
        log_info!(&format!("Launched {} (pid {})", entry.name, child.id()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    const FIREFOX: &str = "\
[Desktop Entry]
Type=Application
Name=Firefox
Name[de]=Feuerfuchs
Comment=Web Browser
Icon=firefox
Exec=firefox %u
Keywords=Internet;WWW;

[Desktop Action new-window]
Name=Open a New Window
Exec=firefox --new-window %u
";

    fn entry(name: &str, exec: &str) -> DesktopEntry {
        DesktopEntry {
            name: name.into(),
            desc: None,
            icon: String::new(),
            exec: exec.into(),
            path: None,
            term: false,
            keywords: vec![],
        }
    }

    #[test]
    fn parses_main_group_only() {
        let entry = DesktopEntry::parse(FIREFOX).unwrap();
        assert_eq!(entry.name, "Firefox");
        assert_eq!(entry.desc.as_deref(), Some("Web Browser"));
        assert_eq!(entry.icon, "firefox");
        assert_eq!(entry.exec, "firefox");
        assert_eq!(entry.keywords, vec!["Internet", "WWW"]);
        assert!(!entry.term);
    }

    #[test]
    fn skips_hidden_and_non_applications() {
        assert!(DesktopEntry::parse("[Desktop Entry]\nType=Link\nName=Docs\nExec=x\n").is_none());
        assert!(DesktopEntry::parse("[Desktop Entry]\nType=Application\nName=A\nExec=a\nNoDisplay=true\n").is_none());
        assert!(DesktopEntry::parse("[Desktop Entry]\nType=Application\nName=A\n").is_none());
        assert!(DesktopEntry::parse("Type=Application\nName=A\nExec=a\n").is_none());
    }

    #[test]
    fn field_codes_are_removed() {
        assert_eq!(strip_field_codes("gimp %U"), "gimp");
        assert_eq!(strip_field_codes("printf 100%% %f done"), "printf 100% done");
        assert_eq!(strip_field_codes("tail 50%"), "tail 50%");
    }

    #[test]
    fn matches_keywords_and_description() {
        let module = ApplicationsModule::with_entries(vec![
            entry("Calculator", "calc"),
            DesktopEntry::parse(FIREFOX).unwrap(),
        ]);
        assert_eq!(module.query("www", 10), vec![SearchItemHandle(1)]);
        assert_eq!(module.query("BROWSER", 10), vec![SearchItemHandle(1)]);
        assert_eq!(module.query("", 10).len(), 2);
        assert_eq!(module.query("", 1).len(), 1);

        let info = module.match_info(SearchItemHandle(0)).unwrap();
        assert_eq!((info.name, info.desc, info.icon), ("Calculator", "", ""));
        assert!(module.match_info(SearchItemHandle(2)).unwrap_err().is_invalid_handle());
        assert!(module.handle_selection(SearchItemHandle(-1)).unwrap_err().is_invalid_handle());
    }

    #[test]
    fn launches_through_shell_or_terminal() {
        let plain = entry("Editor", "gedit --new-window");
        let cmd = plain.launch_command(None).unwrap();
        assert_eq!(cmd.get_program(), "sh");
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(args, vec!["-c", "gedit --new-window"]);

        let term = DesktopEntry { term: true, ..entry("Top", "htop ") };
        let cmd = term.launch_command(Some("xterm")).unwrap();
        assert_eq!(cmd.get_program(), "xterm");
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(args, vec!["-e", "htop"]);

        assert!(term.launch_command(None).is_err());
    }

    #[test]
    fn earlier_directories_win() {
        let user = tempfile::tempdir().unwrap();
        let system = tempfile::tempdir().unwrap();
        fs::create_dir(system.path().join("kde")).unwrap();

        fs::write(user.path().join("editor.desktop"), "[Desktop Entry]\nType=Application\nName=Mine\nExec=vim\n").unwrap();
        fs::write(system.path().join("editor.desktop"), "[Desktop Entry]\nType=Application\nName=Theirs\nExec=nano\n").unwrap();
        fs::write(system.path().join("kde").join("calc.desktop"), "[Desktop Entry]\nType=Application\nName=Calc\nExec=kcalc\n").unwrap();
        fs::write(system.path().join("notes.txt"), "[Desktop Entry]\nType=Application\nName=Nope\nExec=x\n").unwrap();

        let module = ApplicationsModule::from_dirs(&[
            user.path().to_path_buf(),
            system.path().to_path_buf(),
            PathBuf::from("/nonexistent/applications"),
        ]);
        let mut names: Vec<&str> = module
            .query("", 10)
            .into_iter()
            .map(|h| module.match_info(h).unwrap().name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Calc", "Mine"]);
    }
}
