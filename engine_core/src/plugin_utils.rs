use std::path::{Path, PathBuf};

/// Platform file name of a plugin library built from a crate called `name`.
pub fn resolve_plugin_filename(name: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.dll", name)
    } else if cfg!(target_os = "macos") {
        format!("lib{}.dylib", name)
    } else {
        format!("lib{}.so", name)
    }
}

/// Resolves a `--plugin` argument.
///
/// Anything that looks like a path (has a directory part or an extension) is
/// used as given; a bare name is turned into a library file name inside
/// `plugin_dir`.
pub fn resolve_plugin_path(arg: &Path, plugin_dir: &Path) -> PathBuf {
    let is_bare_name = arg.parent().map_or(true, |p| p.as_os_str().is_empty()) && arg.extension().is_none();
    match arg.to_str() {
        Some(name) if is_bare_name => plugin_dir.join(resolve_plugin_filename(name)),
        _ => arg.to_path_buf(),
    }
}
