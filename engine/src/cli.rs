use std::path::PathBuf;

use clap::Parser;

/// Queries search modules and plugins, lists their matches and acts on a
/// selection. Plugins are shared objects exporting the catalog C interface.
#[derive(Parser, Debug)]
#[command(name = "engine", version)]
pub struct EngineArgs {
    /// Plugin to load, either a path to a shared object or a bare crate name
    /// looked up in --plugin-dir. Can be given many times.
    #[arg(short, long, value_parser)]
    pub plugin: Vec<PathBuf>,

    /// Folder bare plugin names are resolved in.
    #[arg(long, default_value = ".")]
    pub plugin_dir: PathBuf,

    /// Dmenu mode, optionally followed by a prompt. Options are the lines of
    /// stdin and the selected option is printed on stdout.
    #[arg(short, long)]
    pub dmenu: Option<Option<String>>,

    /// Do not register the applications module. Dmenu mode replaces it
    /// anyway.
    #[arg(short, long)]
    pub no_builtin_modules: bool,

    /// Search text.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Maximum matches shown per module.
    #[arg(short, long, default_value_t = 10)]
    pub max: u32,

    /// Select the match with this index and run its action instead of listing.
    #[arg(short, long)]
    pub select: Option<usize>,

    /// Print the listing as JSON.
    #[arg(long)]
    pub json: bool,

    /// Logger configuration file.
    #[arg(short, long, default_value = "app_config.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        EngineArgs::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = EngineArgs::parse_from(["engine"]);
        assert!(args.plugin.is_empty());
        assert_eq!(args.query, "");
        assert_eq!(args.max, 10);
        assert_eq!(args.select, None);
        assert!(args.dmenu.is_none());
        assert!(!args.no_builtin_modules);
        assert_eq!(args.config, PathBuf::from("app_config.toml"));
    }

    #[test]
    fn dmenu_prompt_is_optional() {
        let args = EngineArgs::parse_from(["engine", "--dmenu"]);
        assert_eq!(args.dmenu, Some(None));

        let args = EngineArgs::parse_from(["engine", "-d", "Pick one", "-p", "a.so", "-p", "b"]);
        assert_eq!(args.dmenu, Some(Some("Pick one".to_string())));
        assert_eq!(args.plugin, vec![PathBuf::from("a.so"), PathBuf::from("b")]);
    }

    #[test]
    fn builtin_modules_can_be_disabled() {
        let args = EngineArgs::parse_from(["engine", "-n", "-p", "plugin_example"]);
        assert!(args.no_builtin_modules);
    }
}
