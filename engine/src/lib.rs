pub mod applications;
pub mod cli;
pub mod dmenu;
pub mod output;
pub mod plugin_manager;

use std::io::{self, BufRead, Write};

use engine_core::{ModuleRegistry, RegistryError};
use liblogger::{log_debug, log_info};
use thiserror::Error;

use crate::applications::ApplicationsModule;
use crate::cli::EngineArgs;
use crate::dmenu::DmenuModule;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("nothing to search, pass --dmenu, at least one loadable --plugin, or drop --no-builtin-modules")]
    NoModules,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Registers one built-in module, then every plugin that loads.
///
/// The built-in module is dmenu (fed from `stdin`) when requested, otherwise
/// the applications module unless `--no-builtin-modules` was given.
pub fn build_registry<R: BufRead>(args: &EngineArgs, stdin: R) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    if let Some(prompt) = &args.dmenu {
        registry.register(DmenuModule::from_reader(prompt.clone(), stdin));
    } else if !args.no_builtin_modules {
        registry.register(ApplicationsModule::discover());
    }
    plugin_manager::load_plugins(&mut registry, &args.plugin, &args.plugin_dir);
    registry
}

/// Queries every module with `args.query`, then either lists the matches or
/// runs the selected one.
pub fn run(args: &EngineArgs) -> Result<(), EngineError> {
    let registry = build_registry(args, io::stdin().lock());
    if registry.is_empty() {
        return Err(EngineError::NoModules);
    }
    log_debug!(&format!("Querying modules: {}", registry.names().join(", ")));

    let matches = registry.query_all(&args.query, args.max);

    match args.select {
        Some(index) => {
            let row = registry.select(&matches, index)?;
            log_info!(&format!("Selected [{}] {}", row.index, row.name));
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if args.json {
                output::write_json(&matches, &mut out)?;
            } else {
                output::write_listing(&matches, &mut out)?;
            }
            out.flush()?;
        }
    }
    Ok(())
}
