use std::process::ExitCode;

use clap::Parser;
use engine::cli::EngineArgs;
use liblogger::{LogConfig, Logger};

fn main() -> ExitCode {
    let args = EngineArgs::parse();

    if let Err(e) = Logger::init_with_config_file(&args.config) {
        eprintln!("Falling back to console logging: {}", e);
        let _ = Logger::init_with_config(LogConfig::default());
    }

    match engine::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("engine: {}", e);
            ExitCode::FAILURE
        }
    }
}
