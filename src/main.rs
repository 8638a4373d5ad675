// src/main.rs

use std::io;
use std::process::ExitCode;
use env_logger::Env;
use log::{error, info, warn};
use polystack::config::PolystackConfig;
use polystack::core::console::Console;

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => PolystackConfig::load_from_file(&path),
        None => PolystackConfig::load(),
    };
    let (config, config_error) = match config {
        Ok(config) => (config, None),
        Err(e) => (PolystackConfig::default(), Some(e)),
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("POLYSTACK_LOG", config.log_level.as_str())
        .write_style_or("POLYSTACK_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();

    if let Some(e) = config_error {
        warn!("Could not read configuration, using defaults: {}", e);
    }
    info!("Saving results to {}", config.output_path);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config);
    match console.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Console I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
