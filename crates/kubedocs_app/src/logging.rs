//! Logger initialization for kubedocs_app.
//!
//! A run logs to the terminal and to `./run.log` in the working
//! directory; the file keeps the full record the final summary refers to.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./run.log";

/// Installs the combined terminal + file logger. An uncreatable log file
/// downgrades to terminal-only with a warning, never a failed start.
pub fn initialize() {
    let level = LevelFilter::Info;
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    match File::create(LOG_FILE) {
        Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
        Err(err) => eprintln!("Warning: could not create log file {LOG_FILE}: {err}"),
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
