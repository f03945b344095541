//! log4rs setup.
//!
//! Everything is written to stderr so that stdout only carries the verdict.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise logging from `config_file`, or log warnings to stderr when the
/// file is absent or unreadable.
pub fn init_logging(config_file: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(config_file).exists() {
        match log4rs::init_file(config_file, Default::default()) {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!("Error initializing log4rs from {config_file}: {e}"),
        }
    }
    log4rs::init_config(stderr_config(LevelFilter::Warn)?)?;
    log::debug!("No log config at {config_file}, logging to stderr");
    Ok(())
}

/// A stderr-only log4rs config at `level`.
pub fn stderr_config(level: LevelFilter) -> Result<log4rs::Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
