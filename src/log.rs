// src/log.rs
use std::fs::File;
use std::path::Path;

use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

/// Install the process-wide logger. Terminal output goes to stderr so the
/// run summary on stdout stays clean; `log_file` additionally captures
/// everything at debug level.
///
/// Only binaries call this. Library code just emits through the macros below.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let term_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        loggers.push(WriteLogger::new(LevelFilter::Debug, config, File::create(path)?));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
