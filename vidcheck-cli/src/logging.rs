// ============================================================================
// vidcheck-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console or File Logging for a Run
//
// The application logs through the standard `log` crate. Without --savelog
// records go to stderr through `env_logger`; with --savelog they go to a
// timestamped file in the log directory through the core's log4rs setup.
// User-facing output never goes through the logger (see terminal.rs).
//
// USAGE:
// - default: info level
// - --verbose: debug level
// - RUST_LOG overrides either on the console

use std::io::Write;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use vidcheck_core::CoreError;
use vidcheck_core::file_logging::{log_file_path, setup_file_logging};

use crate::error::{CliErrorContext, CliResult};

/// Level used for a run.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes console logging on stderr.
pub fn init_console_logging(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Console logger initialized with level: {}", level);
    }
}

/// Initializes file logging for `command` and returns the log file path.
pub fn init_file_logging(log_dir: &Path, command: &str, level: LevelFilter) -> CliResult<PathBuf> {
    std::fs::create_dir_all(log_dir)
        .cli_with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let log_file = log_file_path(log_dir, command);
    setup_file_logging(&log_file, level)
        .map_err(|e| CoreError::OperationFailed(format!("Failed to set up file logging: {e}")))?;

    log::info!("vidcheck {} run started", command);
    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false), LevelFilter::Info);
        assert_eq!(level_for(true), LevelFilter::Debug);
    }
}
