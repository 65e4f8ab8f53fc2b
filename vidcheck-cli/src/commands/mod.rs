//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Concurrent decodability check of a video directory.
pub mod videos;

/// Existence check of the paths listed in a manifest.
pub mod manifest;

use crate::cli::OutputArgs;
use crate::error::CliResult;
use crate::logging::{init_console_logging, init_file_logging, level_for};
use crate::terminal::{configure_colors, register_cli_reporter};

/// Sets up colors, the reporter and logging for `command`.
pub(crate) fn prepare_output(output: &OutputArgs, command: &str) -> CliResult<()> {
    configure_colors(output.no_color);
    register_cli_reporter();

    let started = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    vidcheck_core::progress_reporting::status("Started", &started, false);

    let level = level_for(output.verbose);
    if output.savelog {
        let log_file = init_file_logging(&output.log_dir, command, level)?;
        vidcheck_core::progress_reporting::status("Log file", &log_file.display().to_string(), false);
    } else {
        init_console_logging(level);
    }
    Ok(())
}
