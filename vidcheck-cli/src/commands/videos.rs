//! Implementation of the 'videos' subcommand.
//!
//! Translates the arguments into a CheckConfig and runs the core check with
//! the ffmpeg backend and real file deletion.

use crate::cli::VideosArgs;
use crate::error::CliResult;

use std::time::Duration;

use log::info;
use vidcheck_core::config::CheckConfigBuilder;
use vidcheck_core::external::{SidecarOpener, StdFsRemover};
use vidcheck_core::{CheckConfig, CheckReport, run_video_check};

/// Builds the core configuration from the parsed arguments.
pub fn build_config(args: &VideosArgs) -> CliResult<CheckConfig> {
    CheckConfigBuilder::new()
        .root_dir(args.root_dir.clone())
        .workers(args.workers)
        .min_frames(args.min_frames)
        .max_retries(args.retries)
        .retry_delay(Duration::from_millis(args.retry_delay_ms))
        .delete_failures(args.remove)
        .save_results(args.output.savelog)
        .log_dir(args.output.log_dir.clone())
        .build()
}

/// Runs the `videos` command.
pub fn run_videos(args: VideosArgs) -> CliResult<CheckReport> {
    super::prepare_output(&args.output, "videos")?;

    let config = build_config(&args)?;
    let opener = match &args.ffmpeg {
        Some(path) => SidecarOpener::with_ffmpeg_path(path.clone()),
        None => SidecarOpener::new(),
    };

    info!(
        "Checking videos under {} with {} worker(s)",
        config.root_dir.display(),
        config.workers
    );
    let report = run_video_check(&opener, &StdFsRemover, &config)?;
    info!(
        "Run finished in {:.2}s: {} readable, {} failed",
        report.elapsed.as_secs_f64(),
        report.results.success.len(),
        report.results.failed.len()
    );

    Ok(report)
}
