//! Orchestration of a full video check run.
//!
//! Ties the stages together in their fixed order: discovery, backend
//! preflight, concurrent probing, summary, persistence and cleanup.
//! Persistence and cleanup problems are reported and recorded in the
//! returned [`CheckReport`]; they never turn a finished run into an error.

use crate::cleanup::{CleanupReport, delete_failed_files};
use crate::config::CheckConfig;
use crate::coordinator::check_files;
use crate::discovery::find_video_files;
use crate::error::CoreResult;
use crate::external::{ContainerOpener, FileRemover};
use crate::progress_reporting as report;
use crate::reporting::{print_summary, save_results};
use crate::results::ResultSet;
use crate::utils::format_elapsed;

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub results: ResultSet,
    /// Artifact path when results were saved successfully
    pub saved_to: Option<PathBuf>,
    /// Reason the artifact could not be written
    pub persistence_error: Option<String>,
    /// Present when deletion of failures was requested
    pub cleanup: Option<CleanupReport>,
    pub elapsed: Duration,
}

/// Runs a complete check of `config.root_dir`.
///
/// # Returns
///
/// * `Ok(CheckReport)` - The run completed, whatever the per-file outcomes
/// * `Err(CoreError)` - Invalid configuration, an unreadable root directory
///   or an unusable decode backend
pub fn run_video_check<O, R>(opener: &O, remover: &R, config: &CheckConfig) -> CoreResult<CheckReport>
where
    O: ContainerOpener,
    R: FileRemover + ?Sized,
{
    // ========================================================================
    // STEP 1: VALIDATE AND DISCOVER
    // ========================================================================

    config.validate()?;
    let started = Instant::now();

    report::section("Video Check");
    report::status("Root", &config.root_dir.display().to_string(), false);
    report::status("Workers", &config.workers.to_string(), false);
    report::status("Frames per probe", &config.min_frames.to_string(), false);
    report::status("Attempts per file", &config.attempts().to_string(), false);
    if config.delete_failures {
        report::status("Delete failures", "yes", true);
    }

    let files = find_video_files(&config.root_dir)?;
    report::info(&format!("Found {} video file(s)", files.len()));

    // ========================================================================
    // STEP 2: PROBE
    // ========================================================================

    let results = if files.is_empty() {
        report::warning("No video files found");
        ResultSet::new()
    } else {
        opener.preflight()?;
        report::processing(&format!("Checking {} file(s)", files.len()));
        check_files(opener, &files, config)?
    };

    // ========================================================================
    // STEP 3: REPORT, PERSIST, CLEAN UP
    // ========================================================================

    print_summary(&results);

    let mut saved_to = None;
    let mut persistence_error = None;
    if config.save_results {
        match save_results(&results, &config.log_dir) {
            Ok(path) => {
                report::success(&format!("Results saved to {}", path.display()));
                saved_to = Some(path);
            }
            Err(e) => {
                log::error!("{}", e);
                report::error(&e.to_string());
                persistence_error = Some(e.to_string());
            }
        }
    }

    let cleanup = if config.delete_failures {
        Some(delete_failed_files(&results, remover))
    } else {
        None
    };

    let elapsed = started.elapsed();
    report::status("Total time", &format_elapsed(elapsed), false);

    Ok(CheckReport {
        results,
        saved_to,
        persistence_error,
        cleanup,
        elapsed,
    })
}
