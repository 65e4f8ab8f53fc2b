//! Core library for media dataset integrity checks.
//!
//! This crate finds video files under a directory tree, verifies that each
//! one can actually be decoded (using ffmpeg through `ffmpeg-sidecar`) with a
//! bounded pool of workers, and reports, persists and optionally deletes the
//! failures. It also checks that the paths listed in a dataset manifest exist.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidcheck_core::{CheckConfig, run_video_check};
//! use vidcheck_core::external::{SidecarOpener, StdFsRemover};
//! use std::path::PathBuf;
//!
//! let mut config = CheckConfig::new(PathBuf::from("/data/videos"));
//! config.workers = 16;
//! config.save_results = true;
//!
//! let report = run_video_check(&SidecarOpener::new(), &StdFsRemover, &config).unwrap();
//! println!("{} failed", report.results.failed.len());
//! ```

pub mod cleanup;
pub mod config;
pub mod coordinator;
pub mod discovery;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod manifest;
pub mod probe;
pub mod processing;
pub mod progress_reporting;
pub mod reporting;
pub mod results;
pub mod utils;

// Re-exports for public API
pub use cleanup::{CleanupReport, DeletionOutcome, DeletionResult, delete_failed_files};
pub use config::{CheckConfig, CheckConfigBuilder};
pub use coordinator::check_files;
pub use discovery::find_video_files;
pub use error::{CoreError, CoreResult};
pub use manifest::{ManifestOptions, ManifestReport, check_manifest};
pub use probe::{ProbeOutcome, ProbeResult, RetryPolicy, probe_file};
pub use processing::{CheckReport, run_video_check};
pub use reporting::{load_results, save_results};
pub use results::{FailedFile, ResultSet};
pub use utils::{format_elapsed, get_timestamp};
