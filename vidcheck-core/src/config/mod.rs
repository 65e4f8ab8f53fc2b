//! Configuration structures and constants for the vidcheck-core library.
//!
//! This module provides the configuration for a decodability check run:
//! where to look, how many workers to use, how hard to try per file and what
//! to do with the results.

mod builder;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};

pub use builder::CheckConfigBuilder;

// Default constants

/// Default size of the probing worker pool.
pub const DEFAULT_WORKERS: usize = 8;

/// Default number of frames a probe tries to decode before declaring success.
/// Shorter clips that end cleanly before this count still pass.
pub const DEFAULT_MIN_FRAMES: u32 = 10;

/// Default number of decode attempts per file.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default pause between two decode attempts of the same file.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Emit a progress line every this many completed probes.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10;

/// Emit a progress line every this many manifest records.
pub const MANIFEST_PROGRESS_INTERVAL: usize = 100;

/// Container extensions (lowercase) recognized as video files.
pub const VIDEO_EXTENSIONS: &[&str] = &["avi", "mp4", "mov", "mkv"];

/// Main configuration structure for a video decodability check.
///
/// Typically created by the CLI from its arguments and handed to
/// `run_video_check`. All fields except `root_dir` have defaults.
///
/// # Examples
///
/// ```rust,no_run
/// use vidcheck_core::config::CheckConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CheckConfigBuilder::new()
///     .root_dir(PathBuf::from("/data/videos"))
///     .workers(16)
///     .min_frames(5)
///     .delete_failures(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Root of the directory tree to scan for videos
    pub root_dir: PathBuf,

    /// Number of probes that may run at the same time
    pub workers: usize,

    /// Frames to decode per attempt before declaring the file readable
    pub min_frames: u32,

    /// Decode attempts per file (0 is treated as a single attempt)
    pub max_retries: u32,

    /// Pause between attempts
    pub retry_delay: Duration,

    /// Completed-probe interval between progress lines
    pub progress_interval: usize,

    /// Delete files that fail probing once the run is over
    pub delete_failures: bool,

    /// Persist the result set as a timestamped JSON artifact
    pub save_results: bool,

    /// Directory receiving the JSON artifact and the run log
    pub log_dir: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            workers: DEFAULT_WORKERS,
            min_frames: DEFAULT_MIN_FRAMES,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            delete_failures: false,
            save_results: false,
            log_dir: PathBuf::from("."),
        }
    }
}

impl CheckConfig {
    /// Creates a configuration for `root_dir` with every other field defaulted.
    pub fn new(root_dir: PathBuf) -> Self {
        Self {
            root_dir,
            ..Self::default()
        }
    }

    /// Rejects values that would make the run meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.workers == 0 {
            return Err(CoreError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.min_frames == 0 {
            return Err(CoreError::Config(
                "minimum frame count must be at least 1".to_string(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(CoreError::Config(
                "progress interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of attempts a probe will actually make.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }
}
