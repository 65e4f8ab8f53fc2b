// ============================================================================
// vidcheck-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CheckConfig
//
// This module implements the builder pattern for the CheckConfig structure,
// providing a fluent API for creating and configuring CheckConfig instances.
// `build` validates the result, so a builder can never hand out a config
// with a zero-sized worker pool.

// ---- Standard library imports ----
use std::path::PathBuf;
use std::time::Duration;

// ---- Internal crate imports ----
use super::CheckConfig;
use crate::error::{CoreError, CoreResult};

/// Builder for creating CheckConfig instances.
///
/// # Examples
///
/// ```rust
/// use vidcheck_core::config::CheckConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CheckConfigBuilder::new()
///     .root_dir(PathBuf::from("/path/to/videos"))
///     .workers(4)
///     .max_retries(2)
///     .save_results(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.workers, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CheckConfigBuilder {
    // Required fields
    root_dir: Option<PathBuf>,

    // Optional fields, defaults taken from CheckConfig::default()
    workers: Option<usize>,
    min_frames: Option<u32>,
    max_retries: Option<u32>,
    retry_delay: Option<Duration>,
    progress_interval: Option<usize>,
    delete_failures: bool,
    save_results: bool,
    log_dir: Option<PathBuf>,
}

impl CheckConfigBuilder {
    /// Creates a new builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to scan.
    pub fn root_dir(mut self, root_dir: PathBuf) -> Self {
        self.root_dir = Some(root_dir);
        self
    }

    /// Sets the worker pool size.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the number of frames decoded per attempt.
    pub fn min_frames(mut self, min_frames: u32) -> Self {
        self.min_frames = Some(min_frames);
        self
    }

    /// Sets the number of decode attempts per file.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the pause between attempts.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Sets how many completions pass between progress lines.
    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    /// Enables deletion of files that fail probing.
    pub fn delete_failures(mut self, enable: bool) -> Self {
        self.delete_failures = enable;
        self
    }

    /// Enables writing the JSON result artifact.
    pub fn save_results(mut self, enable: bool) -> Self {
        self.save_results = enable;
        self
    }

    /// Sets the directory for the JSON artifact and log files.
    pub fn log_dir(mut self, log_dir: PathBuf) -> Self {
        self.log_dir = Some(log_dir);
        self
    }

    /// Builds and validates a CheckConfig.
    ///
    /// # Errors
    ///
    /// * `CoreError::Config` if `root_dir` was never set or a value is out of range
    pub fn build(self) -> CoreResult<CheckConfig> {
        let root_dir = self
            .root_dir
            .ok_or_else(|| CoreError::Config("root_dir is required".to_string()))?;

        let defaults = CheckConfig::default();
        let config = CheckConfig {
            root_dir,
            workers: self.workers.unwrap_or(defaults.workers),
            min_frames: self.min_frames.unwrap_or(defaults.min_frames),
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            retry_delay: self.retry_delay.unwrap_or(defaults.retry_delay),
            progress_interval: self
                .progress_interval
                .unwrap_or(defaults.progress_interval),
            delete_failures: self.delete_failures,
            save_results: self.save_results,
            log_dir: self.log_dir.unwrap_or(defaults.log_dir),
        };

        config.validate()?;
        Ok(config)
    }
}
