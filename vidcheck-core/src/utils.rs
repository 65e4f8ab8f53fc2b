//! Utility functions for formatting and file naming.
//!
//! This module provides general-purpose helpers used throughout the
//! vidcheck-core library: timestamps for artifact names and elapsed-time
//! formatting.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// Used to build unique names for result artifacts and log files.
#[must_use]
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Joins `dir` with `<prefix>_<timestamp>.<extension>`.
#[must_use]
pub fn timestamped_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}_{}.{}", prefix, get_timestamp(), extension))
}

/// Formats an elapsed duration with two decimals, e.g. "12.34s".
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}
