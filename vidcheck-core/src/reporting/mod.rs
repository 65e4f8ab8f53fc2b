//! Run summaries and result persistence.
//!
//! The summary goes through the progress-reporting facade so the CLI decides
//! how it looks. Persisted artifacts are pretty-printed JSON files named
//! `<prefix>_<YYYYmmdd_HHMMSS>.json`, with the timestamp taken at save time.

use crate::error::{CoreError, CoreResult};
use crate::progress_reporting as report;
use crate::results::ResultSet;
use crate::utils::timestamped_path;

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name prefix of the video check artifact.
pub const VIDEO_RESULTS_PREFIX: &str = "video_check_results";

/// File name prefix of the manifest check artifact.
pub const MANIFEST_RESULTS_PREFIX: &str = "path_check_results";

/// Prints totals and, when anything failed, every failure with its reason.
pub fn print_summary(results: &ResultSet) {
    report::section("Check Summary");
    report::status("Total files", &results.total().to_string(), false);
    report::status("Readable", &results.success.len().to_string(), false);
    report::status("Failed", &results.failed.len().to_string(), results.has_failures());

    log::info!(
        "Summary: {} total, {} readable, {} failed",
        results.total(),
        results.success.len(),
        results.failed.len()
    );

    if results.has_failures() {
        report::error("Files that could not be decoded:");
        for failed in &results.failed {
            report::sub_item(&format!("{}: {}", failed.file.display(), failed.error));
            log::info!("Failed: {} ({})", failed.file.display(), failed.error);
        }
    } else if results.total() > 0 {
        report::success("All files decoded successfully");
    }
}

/// Serializes `value` to `dir/<prefix>_<timestamp>.json` and returns the path.
///
/// `dir` is created if needed. Any failure, including a path that cannot be
/// represented in JSON, is reported as [`CoreError::Persistence`].
pub fn write_json_artifact<T: Serialize>(value: &T, dir: &Path, prefix: &str) -> CoreResult<PathBuf> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CoreError::Persistence(format!("failed to serialize results: {e}")))?;

    fs::create_dir_all(dir).map_err(|e| {
        CoreError::Persistence(format!("failed to create {}: {e}", dir.display()))
    })?;

    let path = timestamped_path(dir, prefix, "json");
    fs::write(&path, json)
        .map_err(|e| CoreError::Persistence(format!("failed to write {}: {e}", path.display())))?;

    log::debug!("Wrote {}", path.display());
    Ok(path)
}

/// Persists a video check result set into `dir`.
pub fn save_results(results: &ResultSet, dir: &Path) -> CoreResult<PathBuf> {
    write_json_artifact(results, dir, VIDEO_RESULTS_PREFIX)
}

/// Reads back an artifact written by [`save_results`].
pub fn load_results(path: &Path) -> CoreResult<ResultSet> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
