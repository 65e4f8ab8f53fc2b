// ============================================================================
// vidcheck-core/src/manifest.rs
// ============================================================================
//
// MANIFEST CHECKER: Existence Check of Dataset Manifest Records
//
// A manifest is a headerless CSV file. The first comma-separated field of
// every non-empty line is a path relative to the dataset root; the remaining
// fields (labels, captions) are opaque and never parsed.
//
// KEY COMPONENTS:
// - check_manifest: sequential existence check with progress lines, summary,
//   optional JSON artifact and optional in-place rewrite
// - rewrite_manifest: keeps the lines of existing records byte-for-byte and
//   swaps the new file in through a temporary file in the same directory
//
// The checker is single-threaded; it never touches media content.

use crate::config::MANIFEST_PROGRESS_INTERVAL;
use crate::error::{CoreError, CoreResult};
use crate::progress_reporting::{self as report, ProgressTracker};
use crate::reporting::{MANIFEST_RESULTS_PREFIX, write_json_artifact};

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Existing and missing manifest paths, in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestReport {
    pub existing: Vec<String>,
    pub missing: Vec<String>,
}

impl ManifestReport {
    pub fn total(&self) -> usize {
        self.existing.len() + self.missing.len()
    }
}

/// Behaviour switches for [`check_manifest`].
#[derive(Debug, Clone)]
pub struct ManifestOptions {
    /// Rewrite the manifest without its missing records
    pub remove_missing: bool,
    /// Write `path_check_results_<timestamp>.json`
    pub save_log: bool,
    /// Directory receiving the JSON artifact
    pub log_dir: PathBuf,
    /// Records between two progress lines
    pub progress_interval: usize,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            remove_missing: false,
            save_log: false,
            log_dir: PathBuf::from("."),
            progress_interval: MANIFEST_PROGRESS_INTERVAL,
        }
    }
}

/// One manifest line together with the path it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord<'a> {
    /// The raw line, including its terminator
    pub line: &'a str,
    pub path: Cow<'a, str>,
}

/// Returns the first comma-separated field of `line`, without the line ending.
///
/// A first field wrapped in double quotes may contain commas, and `""` inside
/// it stands for one quote. Records are single lines: a quoted field cannot
/// span a line break.
#[must_use]
pub fn first_field(line: &str) -> Cow<'_, str> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(quoted) = line.strip_prefix('"') else {
        return Cow::Borrowed(line.split(',').next().unwrap_or(line));
    };

    let mut field = String::with_capacity(quoted.len());
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '"' {
            field.push(c);
        } else if chars.peek() == Some(&'"') {
            chars.next();
            field.push('"');
        } else {
            break;
        }
    }
    Cow::Owned(field)
}

/// Splits manifest text into records, skipping blank lines.
pub fn parse_records(content: &str) -> Vec<ManifestRecord<'_>> {
    content
        .split_inclusive('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| ManifestRecord {
            line,
            path: first_field(line),
        })
        .collect()
}

/// Checks every record of `manifest_path` against `dataset_root`.
///
/// # Returns
///
/// * `Ok(ManifestReport)` - Existing and missing paths
/// * `Err(CoreError::Manifest)` - If the manifest cannot be read or rewritten
pub fn check_manifest(
    dataset_root: &Path,
    manifest_path: &Path,
    options: &ManifestOptions,
) -> CoreResult<ManifestReport> {
    report::section("Manifest Check");
    report::status("Manifest", &manifest_path.display().to_string(), false);
    report::status("Dataset root", &dataset_root.display().to_string(), false);

    let content = fs::read_to_string(manifest_path).map_err(|e| {
        CoreError::Manifest(format!("failed to read {}: {e}", manifest_path.display()))
    })?;
    let records = parse_records(&content);
    report::info(&format!("Read {} record(s)", records.len()));
    log::info!(
        "Checking {} manifest record(s) from {}",
        records.len(),
        manifest_path.display()
    );

    let tracker = ProgressTracker::new(records.len(), options.progress_interval);
    let mut result = ManifestReport::default();
    let mut keep = Vec::with_capacity(records.len());

    for record in &records {
        let exists = dataset_root.join(record.path.as_ref()).exists();
        if exists {
            result.existing.push(record.path.to_string());
        } else {
            log::debug!("Missing: {}", record.path);
            result.missing.push(record.path.to_string());
        }
        keep.push(exists);
        tracker.complete();
    }

    print_manifest_summary(&result);

    if options.save_log {
        match write_json_artifact(&result, &options.log_dir, MANIFEST_RESULTS_PREFIX) {
            Ok(path) => report::success(&format!("Results saved to {}", path.display())),
            Err(e) => {
                log::error!("{}", e);
                report::error(&e.to_string());
            }
        }
    }

    if options.remove_missing && !result.missing.is_empty() {
        report::processing("Removing missing records from the manifest");
        let kept = records
            .iter()
            .zip(&keep)
            .filter(|(_, exists)| **exists)
            .map(|(record, _)| record.line);
        rewrite_manifest(manifest_path, kept)?;
        report::success(&format!("Updated {}", manifest_path.display()));
    }

    Ok(result)
}

fn print_manifest_summary(result: &ManifestReport) {
    report::section("Manifest Summary");
    report::status("Existing", &result.existing.len().to_string(), false);
    report::status("Missing", &result.missing.len().to_string(), !result.missing.is_empty());
    log::info!(
        "Manifest summary: {} existing, {} missing",
        result.existing.len(),
        result.missing.len()
    );

    if !result.missing.is_empty() {
        report::warning("Missing files:");
        for path in &result.missing {
            report::sub_item(path);
        }
    }
}

/// Replaces the manifest with `lines`, written verbatim.
///
/// The new content goes to a temporary file next to the manifest which is
/// then renamed over it, so readers never see a half-written manifest.
pub fn rewrite_manifest<'a>(
    manifest_path: &Path,
    lines: impl IntoIterator<Item = &'a str>,
) -> CoreResult<()> {
    let dir = match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let rewrite_err = |e: std::io::Error| {
        CoreError::Manifest(format!("failed to rewrite {}: {e}", manifest_path.display()))
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(rewrite_err)?;
    for line in lines {
        temp.write_all(line.as_bytes()).map_err(rewrite_err)?;
    }
    temp.flush().map_err(rewrite_err)?;
    temp.persist(manifest_path).map_err(|e| rewrite_err(e.error))?;

    log::info!("Rewrote {}", manifest_path.display());
    Ok(())
}
