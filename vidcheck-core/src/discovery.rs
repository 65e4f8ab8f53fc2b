//! File discovery module for finding video files to check.
//!
//! This module walks the root directory recursively and collects every file
//! whose extension (case-insensitive) is one of the recognized video
//! container extensions. The result is sorted so that a fixed filesystem
//! state always produces the same dispatch order.

use crate::config::VIDEO_EXTENSIONS;
use crate::error::{CoreError, CoreResult};

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Returns true if `path` carries a recognized video container extension.
#[must_use]
pub fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Maps an I/O error on the root directory to the matching enumeration error.
fn root_error(root: &Path, err: &io::Error) -> CoreError {
    match err.kind() {
        io::ErrorKind::NotFound => CoreError::DirectoryNotFound(root.to_path_buf()),
        io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(root.to_path_buf()),
        _ => CoreError::PathError(format!("Cannot read directory {}: {}", root.display(), err)),
    }
}

/// Finds every video file under `root_dir`, descending into subdirectories.
///
/// # Arguments
///
/// * `root_dir` - The directory tree to search
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Sorted paths of the discovered video files (may be empty)
/// * `Err(CoreError::DirectoryNotFound)` - If `root_dir` does not exist
/// * `Err(CoreError::PermissionDenied)` - If `root_dir` cannot be read
/// * `Err(CoreError::NotADirectory)` - If `root_dir` is a file
///
/// Entries below the root that cannot be read are logged and skipped.
/// Symbolic links are listed but not traversed; a dangling link with a video
/// extension is returned so its probe records the failure.
///
/// # Examples
///
/// ```rust,no_run
/// use vidcheck_core::find_video_files;
/// use std::path::Path;
///
/// let files = find_video_files(Path::new("/data/videos")).unwrap();
/// println!("Found {} video files", files.len());
/// ```
pub fn find_video_files(root_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root_dir).map_err(|e| root_error(root_dir, &e))?;
    if !metadata.is_dir() {
        return Err(CoreError::NotADirectory(root_dir.to_path_buf()));
    }

    // Opening the root up front turns an unreadable root into a fatal error
    // instead of a silently empty walk.
    std::fs::read_dir(root_dir).map_err(|e| root_error(root_dir, &e))?;

    let mut files = Vec::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(root_dir).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(CoreError::Walkdir(e)),
            Err(e) => {
                log::warn!("Skipping unreadable entry during discovery: {}", e);
                skipped += 1;
                continue;
            }
        };

        // Links are not followed during the walk, but a link to a file or a
        // dangling link is still an entry of the dataset and gets probed.
        let candidate = entry.file_type().is_file()
            || (entry.path_is_symlink() && !entry.path().is_dir());
        if candidate && has_video_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();

    log::debug!(
        "Discovered {} video file(s) under {} ({} unreadable entries skipped)",
        files.len(),
        root_dir.display(),
        skipped
    );

    Ok(files)
}
