//! Deletion of files that failed probing.
//!
//! Runs only after every probe has finished. Each failed file is removed on
//! its own; one deletion error never stops the others, it is recorded in the
//! returned [`CleanupReport`] instead.

use crate::external::FileRemover;
use crate::progress_reporting as report;
use crate::results::ResultSet;

use std::path::PathBuf;

/// What happened to one file during cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionResult {
    Deleted,
    NotDeleted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
    pub file: PathBuf,
    pub result: DeletionResult,
}

/// Outcomes of a cleanup pass, in failure order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub outcomes: Vec<DeletionOutcome>,
}

impl CleanupReport {
    pub fn deleted(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes
            .iter()
            .filter(|o| o.result == DeletionResult::Deleted)
            .map(|o| &o.file)
    }

    pub fn not_deleted(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            DeletionResult::NotDeleted(reason) => Some((&o.file, reason.as_str())),
            DeletionResult::Deleted => None,
        })
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted().count()
    }

    pub fn error_count(&self) -> usize {
        self.not_deleted().count()
    }
}

/// Deletes every file in the failures partition of `results`.
pub fn delete_failed_files<R: FileRemover + ?Sized>(results: &ResultSet, remover: &R) -> CleanupReport {
    if !results.has_failures() {
        return CleanupReport::default();
    }

    report::section("Cleanup");
    report::processing(&format!("Deleting {} failed file(s)", results.failed.len()));

    let mut outcomes = Vec::with_capacity(results.failed.len());
    for failed in &results.failed {
        let result = match remover.remove(&failed.file) {
            Ok(()) => {
                log::info!("Deleted {}", failed.file.display());
                report::sub_item(&format!("Deleted: {}", failed.file.display()));
                DeletionResult::Deleted
            }
            Err(e) => {
                log::error!("Failed to delete {}: {}", failed.file.display(), e);
                report::error(&format!("Failed to delete {}: {}", failed.file.display(), e));
                DeletionResult::NotDeleted(e.to_string())
            }
        };
        outcomes.push(DeletionOutcome {
            file: failed.file.clone(),
            result,
        });
    }

    let cleanup = CleanupReport { outcomes };
    if cleanup.error_count() == 0 {
        report::success(&format!("Deleted {} file(s)", cleanup.deleted_count()));
    } else {
        report::warning(&format!(
            "Deleted {} file(s), {} could not be deleted",
            cleanup.deleted_count(),
            cleanup.error_count()
        ));
    }
    cleanup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::StdFsRemover;
    use crate::results::FailedFile;
    use std::fs;
    use tempfile::tempdir;

    fn failed(path: PathBuf) -> FailedFile {
        FailedFile {
            file: path,
            error: "decode error".to_string(),
        }
    }

    #[test]
    fn test_no_failures_touches_nothing() {
        let report = delete_failed_files(&ResultSet::new(), &StdFsRemover);
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn test_one_failed_deletion_does_not_stop_the_rest() {
        let dir = tempdir().unwrap();
        // A directory cannot be removed with remove_file.
        let stubborn = dir.path().join("stubborn.mp4");
        fs::create_dir(&stubborn).unwrap();
        let broken = dir.path().join("broken.mkv");
        fs::write(&broken, b"junk").unwrap();

        let results = ResultSet {
            success: Vec::new(),
            failed: vec![failed(stubborn.clone()), failed(broken.clone())],
        };
        let report = delete_failed_files(&results, &StdFsRemover);

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.deleted().collect::<Vec<_>>(), vec![&broken]);
        assert_eq!(report.error_count(), 1);
        assert!(stubborn.exists());
        assert!(!broken.exists());
    }
}
