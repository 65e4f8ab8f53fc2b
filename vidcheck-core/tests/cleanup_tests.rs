// vidcheck-core/tests/cleanup_tests.rs

mod common;

use common::{GuardedRemover, touch};
use std::path::PathBuf;
use tempfile::tempdir;
use vidcheck_core::cleanup::{DeletionResult, delete_failed_files};
use vidcheck_core::results::{FailedFile, ResultSet};

fn failure(file: PathBuf) -> FailedFile {
    FailedFile {
        file,
        error: "Decode error: Invalid NAL unit size (failed after 3 attempts)".to_string(),
    }
}

#[test]
fn test_permission_error_does_not_abort_cleanup() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let x = touch(dir.path(), "x.mp4");
    let y = touch(dir.path(), "y.mp4");
    let keep = touch(dir.path(), "fine.mp4");

    let results = ResultSet {
        success: vec![keep.clone()],
        failed: vec![failure(x.clone()), failure(y.clone())],
    };
    let remover = GuardedRemover {
        protected: vec![y.clone()],
    };

    let report = delete_failed_files(&results, &remover);

    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.outcomes[0].file, x);
    assert_eq!(report.outcomes[0].result, DeletionResult::Deleted);
    assert_eq!(report.outcomes[1].file, y);
    match &report.outcomes[1].result {
        DeletionResult::NotDeleted(reason) => assert!(reason.contains("Permission denied")),
        DeletionResult::Deleted => panic!("protected file reported as deleted"),
    }

    assert!(!x.exists());
    assert!(y.exists());
    assert!(keep.exists());
    Ok(())
}

#[test]
fn test_already_missing_file_is_reported_not_deleted() {
    let dir = tempdir().unwrap();
    let gone = dir.path().join("gone.mkv");

    let results = ResultSet {
        success: Vec::new(),
        failed: vec![failure(gone.clone())],
    };
    let report = delete_failed_files(&results, &GuardedRemover::default());

    assert_eq!(report.deleted_count(), 0);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.not_deleted().next().map(|(p, _)| p), Some(&gone));
}
