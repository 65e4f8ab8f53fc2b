//! Result aggregation for a check run.
//!
//! [`ResultSet`] is the partition of probed files into successes and
//! failures. It doubles as the on-disk artifact format, so its field names
//! are the JSON keys (`success`, `failed`, and `file`/`error` per failure).
//! [`ResultCollector`] is the shared, lock-guarded accumulator the worker
//! pool folds results into.

use crate::probe::{ProbeOutcome, ProbeResult};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Mutex;

/// A file that failed probing, with the recorded reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedFile {
    pub file: PathBuf,
    pub error: String,
}

/// Successes and failures of a run, each in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub success: Vec<PathBuf>,
    pub failed: Vec<FailedFile>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one probe result into the matching partition.
    pub fn record(&mut self, result: ProbeResult) {
        match result.outcome {
            ProbeOutcome::Success => self.success.push(result.path),
            ProbeOutcome::Failure(error) => self.failed.push(FailedFile {
                file: result.path,
                error,
            }),
        }
    }

    pub fn total(&self) -> usize {
        self.success.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Successful paths, order-independent.
    pub fn success_paths(&self) -> BTreeSet<PathBuf> {
        self.success.iter().cloned().collect()
    }

    /// Failed paths, order-independent.
    pub fn failed_paths(&self) -> BTreeSet<PathBuf> {
        self.failed.iter().map(|f| f.file.clone()).collect()
    }
}

impl FromIterator<ProbeResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ProbeResult>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for result in iter {
            set.record(result);
        }
        set
    }
}

/// Accumulates results from concurrent workers.
#[derive(Debug, Default)]
pub struct ResultCollector {
    inner: Mutex<ResultSet>,
}

impl ResultCollector {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(ResultSet {
                success: Vec::with_capacity(capacity),
                failed: Vec::new(),
            }),
        }
    }

    /// Records one result; safe to call from any worker.
    pub fn record(&self, result: ProbeResult) {
        // A panicking worker cannot leave a half-written Vec behind, so a
        // poisoned lock still holds consistent data.
        let mut set = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        set.record(result);
    }

    /// Finalizes the collection once every worker is done.
    pub fn into_result_set(self) -> ResultSet {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}
