//! Simplified Progress Reporting API
//!
//! This module provides a minimal API for the core library to report progress
//! and output messages without direct dependencies on CLI-specific formatting.
//! The CLI installs a [`ProgressReporter`] once at startup; without one, the
//! helpers below are no-ops.
//!
//! It also hosts [`ProgressTracker`], the completion counter shared by every
//! worker of the pool.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Represents different levels of output for structured reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLevel {
    /// Major workflow phases (===== SECTION =====)
    Section,
    /// Processing steps (» Processing)
    Processing,
    /// Success messages (✓ Success)
    Success,
    /// Error messages
    Error,
    /// Warning messages
    Warning,
    /// Indented detail lines under a processing step
    SubItem,
    /// General information
    Info,
}

/// A simplified trait for progress reporting
pub trait ProgressReporter: Send + Sync {
    /// Output a message at a specific level
    fn output(&self, level: OutputLevel, text: &str);

    /// Output a key-value status pair
    fn output_status(&self, label: &str, value: &str, highlight: bool);

    /// Report that `done` of `total` items have completed
    fn progress(&self, done: usize, total: usize, elapsed: Duration);
}

/// Global progress reporter instance
static PROGRESS_REPORTER: std::sync::LazyLock<Mutex<Option<Box<dyn ProgressReporter>>>> =
    std::sync::LazyLock::new(|| Mutex::new(None));

/// Set the global progress reporter
pub fn set_progress_reporter(reporter: Box<dyn ProgressReporter>) {
    if let Ok(mut r) = PROGRESS_REPORTER.lock() {
        *r = Some(reporter);
    }
}

/// Execute a function with the progress reporter if available.
///
/// The reporter lock is held for the duration of `f`, which serializes
/// console output from concurrent workers.
#[inline]
pub fn with_reporter<F>(f: F)
where
    F: FnOnce(&dyn ProgressReporter),
{
    if let Ok(guard) = PROGRESS_REPORTER.lock() {
        if let Some(reporter) = guard.as_ref() {
            f(reporter.as_ref());
        }
    }
}

/// Output a section header
pub fn section(title: &str) {
    with_reporter(|r| r.output(OutputLevel::Section, title));
}

/// Output a processing step
pub fn processing(message: &str) {
    with_reporter(|r| r.output(OutputLevel::Processing, message));
}

/// Output a status line
pub fn status(label: &str, value: &str, highlight: bool) {
    with_reporter(|r| r.output_status(label, value, highlight));
}

/// Output a success message
pub fn success(message: &str) {
    with_reporter(|r| r.output(OutputLevel::Success, message));
}

/// Output an error message
pub fn error(message: &str) {
    with_reporter(|r| r.output(OutputLevel::Error, message));
}

/// Output a warning message
pub fn warning(message: &str) {
    with_reporter(|r| r.output(OutputLevel::Warning, message));
}

/// Output an indented detail line
pub fn sub_item(message: &str) {
    with_reporter(|r| r.output(OutputLevel::SubItem, message));
}

/// Output general information
pub fn info(message: &str) {
    with_reporter(|r| r.output(OutputLevel::Info, message));
}

/// Report progress
pub fn progress(done: usize, total: usize, elapsed: Duration) {
    with_reporter(|r| r.progress(done, total, elapsed));
}

/// Formats a progress line, e.g. `Progress: 10/40 (25.00%) elapsed: 3.52s`.
#[must_use]
pub fn format_progress_line(done: usize, total: usize, elapsed: Duration) -> String {
    let percent = if total == 0 {
        100.0
    } else {
        done as f64 / total as f64 * 100.0
    };
    format!(
        "Progress: {}/{} ({:.2}%) elapsed: {:.2}s",
        done,
        total,
        percent,
        elapsed.as_secs_f64()
    )
}

// ============================================================================
// COMPLETION COUNTER
// ============================================================================

/// Counts completed work items across threads and reports at fixed intervals.
#[derive(Debug)]
pub struct ProgressTracker {
    completed: AtomicUsize,
    total: usize,
    interval: usize,
    started: Instant,
}

impl ProgressTracker {
    /// Starts the clock; `interval` of 0 is treated as 1.
    pub fn new(total: usize, interval: usize) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total,
            interval: interval.max(1),
            started: Instant::now(),
        }
    }

    /// Whether a progress line is due after `done` completions.
    #[must_use]
    pub fn is_report_point(&self, done: usize) -> bool {
        done % self.interval == 0 || done == self.total
    }

    /// Records one completion, reporting progress when a line is due.
    /// Returns the updated completion count.
    pub fn complete(&self) -> usize {
        let done = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        if self.is_report_point(done) {
            progress(done, self.total, self.started.elapsed());
        }
        done
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
