//! Decode probing of a single file.
//!
//! A probe opens a file through a [`ContainerOpener`], pulls up to
//! `min_frames` frames from its primary video stream and reports whether any
//! error was observed. Failed attempts are retried with a fixed delay until
//! the attempt budget is spent. The probe always ends in a [`ProbeResult`];
//! exhausting the retries is an outcome, not an error.

use crate::config::CheckConfig;
use crate::error::CoreResult;
use crate::external::{ContainerOpener, MediaContainer};

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Verdict of a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success,
    /// Carries the last attempt's error, annotated with the attempt count.
    Failure(String),
}

/// Terminal result of probing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub path: PathBuf,
    pub outcome: ProbeOutcome,
    /// Attempts performed before the outcome was reached
    pub attempts: u32,
}

impl ProbeResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Success)
    }
}

/// How often and how patiently a file is re-probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, always at least 1
    pub max_attempts: u32,
    /// Sleep between two attempts (not after the last one)
    pub delay: Duration,
}

impl RetryPolicy {
    /// Builds a policy; `max_retries == 0` still allows one attempt.
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_retries.max(1),
            delay,
        }
    }

    pub fn from_config(config: &CheckConfig) -> Self {
        Self::new(config.max_retries, config.retry_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_MAX_RETRIES,
            crate::config::DEFAULT_RETRY_DELAY,
        )
    }
}

/// Closes the wrapped container when dropped.
struct ClosingGuard<C: MediaContainer>(C);

impl<C: MediaContainer> Deref for ClosingGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.0
    }
}

impl<C: MediaContainer> DerefMut for ClosingGuard<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.0
    }
}

impl<C: MediaContainer> Drop for ClosingGuard<C> {
    fn drop(&mut self) {
        self.0.close();
    }
}

/// Runs a single decode attempt and returns the number of frames decoded.
///
/// Stops after `min_frames` frames or at the end of the stream, whichever
/// comes first. A stream that ends early without error is still a success.
pub fn decode_attempt<O: ContainerOpener>(
    opener: &O,
    path: &Path,
    min_frames: u32,
) -> CoreResult<u32> {
    let mut container = ClosingGuard(opener.open(path, min_frames)?);

    let mut decoded = 0;
    while decoded < min_frames {
        if !container.next_frame()? {
            break;
        }
        decoded += 1;
    }

    Ok(decoded)
}

/// Probes `path` until an attempt succeeds or the policy's budget is spent.
pub fn probe_file<O: ContainerOpener>(
    opener: &O,
    path: &Path,
    min_frames: u32,
    policy: &RetryPolicy,
) -> ProbeResult {
    let mut last_error = String::new();

    for attempt in 1..=policy.max_attempts {
        match decode_attempt(opener, path, min_frames) {
            Ok(frames) => {
                log::debug!(
                    "Decoded {} frame(s) from {} on attempt {}",
                    frames,
                    path.display(),
                    attempt
                );
                return ProbeResult {
                    path: path.to_path_buf(),
                    outcome: ProbeOutcome::Success,
                    attempts: attempt,
                };
            }
            Err(e) => {
                log::warn!(
                    "Attempt {}/{} failed for {}: {}",
                    attempt,
                    policy.max_attempts,
                    path.display(),
                    e
                );
                last_error = e.to_string();
            }
        }

        if attempt < policy.max_attempts && !policy.delay.is_zero() {
            thread::sleep(policy.delay);
        }
    }

    ProbeResult {
        path: path.to_path_buf(),
        outcome: ProbeOutcome::Failure(format!(
            "{} (failed after {} attempts)",
            last_error, policy.max_attempts
        )),
        attempts: policy.max_attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Container yielding `frames` frames, then optionally an error.
    struct FakeContainer {
        frames: u32,
        fail_after: bool,
        closes: Arc<AtomicUsize>,
    }

    impl MediaContainer for FakeContainer {
        fn next_frame(&mut self) -> CoreResult<bool> {
            if self.frames > 0 {
                self.frames -= 1;
                Ok(true)
            } else if self.fail_after {
                Err(CoreError::Decode("corrupt packet".to_string()))
            } else {
                Ok(false)
            }
        }

        fn close(&mut self) {
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FakeOpener {
        frames: u32,
        fail_after: bool,
        closes: Arc<AtomicUsize>,
    }

    impl ContainerOpener for FakeOpener {
        type Container = FakeContainer;

        fn open(&self, _path: &Path, _frame_limit: u32) -> CoreResult<FakeContainer> {
            Ok(FakeContainer {
                frames: self.frames,
                fail_after: self.fail_after,
                closes: Arc::clone(&self.closes),
            })
        }
    }

    fn opener(frames: u32, fail_after: bool) -> FakeOpener {
        FakeOpener {
            frames,
            fail_after,
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[test]
    fn test_decode_stops_at_min_frames() {
        let opener = opener(100, true);
        let decoded = decode_attempt(&opener, Path::new("long.mp4"), 10).unwrap();
        assert_eq!(decoded, 10);
        assert_eq!(opener.closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_short_clip_is_success() {
        let opener = opener(3, false);
        let decoded = decode_attempt(&opener, Path::new("short.mp4"), 10).unwrap();
        assert_eq!(decoded, 3);
    }

    #[test]
    fn test_error_before_min_frames_fails_and_closes() {
        let opener = opener(2, true);
        let result = decode_attempt(&opener, Path::new("broken.mp4"), 10);
        assert!(matches!(result, Err(CoreError::Decode(_))));
        assert_eq!(opener.closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_exhausted_retries_mention_attempt_count() {
        let opener = opener(0, true);
        let policy = RetryPolicy::new(3, Duration::ZERO);
        let result = probe_file(&opener, Path::new("broken.mp4"), 10, &policy);

        assert_eq!(result.attempts, 3);
        match result.outcome {
            ProbeOutcome::Failure(reason) => {
                assert!(reason.contains("corrupt packet"));
                assert!(reason.contains("3 attempts"));
            }
            ProbeOutcome::Success => panic!("expected failure"),
        }
        assert_eq!(opener.closes.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_zero_retries_means_one_attempt() {
        let policy = RetryPolicy::new(0, Duration::from_millis(100));
        assert_eq!(policy.max_attempts, 1);
    }
}
