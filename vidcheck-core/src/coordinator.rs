// ============================================================================
// vidcheck-core/src/coordinator.rs
// ============================================================================
//
// CONCURRENCY COORDINATOR: Bounded Worker Pool for Decode Probes
//
// This module fans the discovered files out to a fixed-size pool of probe
// workers and folds their results back into a single ResultSet.
//
// KEY COMPONENTS:
// - A dedicated rayon thread pool sized to the configured worker count
// - A shared cursor over the file list: each worker claims the next index,
//   so files are dispatched in discovery order and at most `workers` probes
//   run at any instant
// - ResultCollector (mutex) and ProgressTracker (atomic counter) as the only
//   state shared between workers
//
// Results land in completion order. Every claimed file yields exactly one
// ProbeResult because the prober never returns without an outcome.

use crate::config::CheckConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::ContainerOpener;
use crate::probe::{RetryPolicy, probe_file};
use crate::progress_reporting::ProgressTracker;
use crate::results::{ResultCollector, ResultSet};

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Probes every file in `files` with at most `config.workers` probes in flight.
///
/// # Arguments
///
/// * `opener` - Decode backend shared by all workers
/// * `files` - Files to probe, dispatched in this order
/// * `config` - Worker count, frame threshold, retry policy, progress cadence
///
/// # Returns
///
/// * `Ok(ResultSet)` - One entry per input file
/// * `Err(CoreError::Config)` - If the configuration is invalid
/// * `Err(CoreError::OperationFailed)` - If the thread pool cannot be created
pub fn check_files<O: ContainerOpener>(
    opener: &O,
    files: &[PathBuf],
    config: &CheckConfig,
) -> CoreResult<ResultSet> {
    config.validate()?;

    if files.is_empty() {
        return Ok(ResultSet::new());
    }

    let workers = config.workers.min(files.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("vidcheck-probe-{i}"))
        .build()
        .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize thread pool: {e}")))?;

    log::info!(
        "Probing {} file(s) with {} worker(s), {} frame(s) per attempt, up to {} attempt(s)",
        files.len(),
        workers,
        config.min_frames,
        config.attempts()
    );

    let policy = RetryPolicy::from_config(config);
    let collector = ResultCollector::with_capacity(files.len());
    let tracker = ProgressTracker::new(files.len(), config.progress_interval);
    let next = AtomicUsize::new(0);

    pool.scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|_| {
                loop {
                    let index = next.fetch_add(1, Ordering::SeqCst);
                    let Some(path) = files.get(index) else {
                        break;
                    };

                    let result = probe_file(opener, path, config.min_frames, &policy);
                    if !result.is_success() {
                        log::debug!("Probe failed: {}", path.display());
                    }
                    collector.record(result);
                    tracker.complete();
                }
            });
        }
    });

    let results = collector.into_result_set();
    log::info!(
        "Probed {} file(s) in {:.2}s: {} readable, {} failed",
        results.total(),
        tracker.elapsed().as_secs_f64(),
        results.success.len(),
        results.failed.len()
    );

    Ok(results)
}
