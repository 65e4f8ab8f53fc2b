// vidcheck-core/tests/common/mod.rs
//
// Scripted decode backend and file remover shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use vidcheck_core::error::{CoreError, CoreResult};
use vidcheck_core::external::{ContainerOpener, FileRemover, MediaContainer};

/// How a scripted file behaves when probed.
#[derive(Debug, Clone, Copy)]
pub enum Script {
    /// Decodes `frames` frames, then ends cleanly
    Healthy { frames: u32 },
    /// Fails to open on the first `failures` attempts, then is healthy
    Flaky { failures: u32 },
    /// Decodes `frames` frames, then errors, on every attempt
    Corrupt { frames: u32 },
    /// Never opens
    Unopenable,
}

#[derive(Debug, Default)]
pub struct Counters {
    pub opens: Mutex<HashMap<PathBuf, u32>>,
    pub closes: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl Counters {
    pub fn opens_of(&self, path: &Path) -> u32 {
        self.opens.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    pub fn total_opens(&self) -> u32 {
        self.opens.lock().unwrap().values().sum()
    }
}

/// Opener whose behaviour is scripted per path. Unscripted paths are healthy.
#[derive(Debug, Default)]
pub struct ScriptedOpener {
    scripts: HashMap<PathBuf, Script>,
    /// Time each opened container stays busy before yielding its first frame
    pub busy_for: Duration,
    pub counters: Arc<Counters>,
    pub preflight_error: Option<String>,
}

impl ScriptedOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, path: impl Into<PathBuf>, script: Script) -> Self {
        self.scripts.insert(path.into(), script);
        self
    }

    pub fn busy_for(mut self, duration: Duration) -> Self {
        self.busy_for = duration;
        self
    }

    pub fn failing_preflight(mut self, reason: &str) -> Self {
        self.preflight_error = Some(reason.to_string());
        self
    }
}

pub struct ScriptedContainer {
    remaining: u32,
    error_at_end: bool,
    busy_for: Duration,
    started: bool,
    closed: bool,
    counters: Arc<Counters>,
}

impl MediaContainer for ScriptedContainer {
    fn next_frame(&mut self) -> CoreResult<bool> {
        if !self.started {
            self.started = true;
            if !self.busy_for.is_zero() {
                std::thread::sleep(self.busy_for);
            }
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            Ok(true)
        } else if self.error_at_end {
            Err(CoreError::Decode("Invalid NAL unit size".to_string()))
        } else {
            Ok(false)
        }
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.counters.closes.fetch_add(1, Ordering::SeqCst);
        self.counters.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ContainerOpener for ScriptedOpener {
    type Container = ScriptedContainer;

    fn open(&self, path: &Path, _frame_limit: u32) -> CoreResult<ScriptedContainer> {
        let attempt = {
            let mut opens = self.counters.opens.lock().unwrap();
            let count = opens.entry(path.to_path_buf()).or_insert(0);
            *count += 1;
            *count
        };

        let script = self
            .scripts
            .get(path)
            .copied()
            .unwrap_or(Script::Healthy { frames: 30 });

        let (frames, error_at_end) = match script {
            Script::Healthy { frames } => (frames, false),
            Script::Flaky { failures } if attempt <= failures => {
                return Err(CoreError::ContainerOpen(format!(
                    "{}: Resource temporarily unavailable",
                    path.display()
                )));
            }
            Script::Flaky { .. } => (30, false),
            Script::Corrupt { frames } => (frames, true),
            Script::Unopenable => {
                return Err(CoreError::ContainerOpen(format!(
                    "{}: Invalid data found when processing input",
                    path.display()
                )));
            }
        };

        let now = self.counters.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.counters.max_in_flight.fetch_max(now, Ordering::SeqCst);

        Ok(ScriptedContainer {
            remaining: frames,
            error_at_end,
            busy_for: self.busy_for,
            started: false,
            closed: false,
            counters: Arc::clone(&self.counters),
        })
    }

    fn preflight(&self) -> CoreResult<()> {
        match &self.preflight_error {
            Some(reason) => Err(CoreError::DependencyNotFound(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Remover that refuses to delete chosen paths with a permission error.
#[derive(Debug, Default)]
pub struct GuardedRemover {
    pub protected: Vec<PathBuf>,
}

impl FileRemover for GuardedRemover {
    fn remove(&self, path: &Path) -> io::Result<()> {
        if self.protected.iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Permission denied (os error 13)",
            ));
        }
        fs::remove_file(path)
    }
}

/// Creates an empty file at `dir/relative`, including parent directories.
pub fn touch(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(&path).unwrap();
    path
}
