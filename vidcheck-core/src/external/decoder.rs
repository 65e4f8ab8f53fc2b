// ============================================================================
// vidcheck-core/src/external/decoder.rs
// ============================================================================
//
// DECODER BACKEND: Container Access and Frame Decoding
//
// This module defines the three-operation contract the prober relies on
// (open a container, pull decoded frames from its primary video stream,
// close it) and implements it on top of ffmpeg-sidecar.
//
// KEY COMPONENTS:
// - ContainerOpener: Trait for opening a media file as a container
// - MediaContainer: Trait representing an open container
// - SidecarOpener / SidecarContainer: ffmpeg-backed implementation
//
// The ffmpeg implementation decodes the first video stream to raw frames on
// stdout, limited to the requested frame count. Every `OutputFrame` event is
// one successfully decoded frame; error-level log lines and a non-zero exit
// status are decode errors.

use crate::error::{CoreError, CoreResult};
use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use ffmpeg_sidecar::iter::FfmpegIterator;
use std::path::{Path, PathBuf};

// --- Decoder Abstraction ---

/// An open media container.
pub trait MediaContainer {
    /// Decodes the next frame of the primary video stream.
    ///
    /// Returns `Ok(true)` when a frame was decoded, `Ok(false)` at the end of
    /// the stream, and an error when decoding failed.
    fn next_frame(&mut self) -> CoreResult<bool>;

    /// Releases the container. Must be safe to call more than once.
    fn close(&mut self);
}

/// Something that can open a file as a [`MediaContainer`].
///
/// Implementations are shared by every worker of the pool, so they must be
/// `Send + Sync` and keep no per-file mutable state.
pub trait ContainerOpener: Send + Sync {
    type Container: MediaContainer;

    /// Opens `path`. `frame_limit` is the most frames the caller will ask for,
    /// which lets a backend stop decoding early.
    fn open(&self, path: &Path, frame_limit: u32) -> CoreResult<Self::Container>;

    /// Verifies the backend is usable before any file is probed.
    fn preflight(&self) -> CoreResult<()> {
        Ok(())
    }
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Opens containers by spawning ffmpeg through `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarOpener {
    ffmpeg_path: Option<PathBuf>,
}

impl SidecarOpener {
    /// Uses the `ffmpeg` found on `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a specific ffmpeg binary.
    pub fn with_ffmpeg_path(path: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: Some(path.into()),
        }
    }

    /// The binary this opener runs, for dependency checks.
    pub fn ffmpeg_program(&self) -> String {
        self.ffmpeg_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ffmpeg".to_string())
    }

    fn build_command(&self, path: &Path, frame_limit: u32) -> FfmpegCommand {
        let mut cmd = match &self.ffmpeg_path {
            Some(ffmpeg) => FfmpegCommand::new_with_path(ffmpeg),
            None => FfmpegCommand::new(),
        };

        // Level prefixes let the event parser tell errors from chatter.
        cmd.args(["-loglevel", "level+info"]);
        cmd.arg("-xerror");
        // The path goes through as an OsStr so non-UTF-8 names reach ffmpeg intact.
        cmd.arg("-i");
        cmd.arg(path);
        cmd.args(["-map", "0:v:0"]);
        cmd.args(["-frames:v", &frame_limit.to_string()]);
        cmd.args(["-an", "-sn", "-dn"]);
        cmd.rawvideo();
        cmd
    }
}

impl ContainerOpener for SidecarOpener {
    type Container = SidecarContainer;

    fn open(&self, path: &Path, frame_limit: u32) -> CoreResult<SidecarContainer> {
        if !path.is_file() {
            return Err(CoreError::ContainerOpen(format!(
                "{}: No such file",
                path.display()
            )));
        }

        let mut cmd = self.build_command(path, frame_limit);
        if log::log_enabled!(log::Level::Trace) {
            let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();
            log::trace!("Running decode command: ffmpeg {}", args.join(" "));
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| CoreError::ContainerOpen(format!("failed to start ffmpeg: {e}")))?;

        let events = match child.iter() {
            Ok(events) => events,
            Err(e) => {
                child.kill().ok();
                child.wait().ok();
                return Err(CoreError::ContainerOpen(format!(
                    "failed to read ffmpeg output: {e}"
                )));
            }
        };

        Ok(SidecarContainer {
            path: path.to_path_buf(),
            child,
            events,
            finished: false,
            closed: false,
        })
    }

    fn preflight(&self) -> CoreResult<()> {
        super::check_dependency(&self.ffmpeg_program())
    }
}

/// A running ffmpeg decode of one file.
///
/// Dropping the container closes it, so the child process is reaped on every
/// exit path.
pub struct SidecarContainer {
    path: PathBuf,
    child: FfmpegChild,
    events: FfmpegIterator,
    finished: bool,
    closed: bool,
}

impl SidecarContainer {
    /// Waits for ffmpeg to exit once its event stream has ended.
    fn finish(&mut self) -> CoreResult<()> {
        self.finished = true;
        let status = self.child.wait().map_err(|e| {
            CoreError::Decode(format!("failed to wait for ffmpeg: {e}"))
        })?;
        if status.success() {
            Ok(())
        } else {
            Err(CoreError::Decode(format!(
                "ffmpeg exited with {} while decoding {}",
                status,
                self.path.display()
            )))
        }
    }
}

impl MediaContainer for SidecarContainer {
    fn next_frame(&mut self) -> CoreResult<bool> {
        if self.finished || self.closed {
            return Ok(false);
        }

        for event in self.events.by_ref() {
            match event {
                FfmpegEvent::OutputFrame(_) => return Ok(true),
                FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, message)
                | FfmpegEvent::Error(message) => {
                    self.finished = true;
                    return Err(CoreError::Decode(message.trim().to_string()));
                }
                FfmpegEvent::Done => break,
                _ => {}
            }
        }

        self.finish()?;
        Ok(false)
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        // The process may already have exited; both calls are best-effort.
        self.child.kill().ok();
        self.child.wait().ok();
    }
}

impl Drop for SidecarContainer {
    fn drop(&mut self) {
        self.close();
    }
}
