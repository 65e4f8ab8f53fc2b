// ============================================================================
// vidcheck-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the Decoder and the File System
//
// This module encapsulates interactions with the ffmpeg binary and with
// destructive file system operations. It provides traits at those seams and
// concrete implementations, so the prober and the cleanup step can be tested
// without a real decoder or real deletions.
//
// KEY COMPONENTS:
// - ContainerOpener / MediaContainer: the "open, iterate frames, close"
//   contract the prober depends on
// - SidecarOpener: implementation driving ffmpeg through ffmpeg-sidecar
// - FileRemover / StdFsRemover: deletion abstraction used by cleanup
// - Dependency checking for the ffmpeg binary

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Decode backend traits and the ffmpeg-sidecar implementation
pub mod decoder;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use decoder::{ContainerOpener, MediaContainer, SidecarContainer, SidecarOpener};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs the command with `-version` and only looks at whether it could be
/// started. Used to refuse a run up front when ffmpeg is missing, since every
/// probe would otherwise fail and, with deletion enabled, remove every file.
///
/// # Returns
///
/// * `Ok(())` - If the command started
/// * `Err(CoreError::DependencyNotFound)` - If the command is not found
/// * `Err(CoreError::CommandStart)` - If the command exists but fails to start
pub fn check_dependency(cmd: &str) -> CoreResult<()> {
    let result = Command::new(cmd)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd);
            Err(CoreError::DependencyNotFound(cmd.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd, e);
            Err(crate::error::command_start_error(cmd, e))
        }
    }
}

// ============================================================================
// FILE REMOVAL
// ============================================================================

/// Trait for abstracting file deletion.
///
/// The cleanup step deletes files through this trait so that tests can
/// inject failures such as permission errors for chosen paths.
///
/// # Examples
///
/// ```rust
/// use vidcheck_core::external::FileRemover;
/// use std::io;
/// use std::path::Path;
///
/// struct ReadOnlyRemover;
///
/// impl FileRemover for ReadOnlyRemover {
///     fn remove(&self, _path: &Path) -> io::Result<()> {
///         Err(io::Error::from(io::ErrorKind::PermissionDenied))
///     }
/// }
///
/// assert!(ReadOnlyRemover.remove(Path::new("/tmp/x.mp4")).is_err());
/// ```
pub trait FileRemover {
    /// Deletes the file at `path`.
    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Standard implementation of FileRemover using `std::fs::remove_file`.
#[derive(Debug, Clone, Default)]
pub struct StdFsRemover;

impl FileRemover for StdFsRemover {
    fn remove(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}
