// ============================================================================
// vidcheck-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types and Helpers for vidcheck-core
//
// This module defines the single error enum used throughout the core library
// together with the `CoreResult` alias and a constructor helper
// for external commands that cannot be started.
//
// Only enumeration, configuration and dependency errors end a `videos` run.
// Per-file conditions (a failed decode attempt, a failed deletion) are turned
// into data by the prober and the cleanup step and never escape as errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all fallible vidcheck-core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---- Enumeration ----
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Directory walk failed: {0}")]
    Walkdir(#[from] walkdir::Error),

    // ---- Decode attempts ----
    #[error("Failed to open container: {0}")]
    ContainerOpen(String),

    #[error("Decode error: {0}")]
    Decode(String),

    // ---- External tools ----
    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, String),

    // ---- Reporting ----
    #[error("Failed to persist results: {0}")]
    Persistence(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    // ---- General ----
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for vidcheck-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds a `CommandStart` error for a process that could not be spawned.
pub fn command_start_error(cmd_name: impl Into<String>, err: impl std::fmt::Display) -> CoreError {
    CoreError::CommandStart(cmd_name.into(), err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_path() {
        let err = CoreError::DirectoryNotFound(PathBuf::from("/data/videos"));
        assert_eq!(err.to_string(), "Directory not found: /data/videos");
    }
}
