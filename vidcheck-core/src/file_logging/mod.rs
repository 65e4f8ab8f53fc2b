//! File logging for check runs.
//!
//! When results are saved, the run's log records are also written to
//! `vidcheck_<command>_<timestamp>.log` in the log directory.

pub mod setup;

pub use setup::{log_file_path, setup_file_logging};
