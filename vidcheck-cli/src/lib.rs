// vidcheck-cli/src/lib.rs
//
// Library portion of the vidcheck CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ManifestArgs, VideosArgs};
pub use commands::manifest::run_manifest;
pub use commands::videos::run_videos;
