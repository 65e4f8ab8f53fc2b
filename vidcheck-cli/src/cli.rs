// vidcheck-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use vidcheck_core::config::{DEFAULT_MAX_RETRIES, DEFAULT_MIN_FRAMES, DEFAULT_WORKERS};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidcheck: Media dataset integrity checker",
    long_about = "Verifies that video files can be decoded and that dataset manifests only reference existing files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Checks that every video under a directory can be decoded
    Videos(VideosArgs),
    /// Checks that every path listed in a manifest CSV exists
    Manifest(ManifestArgs),
}

/// Options shared by both subcommands.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Save the results as JSON and write a run log
    #[arg(long)]
    pub savelog: bool,

    /// Directory for the JSON results and the run log
    #[arg(long, value_name = "LOG_DIR", default_value = ".")]
    pub log_dir: PathBuf,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output (also honoured: NO_COLOR)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug)]
pub struct VideosArgs {
    /// Directory to scan recursively for .avi, .mp4, .mov and .mkv files
    #[arg(required = true, value_name = "DIR")]
    pub root_dir: PathBuf,

    /// Number of files probed concurrently
    #[arg(
        short,
        long,
        value_name = "COUNT",
        env = "VIDCHECK_WORKERS",
        default_value_t = DEFAULT_WORKERS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub workers: usize,

    /// Frames decoded per attempt before a file counts as readable
    #[arg(
        long,
        value_name = "FRAMES",
        env = "VIDCHECK_MIN_FRAMES",
        default_value_t = DEFAULT_MIN_FRAMES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub min_frames: u32,

    /// Decode attempts per file (0 behaves like 1)
    #[arg(long, value_name = "COUNT", env = "VIDCHECK_RETRIES", default_value_t = DEFAULT_MAX_RETRIES)]
    pub retries: u32,

    /// Pause between attempts, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 100)]
    pub retry_delay_ms: u64,

    /// Delete files that cannot be decoded
    #[arg(long)]
    pub remove: bool,

    /// ffmpeg binary to decode with (defaults to the one on PATH)
    #[arg(long, value_name = "PATH", env = "VIDCHECK_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Dataset root the manifest paths are relative to
    #[arg(required = true, value_name = "DATASET_ROOT")]
    pub dataset_root: PathBuf,

    /// Headerless CSV whose first column is a relative path
    #[arg(required = true, value_name = "CSV")]
    pub manifest: PathBuf,

    /// Rewrite the manifest without the rows whose file is missing
    #[arg(long)]
    pub remove: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_videos_defaults() {
        let cli = Cli::parse_from(["vidcheck", "videos", "/data/clips"]);

        match cli.command {
            Commands::Videos(args) => {
                assert_eq!(args.root_dir, PathBuf::from("/data/clips"));
                assert_eq!(args.min_frames, 10);
                assert_eq!(args.retry_delay_ms, 100);
                assert!(!args.remove);
                assert!(!args.output.savelog);
                assert_eq!(args.output.log_dir, PathBuf::from("."));
            }
            Commands::Manifest(_) => panic!("Expected Videos command"),
        }
    }

    #[test]
    fn test_parse_videos_with_flags() {
        let cli = Cli::parse_from([
            "vidcheck",
            "videos",
            "clips",
            "--workers",
            "16",
            "--min-frames",
            "5",
            "--retries",
            "0",
            "--retry-delay-ms",
            "250",
            "--remove",
            "--savelog",
            "--log-dir",
            "logs",
            "--no-color",
        ]);

        match cli.command {
            Commands::Videos(args) => {
                assert_eq!(args.workers, 16);
                assert_eq!(args.min_frames, 5);
                assert_eq!(args.retries, 0);
                assert_eq!(args.retry_delay_ms, 250);
                assert!(args.remove);
                assert!(args.output.savelog);
                assert!(args.output.no_color);
                assert_eq!(args.output.log_dir, PathBuf::from("logs"));
            }
            Commands::Manifest(_) => panic!("Expected Videos command"),
        }
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = Cli::try_parse_from(["vidcheck", "videos", "clips", "--workers", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_manifest() {
        let cli = Cli::parse_from(["vidcheck", "manifest", "/dataset", "train.csv", "--remove"]);

        match cli.command {
            Commands::Manifest(args) => {
                assert_eq!(args.dataset_root, PathBuf::from("/dataset"));
                assert_eq!(args.manifest, PathBuf::from("train.csv"));
                assert!(args.remove);
                assert!(!args.output.verbose);
            }
            Commands::Videos(_) => panic!("Expected Manifest command"),
        }
    }

    #[test]
    fn test_manifest_requires_csv() {
        let result = Cli::try_parse_from(["vidcheck", "manifest", "/dataset"]);
        assert!(result.is_err());
    }
}
