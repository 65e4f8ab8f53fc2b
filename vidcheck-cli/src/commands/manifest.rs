//! Implementation of the 'manifest' subcommand.

use crate::cli::ManifestArgs;
use crate::error::CliResult;

use vidcheck_core::config::MANIFEST_PROGRESS_INTERVAL;
use vidcheck_core::{ManifestOptions, ManifestReport, check_manifest};

/// Runs the `manifest` command.
pub fn run_manifest(args: ManifestArgs) -> CliResult<ManifestReport> {
    super::prepare_output(&args.output, "manifest")?;

    let options = ManifestOptions {
        remove_missing: args.remove,
        save_log: args.output.savelog,
        log_dir: args.output.log_dir.clone(),
        progress_interval: MANIFEST_PROGRESS_INTERVAL,
    };

    check_manifest(&args.dataset_root, &args.manifest, &options)
}
