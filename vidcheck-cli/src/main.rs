// vidcheck-cli/src/main.rs
//
// Entry point of the `vidcheck` binary: parses the arguments, runs the
// selected command and maps fatal errors to a red message and exit code 1.
// Per-file problems (undecodable files, failed deletions, a results file
// that could not be written) are part of a completed run and exit with 0.

use clap::Parser;
use std::process;

use vidcheck_cli::terminal::print_fatal;
use vidcheck_cli::{Cli, Commands, run_manifest, run_videos};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Videos(args) => run_videos(args).map(|_| ()),
        Commands::Manifest(args) => run_manifest(args).map(|_| ()),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        print_fatal(&e.to_string());
        process::exit(1);
    }
}
