use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::{Path, PathBuf};
use anyhow::Result;

use crate::utils::timestamped_path;

/// Path of the log file for one run of `command` inside `log_dir`.
pub fn log_file_path(log_dir: &Path, command: &str) -> PathBuf {
    timestamped_path(log_dir, &format!("vidcheck_{command}"), "log")
}

/// Routes every `log` record at `log_level` or above into `log_file`.
///
/// Installs the global logger, so it can only succeed once per process.
pub fn setup_file_logging(log_file: &Path, log_level: LevelFilter) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}"
        )))
        .build(log_file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(Root::builder().appender("file").build(log_level))?;

    log4rs::init_config(config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_names_the_command() {
        let path = log_file_path(Path::new("/var/log/vidcheck"), "videos");
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(path.starts_with("/var/log/vidcheck"));
        assert!(name.starts_with("vidcheck_videos_"));
        assert!(name.ends_with(".log"));
    }
}
