// ============================================================================
// vidcheck-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// This module renders everything the core reports through its progress
// reporting facade: section headers, status lines, success and error
// messages and progress lines. Styling uses the `console` crate and is
// switched off by --no-color, by NO_COLOR, or when stdout is not a terminal.
//
// KEY COMPONENTS:
// - styling: symbols and indentation
// - TerminalReporter: the ProgressReporter implementation for the CLI
// - print_fatal: the red "Error:" line for fatal errors

use console::style;
use std::time::Duration;

use vidcheck_core::progress_reporting::{
    OutputLevel, ProgressReporter, format_progress_line, set_progress_reporter,
};

// ============================================================================
// STYLING CONSTANTS
// ============================================================================

pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const PROCESSING_SYMBOL: &str = "»";
    pub const ERROR_SYMBOL: &str = "✗";
    pub const WARNING_SYMBOL: &str = "!";

    pub const SECTION_PREFIX: &str = "===== ";
    pub const SECTION_SUFFIX: &str = " =====";

    pub const STATUS_INDENT: &str = "  ";
    pub const SUB_ITEM_INDENT: &str = "    ";

    /// Width the status labels are padded to
    pub const LABEL_WIDTH: usize = 18;
}

// ============================================================================
// COLOR CONTROL
// ============================================================================

/// Whether colors should be used given the flag and the environment.
pub fn color_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}

/// Applies the color decision to both output streams.
pub fn configure_colors(no_color_flag: bool) {
    if !color_enabled(no_color_flag) {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Formats a `label: value` status line with the label padded.
pub fn format_status(label: &str, value: &str, highlight: bool) -> String {
    let label = format!("{label}:");
    let value = if highlight {
        style(value).bold().to_string()
    } else {
        value.to_string()
    };
    format!(
        "{}{:<width$} {}",
        styling::STATUS_INDENT,
        label,
        value,
        width = styling::LABEL_WIDTH
    )
}

fn format_line(level: OutputLevel, text: &str) -> String {
    match level {
        OutputLevel::Section => format!(
            "\n{}{}{}",
            styling::SECTION_PREFIX,
            style(text.to_uppercase()).cyan().bold(),
            styling::SECTION_SUFFIX
        ),
        OutputLevel::Processing => format!(
            "{} {}",
            style(styling::PROCESSING_SYMBOL).cyan(),
            style(text).bold()
        ),
        OutputLevel::Success => format!(
            "{}{} {}",
            styling::STATUS_INDENT,
            style(styling::SUCCESS_SYMBOL).green(),
            text
        ),
        OutputLevel::Error => format!(
            "{}{} {}",
            styling::STATUS_INDENT,
            style(styling::ERROR_SYMBOL).red().bold(),
            style(text).red()
        ),
        OutputLevel::Warning => format!(
            "{}{} {}",
            styling::STATUS_INDENT,
            style(styling::WARNING_SYMBOL).yellow().bold(),
            style(text).yellow()
        ),
        OutputLevel::SubItem => format!("{}{}", styling::SUB_ITEM_INDENT, text),
        OutputLevel::Info => format!("{}{}", styling::STATUS_INDENT, text),
    }
}

// ============================================================================
// CLI PROGRESS REPORTER IMPLEMENTATION
// ============================================================================

/// Writes core output to stdout with the CLI styling.
pub struct TerminalReporter;

impl ProgressReporter for TerminalReporter {
    fn output(&self, level: OutputLevel, text: &str) {
        println!("{}", format_line(level, text));
    }

    fn output_status(&self, label: &str, value: &str, highlight: bool) {
        println!("{}", format_status(label, value, highlight));
    }

    fn progress(&self, done: usize, total: usize, elapsed: Duration) {
        let line = format_progress_line(done, total, elapsed);
        println!("{}{}", styling::STATUS_INDENT, style(&line).dim());
        log::info!("{}", line);
    }
}

/// Register the terminal reporter with the core library.
pub fn register_cli_reporter() {
    set_progress_reporter(Box::new(TerminalReporter));
}

/// Prints a fatal error in red on stderr.
pub fn print_fatal(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_disables_color() {
        assert!(!color_enabled(true));
    }

    #[test]
    fn test_status_label_padding() {
        console::set_colors_enabled(false);
        let line = format_status("Workers", "8", false);
        assert_eq!(line, format!("  {:<18} 8", "Workers:"));
    }

    #[test]
    fn test_sub_item_indent() {
        assert_eq!(format_line(OutputLevel::SubItem, "a.mp4"), "    a.mp4");
    }
}
