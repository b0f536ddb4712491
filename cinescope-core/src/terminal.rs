//! Terminal output styling for cinescope.
//!
//! Status output goes through the `log` facade so it lands in the same
//! appenders as everything else (stderr, plus the log file when enabled).
//! Stdout is left to the screenplay or report itself.

use console::style;
use log::{error, info, warn};

use crate::processing::segmentation::Beat;

/// Visual hierarchy levels in the CLI output.
#[derive(Debug, Clone, Copy)]
pub enum OutputLevel {
    /// Main sections (===== SECTION =====)
    Section,
    /// Key-value status information
    Status,
    /// Additional details
    Detail,
}

impl OutputLevel {
    fn indent(&self) -> &'static str {
        match self {
            OutputLevel::Section => "",
            OutputLevel::Status => "  ",
            OutputLevel::Detail => "    ",
        }
    }
}

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", style(title.to_uppercase()).cyan());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print a key-value status line
pub fn print_status(label: &str, value: &str) {
    let indent = OutputLevel::Status.indent();
    if should_use_color() {
        info!("{indent}{:<14} {}", format!("{label}:"), style(value).bold());
    } else {
        info!("{indent}{:<14} {}", format!("{label}:"), value);
    }
}

/// Print a detail line below a status line
pub fn print_detail(text: &str) {
    info!("{}{}", OutputLevel::Detail.indent(), text);
}

/// Print one line per beat
pub fn print_beats(beats: &[Beat]) {
    for beat in beats {
        print_detail(&format!(
            "{:>5}s  {:<15} {:<14} {}s",
            beat.start,
            beat.action.as_str(),
            beat.framing.as_str(),
            beat.duration
        ));
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    info!("");
    if should_use_color() {
        info!("  {} {}", style("✓").green(), style(message).green());
    } else {
        info!("  ✓ {message}");
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    if should_use_color() {
        warn!("  {} {}", style("⚠").yellow(), message);
    } else {
        warn!("  ⚠ {message}");
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    if should_use_color() {
        error!("{} {}", style("Error:").red().bold(), message);
    } else {
        error!("Error: {message}");
    }
}
