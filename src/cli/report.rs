//! Console output for the preload run.
//!
//! Separate from the pipeline so the informational lines stay observational:
//! one line announcing the scan, one line per unique icon in sorted order,
//! and a closing summary.

use colored::Colorize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print_scan_start() {
    println!("Looking for icons to preload in your template files...");
}

pub fn print_preloading(name: &str) {
    println!("Preloading {}...", name.cyan());
}

pub fn print_summary(icon_count: usize, file_count: usize) {
    let files = if file_count == 1 {
        "template file"
    } else {
        "template files"
    };

    let msg = if icon_count == 0 {
        format!("No icons found across {} {}", file_count, files)
    } else {
        format!("Preloaded {} icons across {} {}", icon_count, file_count, files)
    };

    println!("{} {}", SUCCESS_MARK.green(), msg.green());
}
