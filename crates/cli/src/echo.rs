use std::path::Path;

use owo_colors::OwoColorize;
use sightline_core::RunSummary;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Sightline".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Collect the visible text of numbered content folders\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print the success line for a written output file, on stdout
pub fn print_written(path: &Path, sections: usize) {
    println!("{} wrote {} ({} sections)", "✓".green(), path.display(), sections);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print run counts
pub fn print_summary(summary: &RunSummary) {
    eprintln!("  {} {}", "Folders:".dimmed(), summary.units.to_string().bright_white());
    eprintln!("  {} {}", "Sections:".dimmed(), summary.sections.to_string().bright_white());
    eprintln!("  {} {}\n", "Warnings:".dimmed(), summary.warnings.to_string().bright_white());
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
