// Status output for the CLI. Everything here goes to stderr so stdout only
// carries exported entries.

use crate::export::ExportSummary;
use colored::*;

/// Print an error message
pub fn print_error(error: &str) {
    eprintln!("{} {}", "✗ Error:".red().bold(), error);
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print the result of a finished export
pub fn print_summary(summary: &ExportSummary) {
    eprintln!("{}", "✓ Export complete".green().bold());
    eprintln!("  {}: {}", "Environment".bold(), summary.env_uuid.cyan());
    eprintln!("  {}: {}", "Pages".bold(), summary.pages);
    eprintln!("  {}: {}", "Records".bold(), summary.records);
    eprintln!("  {}: {}", "Output".bold(), summary.output.display());
}
