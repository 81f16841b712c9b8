//! End of run terminal report.

use crate::LookupReport;
use colored::Colorize;

/// Quoted so empty and whitespace padded IDs stay visible.
fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

/// Text listing the requested IDs that matched no subscription, `None` if all matched.
pub fn format_unmatched(unmatched: &[String]) -> Option<String> {
    if unmatched.is_empty() {
        return None;
    }
    let lines: Vec<String> = unmatched.iter().map(|id| format!("  {}", quote(id))).collect();
    Some(format!(
        "The following subscriptions were not found:\n{}",
        lines.join("\n")
    ))
}

/// One line summary of the run.
pub fn format_summary(report: &LookupReport) -> String {
    format!(
        "files_written={} skipped_no_asgs={} failed={} not_found={}",
        report.written.len(),
        report.skipped.len(),
        report.failed.len(),
        report.unmatched.len()
    )
}

/// Print the report to stdout.
pub fn print_report(report: &LookupReport) {
    for path in &report.written {
        println!("{} {}", "wrote".green(), path.display());
    }
    for (sub, err) in &report.failed {
        println!("{} {sub}: {err}", "FAILED".on_red());
    }
    if let Some(text) = format_unmatched(&report.unmatched) {
        println!("{}", text.yellow());
    }
    log::info!("{}", format_summary(report));
}
