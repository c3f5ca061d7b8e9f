// src/utils/report.rs

//! Operator-facing console output.
//!
//! Diagnostics go through the `log` macros; this module prints what the
//! operator is meant to read between prompts.

use console::style;

/// Print a failure that ended the run early.
pub fn failure(message: &str) {
    eprintln!("{}", style(message).red().bold());
}

/// Print a header
pub fn header(title: &str) {
    let border = "═".repeat(60);
    println!("{border}");
    println!("  {}", style(title).bold());
    println!("{border}");
}

/// Print a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    println!();
    println!("{}", style(format!("[SUMMARY] {title}")).bold());
    for (key, value) in items {
        println!("    {key}: {value}");
    }
}

/// Print a success line
pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}
