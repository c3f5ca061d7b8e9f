// src/utils/table.rs

//! Console table of collected records.

use console::style;
use unicode_segmentation::UnicodeSegmentation;

use crate::models::ResultSet;

const HEADERS: [&str; 5] = ["Title", "Company", "Location", "Link", "Description"];

/// Shortened description for display: the first `max` graphemes followed by
/// `...`, or `N/A` when there is no description.
pub fn description_preview(description: &str, max: usize) -> String {
    if description.is_empty() {
        return "N/A".to_string();
    }
    let prefix: String = description.graphemes(true).take(max).collect();
    format!("{prefix}...")
}

/// Render the records as a bordered table with a bold header row.
pub fn render(results: &ResultSet, preview_length: usize) -> String {
    let rows: Vec<[String; 5]> = results
        .iter()
        .map(|r| {
            [
                single_line(&r.title),
                single_line(&r.company),
                single_line(&r.location),
                single_line(&r.link),
                single_line(&description_preview(&r.description, preview_length)),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(width(cell));
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}\n", segments.join(mid))
    };

    let mut out = rule("┌", "┬", "┐");
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| style(pad(h, w)).bold().to_string())
        .collect();
    out.push_str(&format!("│ {} │\n", header.join(" │ ")));
    out.push_str(&rule("├", "┼", "┤"));
    for row in &rows {
        let cells: Vec<String> = row.iter().zip(widths).map(|(c, w)| pad(c, w)).collect();
        out.push_str(&format!("│ {} │\n", cells.join(" │ ")));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

fn width(s: &str) -> usize {
    s.graphemes(true).count()
}

fn pad(s: &str, w: usize) -> String {
    format!("{s}{}", " ".repeat(w.saturating_sub(width(s))))
}

fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
