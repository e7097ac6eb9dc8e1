//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use ol_rollup::DateRange;
use serde::Serialize;

/// Print `data` to stdout as pretty-printed JSON
pub(crate) fn print_json<T: Serialize + ?Sized>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

/// Render a revenue or payment amount with two decimals.
///
/// Currency symbols and locale grouping are left to whoever consumes the
/// output.
pub(crate) fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Describe the active date filter for table headings
pub(crate) fn describe_range(range: Option<DateRange>) -> String {
    match range {
        Some(r) if r.is_reversed() => format!("{} to {} (reversed, empty)", r.start, r.end),
        Some(r) => format!("{} to {}", r.start, r.end),
        None => "all dates".to_string(),
    }
}

/// Print a blank line, then an underlined section heading
pub(crate) fn print_heading(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "=".repeat(title.chars().count()));
}

// ---------------------------------------------------------------------------
// Table-printing utilities
// ---------------------------------------------------------------------------

/// Calculate column widths for a table given headers and row data.
///
/// For each column, returns the maximum width across the header and all
/// row values so that data aligns when printed with left-padding.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

/// Print a formatted table to stdout.
///
/// Prints a left-aligned header row, a separator line of dashes, and each
/// data row, with columns separated by two spaces. An empty table prints
/// `(no rows)` under the header.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    for line in render_table(headers, rows) {
        println!("{}", line);
    }
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let widths = calculate_column_widths(headers, rows);
    let join = |cells: Vec<String>| cells.join("  ").trim_end().to_string();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join(
        headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!("{:<width$}", h, width = w))
            .collect(),
    ));
    lines.push(join(widths.iter().map(|&w| "-".repeat(w)).collect()));

    if rows.is_empty() {
        lines.push("(no rows)".to_string());
    }
    for row in rows {
        lines.push(join(
            row.iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
                .collect(),
        ));
    }
    lines
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
