//! Console rendering of tables, trees and previews.

use harmock_core::preview::{format_json, PreviewOptions, TableRow};
use harmock_core::WritePlan;

const COLUMN_SEP: &str = " │ ";
const RULE_SEP: &str = "─┼─";

/// Renders rows as a padded text table. Empty input renders nothing.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join(COLUMN_SEP)
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers.iter().map(|h| h.to_string()).collect()));
    out.push(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join(RULE_SEP),
    );
    for row in rows {
        out.push(line(row.clone()));
    }
    out.join("\n")
}

/// Name / Method / Path table used when no target directory is given.
pub fn inspect_table(rows: &[TableRow]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.name.clone(), r.method.to_string(), r.path.clone()])
        .collect();
    table(&["Name", "Method", "Path"], &cells)
}

/// Table with query string and create/update/skip status.
pub fn status_table(rows: &[TableRow]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.method.to_string(),
                r.path.clone(),
                r.query.clone(),
                r.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    table(&["Name", "Method", "Path", "Query", "Status"], &cells)
}

/// Formatted response bodies for every file in the plan.
pub fn response_previews(plan: &WritePlan<'_>, options: PreviewOptions) -> String {
    plan.statuses
        .iter()
        .filter(|s| s.will_be_written)
        .map(|s| {
            format!(
                "── {} {}\n{}",
                s.entry.method,
                s.entry.url,
                format_json(s.entry.response_body.as_deref(), options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
