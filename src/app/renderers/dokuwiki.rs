//! DokuWiki table markup.
//!
//! `^` delimits header cells and `|` delimits data cells. Cells are padded to
//! the widest entry of their column so the source stays readable.

use crate::domain::table::Table;

pub fn format_dokuwiki(table: &Table, table_width: bool) -> String {
    let mut out = String::new();

    if table_width && table.has_width_hints() {
        let hints: Vec<&str> = table
            .columns
            .iter()
            .map(|c| c.width.as_deref().unwrap_or("-"))
            .collect();
        out.push_str(&format!("|< 100% {} >|\n", hints.join(" ")));
    }

    if !table.groups.is_empty() {
        for group in &table.groups {
            out.push_str(&format!("^ {} ", escape_cell(&group.label)));
            out.push_str(&"^".repeat(group.span.saturating_sub(1)));
        }
        out.push_str("^\n");
    }

    let headings: Vec<String> = table.headings().map(escape_cell).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| escape_cell(cell)).collect())
        .collect();
    let widths = column_widths(&headings, &rows);

    out.push_str(&format_row(&headings, &widths, '^'));
    for row in &rows {
        out.push_str(&format_row(row, &widths, '|'));
    }
    out
}

fn column_widths(headings: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    headings
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(heading.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn format_row(cells: &[String], widths: &[usize], separator: char) -> String {
    let mut row = String::new();
    row.push(separator);
    for (cell, width) in cells.iter().zip(widths) {
        row.push_str(&format!(" {:<width$} {}", cell, separator, width = *width));
    }
    row.push('\n');
    row
}

/// Wraps text that would break the table in a `%%` nowiki span.
fn escape_cell(cell: &str) -> String {
    if cell.contains('|') || cell.contains('^') {
        format!("%%{}%%", cell)
    } else {
        cell.to_string()
    }
}
