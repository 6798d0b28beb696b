//! Fixed-width table rendering of availability.
//!
//! Layout: a header row (`Date` plus one zone-abbreviation column per
//! zone), a dash separator, then one data row per interval in chronological
//! order. Every cell is left-justified and space-padded to its column
//! width; cells are joined with `" | "`.

use chrono_tz::Tz;

use super::MessageFormatter;
use crate::interval::Interval;
use crate::zone;

/// Renders the table body for already-sorted intervals.
///
/// Column width is the maximum of the header cell and every data cell in
/// that column. The day label groups rows visually but never reorders them;
/// rows stay in interval order.
pub(super) fn render(
    formatter: &MessageFormatter,
    sorted: &[Interval],
    zones: &[Tz],
) -> Vec<String> {
    // Abbreviations in the header are resolved at the first interval's start.
    let reference = sorted[0].start;

    let mut header: Vec<String> = Vec::with_capacity(zones.len() + 1);
    header.push("Date".to_string());
    header.extend(zones.iter().map(|tz| zone::abbreviation(*tz, reference)));

    let rows: Vec<Vec<String>> = sorted
        .iter()
        .map(|iv| {
            let mut row = Vec::with_capacity(zones.len() + 1);
            row.push(formatter.day_label(iv, zones[0]));
            row.extend(zones.iter().map(|tz| formatter.time_range(iv, *tz)));
            row
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(col, cell)| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(cell.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(&header, &widths));
    lines.push(separator.join(" | "));
    lines.extend(rows.iter().map(|row| render_row(row, &widths)));
    lines
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_end(cell, *width))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn pad_end(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}
