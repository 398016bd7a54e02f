//! Result sinks: terminal table and CSV file.
//!
//! Column order is fixed (Device, Title, Price (GBP), eBay Link,
//! OS Support) and must match between the two sinks, since downstream
//! consumers key on it.

use console::style;
use std::io::Write;
use std::path::Path;

use crate::domain::models::ResultRow;
use crate::error::Result;

pub const OUTPUT_FILE: &str = "device_best_prices.csv";

const HEADERS: [&str; 5] = ["Device", "Title", "Price (GBP)", "eBay Link", "OS Support"];

fn row_cells(row: &ResultRow) -> [String; 5] {
    [
        row.device.clone(),
        row.listing.title.clone(),
        format!("{:.2}", row.listing.price),
        row.listing.link.clone(),
        row.os_support.to_string(),
    ]
}

/// Print the result table to `out`, or a "no results" line when empty.
pub fn print_report(out: &mut impl Write, rows: &[ResultRow]) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "{}", style("No results found.").yellow())?;
        return Ok(());
    }

    let cells: Vec<[String; 5]> = rows.iter().map(row_cells).collect();
    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    writeln!(out, "\n{}\n", style("Results:").bold())?;
    write_separator(out, &widths)?;
    write_row(out, &widths, &HEADERS.map(String::from))?;
    write_separator(out, &widths)?;
    for row in &cells {
        write_row(out, &widths, row)?;
    }
    write_separator(out, &widths)?;
    Ok(())
}

fn write_separator(out: &mut impl Write, widths: &[usize; 5]) -> std::io::Result<()> {
    for width in widths {
        write!(out, "+{}", "-".repeat(width + 2))?;
    }
    writeln!(out, "+")
}

fn write_row(out: &mut impl Write, widths: &[usize; 5], cells: &[String; 5]) -> std::io::Result<()> {
    for (width, cell) in widths.iter().zip(cells) {
        write!(out, "| {:<width$} ", cell, width = *width)?;
    }
    writeln!(out, "|")
}

/// Write all rows to a CSV file at `path`. The header row is written
/// even when there are no result rows.
pub fn write_csv(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADERS)?;
    for row in rows {
        writer.write_record(row_cells(row))?;
    }
    writer.flush()?;
    log::info!("[REPORT] Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Listing, OsSupport};

    fn sample_row() -> ResultRow {
        ResultRow {
            device: "Google Pixel 7".to_string(),
            listing: Listing {
                title: "Google Pixel 7 128GB".to_string(),
                price: 199.99,
                link: "https://www.ebay.co.uk/itm/1".to_string(),
            },
            os_support: OsSupport {
                graphene: true,
                calyx: false,
                eos: false,
                lineage: true,
            },
        }
    }

    #[test]
    fn test_print_report_renders_all_columns() {
        let mut out = Vec::new();
        print_report(&mut out, &[sample_row()]).unwrap();
        let text = String::from_utf8(out).unwrap();

        for header in HEADERS {
            assert!(text.contains(header), "missing header {:?}", header);
        }
        assert!(text.contains("Google Pixel 7 128GB"));
        assert!(text.contains("199.99"));
        assert!(text.contains("GrapheneOS: Y"));
    }

    #[test]
    fn test_print_report_empty_says_no_results() {
        let mut out = Vec::new();
        print_report(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("No results found."));
        assert!(!text.contains("Device"));
    }

    #[test]
    fn test_write_csv_rows_and_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        write_csv(&path, &[sample_row()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Device,Title,Price (GBP),eBay Link,OS Support"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Google Pixel 7,Google Pixel 7 128GB,199.99,"));
        assert!(row.contains("https://www.ebay.co.uk/itm/1"));
    }

    #[test]
    fn test_write_csv_with_no_rows_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        write_csv(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.trim_end(),
            "Device,Title,Price (GBP),eBay Link,OS Support"
        );
    }
}
