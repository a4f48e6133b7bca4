// Author: kelexine (https://github.com/kelexine)
// display/mod.rs - Colored terminal output for scan outcomes

use colored::*;
use std::path::Path;

use crate::aggregate::Aggregate;
use crate::models::Describe;
use crate::scan::ScanOutcome;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Thousands-separator formatting.
pub fn fmt_num(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

fn label_width(rows: &[(&'static str, String)]) -> usize {
    rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0)
}

fn print_rows(rows: &[(&'static str, String)], indent: &str) {
    let width = label_width(rows);
    for (label, value) in rows {
        if value.is_empty() {
            continue;
        }
        println!(
            "{}{:<width$}  {}",
            indent,
            format!("{}:", label),
            value.green(),
            width = width + 1
        );
    }
}

fn header(title: &str, target: &Path) {
    println!();
    println!(
        "{}",
        format!("=== {} for {} ===", title, target.display()).blue().bold()
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Public display functions
// ─────────────────────────────────────────────────────────────────────────────

/// Print a scan outcome. `detailed` adds one block per file under the
/// directory summary.
pub fn display_outcome<T>(outcome: &ScanOutcome<T>, title: &str, detailed: bool)
where
    T: Aggregate + Describe,
    T::Total: Describe,
{
    match outcome {
        ScanOutcome::File { path, result } => {
            header(title, path);
            print_rows(&result.describe(), "");
            println!();
        }
        ScanOutcome::Directory(report) => {
            header(title, &report.root);
            print_rows(&report.total.describe(), "");
            println!();
            println!(
                "{} Files analyzed: {}",
                "[INFO]".blue(),
                fmt_num(report.files.len())
            );

            if detailed {
                println!();
                println!("{}", "Per-file results:".bold());
                println!("{}", "-".repeat(70));
                for (name, result) in &report.files {
                    println!("{}", name.cyan().bold());
                    print_rows(&result.describe(), "  ");
                }
                println!("{}", "-".repeat(70));
            }
            println!();
        }
        ScanOutcome::NoFiles { root } => {
            println!(
                "{} No JavaScript files found in {}",
                "[WARN]".yellow(),
                root.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(0), "0");
        assert_eq!(fmt_num(999), "999");
        assert_eq!(fmt_num(1000), "1,000");
        assert_eq!(fmt_num(1234567), "1,234,567");
    }

    #[test]
    fn test_label_width() {
        let rows = vec![("Lines", "1".to_string()), ("Comment lines", "2".to_string())];
        assert_eq!(label_width(&rows), 13);
        assert_eq!(label_width(&[]), 0);
    }
}
