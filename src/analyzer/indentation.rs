// Author: kelexine (https://github.com/kelexine)
// analyzer/indentation.rs - Leading-whitespace profile of a file

use std::collections::BTreeMap;

use crate::analyzer::Analyzer;
use crate::models::{IndentFreq, IndentResult};

/// A tab is worth this many indentation points; a space is worth one.
pub const TAB_WIDTH: usize = 4;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    pub level: usize,
    pub spaces: bool,
    pub tabs: bool,
}

/// Measure leading whitespace, stopping at the first other character.
pub fn measure_indent(line: &str) -> Indent {
    let mut indent = Indent::default();
    for ch in line.chars() {
        match ch {
            ' ' => {
                indent.level += 1;
                indent.spaces = true;
            }
            '\t' => {
                indent.level += TAB_WIDTH;
                indent.tabs = true;
            }
            _ => break,
        }
    }
    indent
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IndentationAnalyzer;

impl Analyzer for IndentationAnalyzer {
    type Output = IndentResult;

    fn name(&self) -> &'static str {
        "indentation"
    }

    fn analyze_source(&self, source: &str) -> IndentResult {
        let mut max = 0;
        let mut sum = 0;
        let mut measured = 0;
        let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
        let mut uses_spaces = false;
        let mut uses_tabs = false;

        for line in source.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            let indent = measure_indent(line);
            uses_spaces |= indent.spaces;
            uses_tabs |= indent.tabs;
            *distribution.entry(indent.level).or_default() += 1;
            max = max.max(indent.level);
            sum += indent.level;
            measured += 1;
        }

        IndentResult {
            max_indent_level: max,
            average_indent_level: if measured == 0 {
                0.0
            } else {
                sum as f64 / measured as f64
            },
            indent_distribution: distribution
                .into_iter()
                .map(|(level, count)| IndentFreq { level, count })
                .collect(),
            uses_spaces,
            uses_tabs,
            mixed_indentation: uses_spaces && uses_tabs,
            measured_lines: measured,
        }
    }
}
