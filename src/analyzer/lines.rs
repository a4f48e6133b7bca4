// Author: kelexine (https://github.com/kelexine)
// analyzer/lines.rs - Blank/comment line classification and the counters built on it

use crate::analyzer::Analyzer;
use crate::analyzer::indentation::measure_indent;
use crate::models::{CommentResult, LineResult, PercentResult};
use crate::patterns::{CommentSyntax, JS_COMMENTS};

/// One classified line. Only lives for the duration of a scan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'l> {
    pub text: &'l str,
    pub is_blank: bool,
    pub is_comment: bool,
    pub indent_level: usize,
}

/// Stateful single-pass classifier. Create one per file; the block comment
/// flag carries over from line to line.
///
/// Rules, in order:
/// - inside a block comment every line is a comment, except the line holding
///   `*/`, which clears the state and is not counted;
/// - `^\s*//` is a comment;
/// - `^\s*/*` is a comment and always opens block state, even when the same
///   line also closes it. The line after a one-line `/* ... */` is therefore
///   treated as still inside the block.
#[derive(Debug, Clone)]
pub struct LineClassifier<'a> {
    syntax: &'a CommentSyntax,
    in_block_comment: bool,
}

impl LineClassifier<'static> {
    pub fn javascript() -> Self {
        Self::new(&JS_COMMENTS)
    }
}

impl<'a> LineClassifier<'a> {
    pub fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            syntax,
            in_block_comment: false,
        }
    }

    pub fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    pub fn is_comment(&mut self, line: &str) -> bool {
        if self.in_block_comment {
            if self.syntax.block_end.is_match(line) {
                self.in_block_comment = false;
                return false;
            }
            return true;
        }

        if self.syntax.line.is_match(line) {
            return true;
        }

        if self.syntax.block_start.is_match(line) {
            self.in_block_comment = true;
            return true;
        }

        false
    }

    pub fn classify<'l>(&mut self, line: &'l str) -> LineRecord<'l> {
        LineRecord {
            text: line,
            is_blank: is_blank(line),
            is_comment: self.is_comment(line),
            indent_level: measure_indent(line).level,
        }
    }
}

/// Blank means zero length. Whitespace-only lines are not blank.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.is_empty()
}

/// Counts non-blank lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineCounter;

impl Analyzer for LineCounter {
    type Output = LineResult;

    fn name(&self) -> &'static str {
        "lines"
    }

    fn analyze_source(&self, source: &str) -> LineResult {
        LineResult {
            total_lines: source.lines().filter(|l| !is_blank(l)).count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommentCounter<'a> {
    syntax: &'a CommentSyntax,
}

impl Default for CommentCounter<'static> {
    fn default() -> Self {
        Self {
            syntax: &JS_COMMENTS,
        }
    }
}

impl<'a> CommentCounter<'a> {
    pub fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }
}

impl Analyzer for CommentCounter<'_> {
    type Output = CommentResult;

    fn name(&self) -> &'static str {
        "comments"
    }

    fn analyze_source(&self, source: &str) -> CommentResult {
        let mut classifier = LineClassifier::new(self.syntax);
        CommentResult {
            comment_lines: source.lines().filter(|l| classifier.is_comment(l)).count(),
        }
    }
}

/// Comment lines as a share of all physical lines.
#[derive(Debug, Clone)]
pub struct CommentPercentAnalyzer<'a> {
    syntax: &'a CommentSyntax,
}

impl Default for CommentPercentAnalyzer<'static> {
    fn default() -> Self {
        Self {
            syntax: &JS_COMMENTS,
        }
    }
}

impl<'a> CommentPercentAnalyzer<'a> {
    pub fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }
}

impl Analyzer for CommentPercentAnalyzer<'_> {
    type Output = PercentResult;

    fn name(&self) -> &'static str {
        "percent"
    }

    fn analyze_source(&self, source: &str) -> PercentResult {
        let mut classifier = LineClassifier::new(self.syntax);
        let mut total = 0;
        let mut comments = 0;
        for line in source.lines() {
            total += 1;
            if classifier.is_comment(line) {
                comments += 1;
            }
        }
        PercentResult::new(total, comments)
    }
}
