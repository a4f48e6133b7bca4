// Author: kelexine (https://github.com/kelexine)
// analyzer/structure.rs - Class/function declarations, function body size, method visibility
//
// Three independent heuristics live here and intentionally disagree with each
// other on edge cases; none of them is a parser.

use crate::analyzer::Analyzer;
use crate::models::{ClassFuncResult, FunctionSizeResult, MethodCountResult};
use crate::patterns::{
    DeclarationPatterns, JS_DECLARATIONS, JS_METHOD_RULES, MethodRule, Visibility,
};
use crate::walker::BROAD_IGNORE;

// ─────────────────────────────────────────────────────────────────────────────
// Declaration counting (whole content)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DeclarationCounter<'a> {
    patterns: &'a DeclarationPatterns,
}

impl Default for DeclarationCounter<'static> {
    fn default() -> Self {
        Self {
            patterns: &JS_DECLARATIONS,
        }
    }
}

impl<'a> DeclarationCounter<'a> {
    pub fn new(patterns: &'a DeclarationPatterns) -> Self {
        Self { patterns }
    }
}

impl Analyzer for DeclarationCounter<'_> {
    type Output = ClassFuncResult;

    fn name(&self) -> &'static str {
        "classes"
    }

    fn analyze_source(&self, source: &str) -> ClassFuncResult {
        // Line endings normalised to '\n' so the multi-line anchors behave
        // the same for CRLF files.
        let mut content = String::with_capacity(source.len() + 1);
        for line in source.lines() {
            content.push_str(line);
            content.push('\n');
        }

        ClassFuncResult {
            functions: self.patterns.function.find_iter(&content).count(),
            classes: self.patterns.class.find_iter(&content).count(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Function body size (brace depth)
// ─────────────────────────────────────────────────────────────────────────────

/// Mutable state of one file scan. Reset per file, never shared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    pub in_function_body: bool,
    pub brace_depth: i64,
    pub current_function_line_count: usize,
}

/// A trimmed line opens a function when it starts with `function` or
/// `async function`, contains `=>`, or ends with `{` and holds both parens.
/// Control-flow headers like `if (x) {` qualify too.
pub fn is_function_start(line: &str) -> bool {
    line.starts_with("function")
        || line.contains("=>")
        || line.starts_with("async function")
        || (line.ends_with('{') && line.contains('(') && line.contains(')'))
}

fn net_braces(line: &str) -> i64 {
    let open = line.matches('{').count() as i64;
    let close = line.matches('}').count() as i64;
    open - close
}

/// Averages function length in lines. A function starts on a line accepted by
/// [`is_function_start`] and ends on the line where the running brace depth
/// drops to zero or below. Functions nested inside an open body are not
/// tracked separately; the enclosing span absorbs them.
#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionSizeScanner;

impl Analyzer for FunctionSizeScanner {
    type Output = FunctionSizeResult;

    fn name(&self) -> &'static str {
        "function-size"
    }

    fn ignore_list(&self) -> &'static [&'static str] {
        BROAD_IGNORE
    }

    fn analyze_source(&self, source: &str) -> FunctionSizeResult {
        let mut state = ScanState::default();
        let mut total_lines = 0;
        let mut functions = 0;

        let mut close = |state: &mut ScanState| {
            state.in_function_body = false;
            total_lines += state.current_function_line_count;
            functions += 1;
        };

        for raw in source.lines() {
            let line = raw.trim();

            if !state.in_function_body && is_function_start(line) {
                state.in_function_body = true;
                state.brace_depth = net_braces(line);
                state.current_function_line_count = 1;
                if state.brace_depth <= 0 {
                    close(&mut state);
                }
                continue;
            }

            if state.in_function_body {
                state.current_function_line_count += 1;
                state.brace_depth += net_braces(line);
                if state.brace_depth <= 0 {
                    close(&mut state);
                }
            }
        }

        FunctionSizeResult::new(functions, total_lines)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Method visibility
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MethodCounter<'a> {
    rules: &'a [MethodRule],
}

impl Default for MethodCounter<'static> {
    fn default() -> Self {
        Self {
            rules: &JS_METHOD_RULES,
        }
    }
}

impl<'a> MethodCounter<'a> {
    pub fn new(rules: &'a [MethodRule]) -> Self {
        Self { rules }
    }

    /// First rule that fires decides; later rules are never consulted.
    pub fn classify_line(&self, line: &str) -> Option<Visibility> {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with("/*") {
            return None;
        }
        self.rules.iter().find_map(|rule| rule.apply(line))
    }
}

impl Analyzer for MethodCounter<'_> {
    type Output = MethodCountResult;

    fn name(&self) -> &'static str {
        "methods"
    }

    fn analyze_source(&self, source: &str) -> MethodCountResult {
        let mut result = MethodCountResult::default();
        for line in source.lines() {
            match self.classify_line(line) {
                Some(Visibility::Public) => result.public += 1,
                Some(Visibility::Private) => result.private += 1,
                None => {}
            }
        }
        result
    }
}
