// Author: kelexine (https://github.com/kelexine)
// patterns.rs - Pre-compiled classification tables
//
// Every heuristic the scanners apply lives here as data: an ordered list of
// (pattern, classification) pairs. Scanners walk a table top to bottom and
// stop at the first rule that fires, so rule order is part of the contract.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// ─────────────────────────────────────────────────────────────────────────────
// Comments
// ─────────────────────────────────────────────────────────────────────────────

/// Comment markers used by the line classifier.
#[derive(Debug, Clone)]
pub struct CommentSyntax {
    pub line: Regex,
    pub block_start: Regex,
    pub block_end: Regex,
}

pub static JS_COMMENTS: Lazy<CommentSyntax> = Lazy::new(|| CommentSyntax {
    line: Regex::new(r"^\s*//").expect("line comment regex"),
    block_start: Regex::new(r"^\s*/\*").expect("block start regex"),
    block_end: Regex::new(r"\*/").expect("block end regex"),
});

// ─────────────────────────────────────────────────────────────────────────────
// Declarations
// ─────────────────────────────────────────────────────────────────────────────

/// Whole-content patterns for declaration counting. Matches are counted
/// non-overlapping across the entire file.
#[derive(Debug, Clone)]
pub struct DeclarationPatterns {
    pub function: Regex,
    pub class: Regex,
}

pub static JS_DECLARATIONS: Lazy<DeclarationPatterns> = Lazy::new(|| DeclarationPatterns {
    // `function name(...) {` | `name = function(...) {` | `name = (...) => {`
    function: Regex::new(
        r"(?m)^\s*(function\s+\w+\s*\([^)]*\)\s*\{|^\s*\w+\s*=\s*function\s*\([^)]*\)\s*\{|^\s*\w+\s*=\s*\([^)]*\)\s*=>\s*\{)",
    )
    .expect("function declaration regex"),
    class: Regex::new(r"(?m)^\s*class\s+\w+\s*\{").expect("class declaration regex"),
});

// ─────────────────────────────────────────────────────────────────────────────
// Methods
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// What a matching method rule decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodAction {
    Fixed(Visibility),
    /// Private when capture group 1 starts with `_` or `#`, public otherwise.
    ByNamePrefix,
}

#[derive(Debug, Clone)]
pub struct MethodRule {
    pub name: &'static str,
    pub pattern: Regex,
    /// The rule is skipped (not matched) when the line contains this word.
    pub unless_contains: Option<&'static str>,
    pub action: MethodAction,
}

impl MethodRule {
    /// Apply the rule to a trimmed line, returning the visibility it assigns.
    pub fn apply(&self, line: &str) -> Option<Visibility> {
        if let Some(word) = self.unless_contains
            && line.contains(word)
        {
            return None;
        }
        let caps = self.pattern.captures(line)?;
        match self.action {
            MethodAction::Fixed(v) => Some(v),
            MethodAction::ByNamePrefix => {
                let name = caps.get(1)?.as_str();
                if name.starts_with('_') || name.starts_with('#') {
                    Some(Visibility::Private)
                } else {
                    Some(Visibility::Public)
                }
            }
        }
    }
}

pub static JS_METHOD_RULES: Lazy<Vec<MethodRule>> = Lazy::new(|| {
    vec![
        MethodRule {
            name: "private-method",
            pattern: Regex::new(r"^\s*([#_][a-zA-Z_$][a-zA-Z0-9_$]*)\s*\([^)]*\)\s*\{").unwrap(),
            unless_contains: None,
            action: MethodAction::Fixed(Visibility::Private),
        },
        MethodRule {
            name: "class-method",
            pattern: Regex::new(r"^\s*([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\([^)]*\)\s*\{").unwrap(),
            unless_contains: Some("function"),
            action: MethodAction::Fixed(Visibility::Public),
        },
        MethodRule {
            name: "function-declaration",
            pattern: Regex::new(r"^\s*function\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*\([^)]*\)\s*\{").unwrap(),
            unless_contains: None,
            action: MethodAction::Fixed(Visibility::Public),
        },
        MethodRule {
            name: "const-function",
            pattern: Regex::new(r"^\s*const\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*function").unwrap(),
            unless_contains: None,
            action: MethodAction::ByNamePrefix,
        },
        MethodRule {
            name: "const-arrow",
            pattern: Regex::new(r"^\s*const\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*\([^)]*\)\s*=>").unwrap(),
            unless_contains: None,
            action: MethodAction::ByNamePrefix,
        },
    ]
});

// ─────────────────────────────────────────────────────────────────────────────
// Imports
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Default,
    Namespace,
    Named,
    SideEffect,
    Require,
}

#[derive(Debug, Clone)]
pub struct ImportRule {
    pub kind: ImportKind,
    /// Capture group 1 is the module specifier.
    pub pattern: Regex,
}

pub static JS_IMPORT_RULES: Lazy<Vec<ImportRule>> = Lazy::new(|| {
    vec![
        ImportRule {
            kind: ImportKind::Default,
            pattern: Regex::new(r#"^import\s+\w+\s+from\s+['"]([^'"]+)['"]"#).unwrap(),
        },
        ImportRule {
            kind: ImportKind::Namespace,
            pattern: Regex::new(r#"^import\s+\*\s+as\s+\w+\s+from\s+['"]([^'"]+)['"]"#).unwrap(),
        },
        ImportRule {
            kind: ImportKind::Named,
            pattern: Regex::new(r#"^import\s+\{[^}]+\}\s+from\s+['"]([^'"]+)['"]"#).unwrap(),
        },
        ImportRule {
            kind: ImportKind::SideEffect,
            pattern: Regex::new(r#"^import\s+['"]([^'"]+)['"]"#).unwrap(),
        },
        ImportRule {
            kind: ImportKind::Require,
            pattern: Regex::new(r#"require\(\s*['"]([^'"]+)['"]\s*\)"#).unwrap(),
        },
    ]
});

/// Built-in Node.js modules, matched after stripping a `node:` prefix.
pub static NATIVE_MODULES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "assert", "async_hooks", "buffer", "child_process", "cluster", "console",
        "constants", "crypto", "dgram", "diagnostics_channel", "dns", "domain",
        "events", "fs", "http", "http2", "https", "inspector", "module", "net",
        "os", "path", "perf_hooks", "process", "punycode", "querystring",
        "readline", "repl", "stream", "string_decoder", "sys", "timers",
        "timers/promises", "tls", "trace_events", "tty", "url", "util", "v8",
        "vm", "worker_threads", "zlib",
    ]
    .iter()
    .copied()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn first_method_rule(line: &str) -> Option<&'static str> {
        JS_METHOD_RULES
            .iter()
            .find(|r| r.apply(line).is_some())
            .map(|r| r.name)
    }

    #[test]
    fn test_method_rule_precedence() {
        assert_eq!(first_method_rule("_hidden() {"), Some("private-method"));
        assert_eq!(first_method_rule("#secret(a) {"), Some("private-method"));
        assert_eq!(first_method_rule("render() {"), Some("class-method"));
        // "function" in the line disables the class-method rule
        assert_eq!(first_method_rule("function load(a, b) {"), Some("function-declaration"));
        assert_eq!(first_method_rule("const run = function () {"), Some("const-function"));
        assert_eq!(first_method_rule("const go = (x) => x * 2;"), Some("const-arrow"));
        assert_eq!(first_method_rule("let y = 3;"), None);
    }

    #[test]
    fn test_by_name_prefix() {
        let arrow = &JS_METHOD_RULES[4];
        assert_eq!(arrow.apply("const _inner = () => {}"), Some(Visibility::Private));
        assert_eq!(arrow.apply("const outer = () => {}"), Some(Visibility::Public));
    }

    #[test]
    fn test_declaration_patterns_require_line_start_forms() {
        let d = &*JS_DECLARATIONS;
        assert!(d.function.is_match("function go(a) {"));
        assert!(d.function.is_match("  handler = function (e) {"));
        assert!(d.function.is_match("onClick = (e) => {"));
        // a leading `const` breaks the `name =` form
        assert!(!d.function.is_match("const f = () => {"));
        assert!(d.class.is_match("class Foo {"));
        assert!(!d.class.is_match("class Foo extends Bar {"));
    }

    #[test]
    fn test_import_rules_capture_specifier() {
        let specifier = |line: &str| {
            JS_IMPORT_RULES
                .iter()
                .find_map(|r| r.pattern.captures(line))
                .map(|c| c[1].to_string())
        };
        assert_eq!(specifier("import React from 'react';").as_deref(), Some("react"));
        assert_eq!(specifier("import * as _ from \"lodash\";").as_deref(), Some("lodash"));
        assert_eq!(specifier("import { a, b } from './x';").as_deref(), Some("./x"));
        assert_eq!(specifier("import 'polyfill';").as_deref(), Some("polyfill"));
        assert_eq!(specifier("const fs = require('node:fs');").as_deref(), Some("node:fs"));
        assert_eq!(specifier("import React, { useState } from 'react';"), None);
    }

    #[test]
    fn test_native_table() {
        assert!(NATIVE_MODULES.contains("fs"));
        assert!(NATIVE_MODULES.contains("timers/promises"));
        assert!(!NATIVE_MODULES.contains("express"));
    }
}
