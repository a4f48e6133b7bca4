// Author: kelexine (https://github.com/kelexine)
// analyzer/dependencies.rs - import/require extraction and native/external split

use std::collections::{BTreeSet, HashSet};

use crate::analyzer::Analyzer;
use crate::models::DependencyResult;
use crate::patterns::{ImportRule, JS_IMPORT_RULES, NATIVE_MODULES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleClass {
    Native,
    External,
    Relative,
}

/// Strip the `node:` scheme so `node:fs` and `fs` are the same module.
pub fn normalize_module(specifier: &str) -> &str {
    specifier.strip_prefix("node:").unwrap_or(specifier)
}

fn is_relative(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../") || specifier.starts_with('/')
}

pub fn classify_module(specifier: &str, native: &HashSet<&'static str>) -> ModuleClass {
    if is_relative(specifier) {
        ModuleClass::Relative
    } else if native.contains(specifier) {
        ModuleClass::Native
    } else {
        ModuleClass::External
    }
}

/// Line-by-line import scanner with no multi-line state. Each trimmed line is
/// tested against the import table in order and the first hit wins.
#[derive(Debug, Clone)]
pub struct DependencyScanner<'a> {
    rules: &'a [ImportRule],
    native: &'a HashSet<&'static str>,
}

impl Default for DependencyScanner<'static> {
    fn default() -> Self {
        Self {
            rules: &JS_IMPORT_RULES,
            native: &NATIVE_MODULES,
        }
    }
}

impl<'a> DependencyScanner<'a> {
    pub fn new(rules: &'a [ImportRule], native: &'a HashSet<&'static str>) -> Self {
        Self { rules, native }
    }

    /// Module specifier imported by this line, if any.
    pub fn extract<'l>(&self, line: &'l str) -> Option<&'l str> {
        let line = line.trim();
        self.rules.iter().find_map(|rule| {
            rule.pattern
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        })
    }
}

impl Analyzer for DependencyScanner<'_> {
    type Output = DependencyResult;

    fn name(&self) -> &'static str {
        "dependencies"
    }

    fn analyze_source(&self, source: &str) -> DependencyResult {
        let mut external = BTreeSet::new();
        let mut native = BTreeSet::new();

        for line in source.lines() {
            let Some(specifier) = self.extract(line) else {
                continue;
            };
            let module = normalize_module(specifier);
            match classify_module(module, self.native) {
                ModuleClass::Native => {
                    native.insert(module.to_string());
                }
                ModuleClass::External => {
                    external.insert(module.to_string());
                }
                ModuleClass::Relative => {}
            }
        }

        DependencyResult::new(external.into_iter().collect(), native.into_iter().collect())
    }
}
