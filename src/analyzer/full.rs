// Author: kelexine (https://github.com/kelexine)
// analyzer/full.rs - Every per-file metric in one pass over the directory

use crate::analyzer::{
    Analyzer, CommentPercentAnalyzer, DeclarationCounter, DependencyScanner,
    FunctionSizeScanner, IndentationAnalyzer, LineCounter, MethodCounter,
};
use crate::models::{FileMetric, percentage};

/// Runs each single-metric analyzer over the same source and combines the
/// results into a [`FileMetric`].
#[derive(Debug, Clone, Default)]
pub struct FullAnalyzer {
    pub percent: CommentPercentAnalyzer<'static>,
    pub declarations: DeclarationCounter<'static>,
    pub methods: MethodCounter<'static>,
    pub dependencies: DependencyScanner<'static>,
}

impl Analyzer for FullAnalyzer {
    type Output = FileMetric;

    fn name(&self) -> &'static str {
        "analyze"
    }

    fn analyze_source(&self, source: &str) -> FileMetric {
        let lines = LineCounter.analyze_source(source);
        let percent = self.percent.analyze_source(source);
        let declarations = self.declarations.analyze_source(source);
        let methods = self.methods.analyze_source(source);
        let sizes = FunctionSizeScanner.analyze_source(source);

        FileMetric {
            total_lines: lines.total_lines,
            physical_lines: percent.total_lines,
            comment_lines: percent.comment_lines,
            comment_percentage: percentage(percent.comment_lines, lines.total_lines),
            functions: declarations.functions,
            classes: declarations.classes,
            public_methods: methods.public,
            private_methods: methods.private,
            function_count: sizes.function_count,
            average_function_size: sizes.average_function_size,
            indentation: IndentationAnalyzer.analyze_source(source),
            dependencies: self.dependencies.analyze_source(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_metric_matches_individual_analyzers() {
        let src = "\
import fs from 'fs';
import lodash from 'lodash';

// service
class Service {
  start() {
    run();
  }
}

function run() {
  return 1;
}
";
        let m = FullAnalyzer::default().analyze_source(src);
        assert_eq!(m.total_lines, 11);
        assert_eq!(m.physical_lines, 13);
        assert_eq!(m.comment_lines, 1);
        assert!((m.comment_percentage - 100.0 / 11.0).abs() < 1e-9);
        assert_eq!(m.classes, 1);
        assert_eq!(m.functions, 1);
        assert_eq!(m.public_methods, 2);
        assert_eq!(m.private_methods, 0);
        assert_eq!(m.dependencies.dependencies, vec!["lodash"]);
        assert_eq!(m.dependencies.native_modules, vec!["fs"]);
        assert_eq!(m.indentation.max_indent_level, 4);
    }
}
