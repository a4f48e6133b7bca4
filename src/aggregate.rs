// Author: kelexine (https://github.com/kelexine)
// aggregate.rs - Folding per-file results into directory totals
//
// Counts are summed. Averages are simple means over the files that have a
// non-zero denominator, not weighted by file size. Every fold is commutative,
// so the order files were visited in does not matter.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use serde::Serialize;

use crate::models::{
    ClassFuncResult, CommentResult, DependencyResult, DirectoryMetric, FileMetric,
    FunctionSizeResult, FunctionSizeTotal, IndentFreq, IndentResult, LineResult,
    MethodCountResult, PercentResult, percentage,
};

/// Folds many per-file results into one directory total.
pub trait Aggregate: Sized {
    type Total: Default + Clone + Debug + Serialize;

    fn aggregate<'a, I>(items: I) -> Self::Total
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a;
}

fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

impl Aggregate for LineResult {
    type Total = LineResult;

    fn aggregate<'a, I>(items: I) -> LineResult
    where
        I: IntoIterator<Item = &'a Self>,
    {
        LineResult {
            total_lines: items.into_iter().map(|r| r.total_lines).sum(),
        }
    }
}

impl Aggregate for CommentResult {
    type Total = CommentResult;

    fn aggregate<'a, I>(items: I) -> CommentResult
    where
        I: IntoIterator<Item = &'a Self>,
    {
        CommentResult {
            comment_lines: items.into_iter().map(|r| r.comment_lines).sum(),
        }
    }
}

impl Aggregate for PercentResult {
    type Total = PercentResult;

    /// Sums both counts and recomputes the share from the sums.
    fn aggregate<'a, I>(items: I) -> PercentResult
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let (total, comments) = items
            .into_iter()
            .fold((0, 0), |(t, c), r| (t + r.total_lines, c + r.comment_lines));
        PercentResult::new(total, comments)
    }
}

impl Aggregate for ClassFuncResult {
    type Total = ClassFuncResult;

    fn aggregate<'a, I>(items: I) -> ClassFuncResult
    where
        I: IntoIterator<Item = &'a Self>,
    {
        items.into_iter().fold(ClassFuncResult::default(), |acc, r| ClassFuncResult {
            functions: acc.functions + r.functions,
            classes: acc.classes + r.classes,
        })
    }
}

impl Aggregate for MethodCountResult {
    type Total = MethodCountResult;

    fn aggregate<'a, I>(items: I) -> MethodCountResult
    where
        I: IntoIterator<Item = &'a Self>,
    {
        items.into_iter().fold(MethodCountResult::default(), |acc, r| MethodCountResult {
            public: acc.public + r.public,
            private: acc.private + r.private,
        })
    }
}

impl Aggregate for FunctionSizeResult {
    type Total = FunctionSizeTotal;

    fn aggregate<'a, I>(items: I) -> FunctionSizeTotal
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut total = FunctionSizeTotal::default();
        let mut averages = Vec::new();
        for r in items {
            total.function_count += r.function_count;
            if r.average_function_size > 0.0 {
                averages.push(r.average_function_size);
            }
        }
        total.files_with_functions = averages.len();
        total.average_function_size = mean(averages);
        total
    }
}

impl Aggregate for IndentResult {
    type Total = IndentResult;

    /// Max of maxima, mean of per-file averages over files with measured
    /// lines, merged distribution, OR of the style flags.
    fn aggregate<'a, I>(items: I) -> IndentResult
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut out = IndentResult::default();
        let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
        let mut averages = Vec::new();

        for r in items {
            out.max_indent_level = out.max_indent_level.max(r.max_indent_level);
            out.uses_spaces |= r.uses_spaces;
            out.uses_tabs |= r.uses_tabs;
            out.measured_lines += r.measured_lines;
            if r.measured_lines > 0 {
                averages.push(r.average_indent_level);
            }
            for freq in &r.indent_distribution {
                *distribution.entry(freq.level).or_default() += freq.count;
            }
        }

        out.average_indent_level = mean(averages);
        out.mixed_indentation = out.uses_spaces && out.uses_tabs;
        out.indent_distribution = distribution
            .into_iter()
            .map(|(level, count)| IndentFreq { level, count })
            .collect();
        out
    }
}

impl Aggregate for DependencyResult {
    type Total = DependencyResult;

    fn aggregate<'a, I>(items: I) -> DependencyResult
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut external = BTreeSet::new();
        let mut native = BTreeSet::new();
        for r in items {
            external.extend(r.dependencies.iter().cloned());
            native.extend(r.native_modules.iter().cloned());
        }
        DependencyResult::new(external.into_iter().collect(), native.into_iter().collect())
    }
}

impl Aggregate for FileMetric {
    type Total = DirectoryMetric;

    fn aggregate<'a, I>(items: I) -> DirectoryMetric
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let files: Vec<&FileMetric> = items.into_iter().collect();
        let mut dir = DirectoryMetric {
            files: files.len(),
            ..Default::default()
        };

        for f in &files {
            dir.total_lines += f.total_lines;
            dir.physical_lines += f.physical_lines;
            dir.comment_lines += f.comment_lines;
            dir.functions += f.functions;
            dir.classes += f.classes;
            dir.public_methods += f.public_methods;
            dir.private_methods += f.private_methods;
        }

        dir.comment_percentage = percentage(dir.comment_lines, dir.total_lines);
        dir.average_function_size = mean(
            files
                .iter()
                .map(|f| f.average_function_size)
                .filter(|avg| *avg > 0.0),
        );
        dir.indentation = IndentResult::aggregate(files.iter().map(|f| &f.indentation));
        dir.dependencies = DependencyResult::aggregate(files.iter().map(|f| &f.dependencies));
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_recomputed_from_sums() {
        let a = PercentResult::new(10, 5);
        let b = PercentResult::new(30, 5);
        let total = PercentResult::aggregate([&a, &b]);
        assert_eq!(total.total_lines, 40);
        assert_eq!(total.comment_lines, 10);
        assert!((total.comment_percentage - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_function_size_mean_skips_empty_files() {
        let files = [
            FunctionSizeResult::new(2, 4),
            FunctionSizeResult::new(0, 0),
            FunctionSizeResult::new(1, 6),
        ];
        let total = FunctionSizeResult::aggregate(&files);
        assert_eq!(total.files_with_functions, 2);
        assert_eq!(total.function_count, 3);
        assert!((total.average_function_size - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dependencies_union() {
        let a = DependencyResult::new(vec!["react".into()], vec!["fs".into()]);
        let b = DependencyResult::new(vec!["axios".into(), "react".into()], vec![]);
        let total = DependencyResult::aggregate([&a, &b]);
        assert_eq!(total.dependencies, vec!["axios", "react"]);
        assert_eq!(total.native_modules, vec!["fs"]);
        assert_eq!(total.total_dependencies, 2);
    }

    #[test]
    fn test_indentation_fold() {
        let spaces = IndentResult {
            max_indent_level: 4,
            average_indent_level: 2.0,
            indent_distribution: vec![IndentFreq { level: 0, count: 1 }, IndentFreq { level: 4, count: 1 }],
            uses_spaces: true,
            measured_lines: 2,
            ..Default::default()
        };
        let tabs = IndentResult {
            max_indent_level: 8,
            average_indent_level: 4.0,
            indent_distribution: vec![IndentFreq { level: 0, count: 1 }, IndentFreq { level: 8, count: 1 }],
            uses_tabs: true,
            measured_lines: 2,
            ..Default::default()
        };
        let empty = IndentResult::default();
        let total = IndentResult::aggregate([&spaces, &tabs, &empty]);
        assert_eq!(total.max_indent_level, 8);
        assert!((total.average_indent_level - 3.0).abs() < f64::EPSILON);
        assert!(total.mixed_indentation);
        assert_eq!(total.indent_distribution[0], IndentFreq { level: 0, count: 2 });
        assert_eq!(total.indent_distribution.len(), 3);
    }

    #[test]
    fn test_directory_percentage_uses_non_blank_lines() {
        use crate::analyzer::Analyzer;

        let analyzer = crate::analyzer::FullAnalyzer::default();
        let a = analyzer.analyze_source("// c\n\ncode();\n");
        let b = analyzer.analyze_source("run();\n\n\nstop();\n");
        assert!((a.comment_percentage - 50.0).abs() < f64::EPSILON);

        let total = FileMetric::aggregate([&a, &b]);
        assert_eq!(total.total_lines, 4);
        assert_eq!(total.physical_lines, 7);
        assert_eq!(total.comment_lines, 1);
        let expected = 100.0 * total.comment_lines as f64 / total.total_lines as f64;
        assert!((total.comment_percentage - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_fold_is_zero() {
        let none: [&FileMetric; 0] = [];
        assert_eq!(FileMetric::aggregate(none), DirectoryMetric::default());
    }
}
