// Author: kelexine (https://github.com/kelexine)
// models/mod.rs - Per-file and per-directory result records

use serde::Serialize;

use crate::display::fmt_num;

/// Label/value pairs used by the console printer.
pub trait Describe {
    fn describe(&self) -> Vec<(&'static str, String)>;
}

/// Non-blank line count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineResult {
    pub total_lines: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentResult {
    pub comment_lines: usize,
}

/// Comment share. `total_lines` here counts every physical line, blank ones included.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct PercentResult {
    pub total_lines: usize,
    pub comment_lines: usize,
    pub comment_percentage: f64,
}

impl PercentResult {
    pub fn new(total_lines: usize, comment_lines: usize) -> Self {
        Self {
            total_lines,
            comment_lines,
            comment_percentage: percentage(comment_lines, total_lines),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassFuncResult {
    pub functions: usize,
    pub classes: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodCountResult {
    pub public: usize,
    pub private: usize,
}

/// Output of the brace-depth function size scan for one file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct FunctionSizeResult {
    pub function_count: usize,
    pub total_function_lines: usize,
    pub average_function_size: f64,
}

impl FunctionSizeResult {
    pub fn new(function_count: usize, total_function_lines: usize) -> Self {
        let average_function_size = if function_count == 0 {
            0.0
        } else {
            total_function_lines as f64 / function_count as f64
        };
        Self {
            function_count,
            total_function_lines,
            average_function_size,
        }
    }
}

/// Directory view of function sizes: the mean of per-file averages, counting
/// only files where at least one function was found.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct FunctionSizeTotal {
    pub files_with_functions: usize,
    pub function_count: usize,
    pub average_function_size: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndentFreq {
    pub level: usize,
    pub count: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndentResult {
    pub max_indent_level: usize,
    pub average_indent_level: f64,
    /// Sorted by level.
    pub indent_distribution: Vec<IndentFreq>,
    pub uses_spaces: bool,
    pub uses_tabs: bool,
    pub mixed_indentation: bool,
    /// Lines that took part in the measurement.
    #[serde(skip_serializing)]
    pub measured_lines: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyResult {
    /// Number of unique external modules. Native modules are not counted.
    pub total_dependencies: usize,
    pub dependencies: Vec<String>,
    pub native_modules: Vec<String>,
}

impl DependencyResult {
    pub fn new(dependencies: Vec<String>, native_modules: Vec<String>) -> Self {
        Self {
            total_dependencies: dependencies.len(),
            dependencies,
            native_modules,
        }
    }
}

/// Everything measured for one source file.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct FileMetric {
    pub total_lines: usize,
    pub physical_lines: usize,
    pub comment_lines: usize,
    pub comment_percentage: f64,
    pub functions: usize,
    pub classes: usize,
    pub public_methods: usize,
    pub private_methods: usize,
    pub function_count: usize,
    pub average_function_size: f64,
    pub indentation: IndentResult,
    pub dependencies: DependencyResult,
}

/// Fold of every [`FileMetric`] in a traversal.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DirectoryMetric {
    pub files: usize,
    pub total_lines: usize,
    pub physical_lines: usize,
    pub comment_lines: usize,
    pub comment_percentage: f64,
    pub functions: usize,
    pub classes: usize,
    pub public_methods: usize,
    pub private_methods: usize,
    pub average_function_size: f64,
    pub indentation: IndentResult,
    pub dependencies: DependencyResult,
}

pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Console descriptions
// ─────────────────────────────────────────────────────────────────────────────

impl Describe for LineResult {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![("Total lines", fmt_num(self.total_lines))]
    }
}

impl Describe for CommentResult {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![("Total comments", fmt_num(self.comment_lines))]
    }
}

impl Describe for PercentResult {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total lines", fmt_num(self.total_lines)),
            ("Comment lines", fmt_num(self.comment_lines)),
            ("Comment percentage", format!("{:.2}%", self.comment_percentage)),
        ]
    }
}

impl Describe for ClassFuncResult {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Classes", fmt_num(self.classes)),
            ("Functions", fmt_num(self.functions)),
        ]
    }
}

impl Describe for MethodCountResult {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Public methods", fmt_num(self.public)),
            ("Private methods", fmt_num(self.private)),
        ]
    }
}

impl Describe for FunctionSizeResult {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Functions", fmt_num(self.function_count)),
            ("Average function size", format!("{:.2} lines", self.average_function_size)),
        ]
    }
}

impl Describe for FunctionSizeTotal {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Files with functions", fmt_num(self.files_with_functions)),
            ("Functions", fmt_num(self.function_count)),
            ("Average function size", format!("{:.2} lines", self.average_function_size)),
        ]
    }
}

impl Describe for IndentResult {
    fn describe(&self) -> Vec<(&'static str, String)> {
        let style = match (self.uses_spaces, self.uses_tabs) {
            (true, true) => "mixed",
            (true, false) => "spaces",
            (false, true) => "tabs",
            (false, false) => "none",
        };
        vec![
            ("Max indent level", fmt_num(self.max_indent_level)),
            ("Average indent level", format!("{:.2}", self.average_indent_level)),
            ("Indentation style", style.to_string()),
            (
                "Distribution",
                self.indent_distribution
                    .iter()
                    .map(|f| format!("{}:{}", f.level, f.count))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        ]
    }
}

impl Describe for DependencyResult {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("External dependencies", fmt_num(self.total_dependencies)),
            ("Dependencies", self.dependencies.join(", ")),
            ("Native modules", self.native_modules.join(", ")),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn describe_common(
    total_lines: usize,
    comment_lines: usize,
    comment_percentage: f64,
    classes: usize,
    functions: usize,
    public_methods: usize,
    private_methods: usize,
    average_function_size: f64,
) -> Vec<(&'static str, String)> {
    vec![
        ("Total lines", fmt_num(total_lines)),
        ("Comment lines", fmt_num(comment_lines)),
        ("Comment percentage", format!("{:.2}%", comment_percentage)),
        ("Classes", fmt_num(classes)),
        ("Functions", fmt_num(functions)),
        ("Public methods", fmt_num(public_methods)),
        ("Private methods", fmt_num(private_methods)),
        ("Average function size", format!("{:.2} lines", average_function_size)),
    ]
}

impl Describe for FileMetric {
    fn describe(&self) -> Vec<(&'static str, String)> {
        let mut rows = describe_common(
            self.total_lines,
            self.comment_lines,
            self.comment_percentage,
            self.classes,
            self.functions,
            self.public_methods,
            self.private_methods,
            self.average_function_size,
        );
        rows.extend(self.indentation.describe());
        rows.extend(self.dependencies.describe());
        rows
    }
}

impl Describe for DirectoryMetric {
    fn describe(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![("Files", fmt_num(self.files))];
        rows.extend(describe_common(
            self.total_lines,
            self.comment_lines,
            self.comment_percentage,
            self.classes,
            self.functions,
            self.public_methods,
            self.private_methods,
            self.average_function_size,
        ));
        rows.extend(self.indentation.describe());
        rows.extend(self.dependencies.describe());
        rows
    }
}
