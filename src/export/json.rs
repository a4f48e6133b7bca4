// Author: kelexine (https://github.com/kelexine)
// export/json.rs - JSON report export logic

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};

use crate::aggregate::Aggregate;
use crate::models::{
    ClassFuncResult, CommentResult, DependencyResult, DirectoryMetric, FileMetric,
    FunctionSizeResult, FunctionSizeTotal, IndentResult, LineResult, MethodCountResult,
    PercentResult,
};
use crate::scan::ScanOutcome;

/// JSON shape of a result inside an exported report. Percentages are
/// rendered as `"12.34%"` and average sizes as `"5.67"`.
pub trait Summary {
    fn summary(&self) -> Value;
}

macro_rules! plain_summary {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Summary for $ty {
                fn summary(&self) -> Value {
                    serde_json::to_value(self).unwrap_or(Value::Null)
                }
            }
        )*
    };
}

plain_summary!(
    LineResult,
    CommentResult,
    ClassFuncResult,
    MethodCountResult,
    IndentResult,
    DependencyResult,
);

pub fn fmt_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn fmt_size(value: f64) -> String {
    format!("{:.2}", value)
}

impl Summary for PercentResult {
    fn summary(&self) -> Value {
        json!({
            "total_lines": self.total_lines,
            "comment_lines": self.comment_lines,
            "comment_percentage": fmt_percent(self.comment_percentage),
        })
    }
}

impl Summary for FunctionSizeResult {
    fn summary(&self) -> Value {
        json!({
            "function_count": self.function_count,
            "total_function_lines": self.total_function_lines,
            "average_function_size": fmt_size(self.average_function_size),
        })
    }
}

impl Summary for FunctionSizeTotal {
    fn summary(&self) -> Value {
        json!({
            "files_with_functions": self.files_with_functions,
            "function_count": self.function_count,
            "average_function_size": fmt_size(self.average_function_size),
        })
    }
}

impl Summary for FileMetric {
    fn summary(&self) -> Value {
        json!({
            "lines": self.total_lines,
            "comments": self.comment_lines,
            "comment_percentage": fmt_percent(self.comment_percentage),
            "classes": self.classes,
            "functions": self.functions,
            "public_methods": self.public_methods,
            "private_methods": self.private_methods,
            "average_function_size": fmt_size(self.average_function_size),
            "dependencies": self.dependencies.summary(),
            "indentation": self.indentation.summary(),
        })
    }
}

impl Summary for DirectoryMetric {
    fn summary(&self) -> Value {
        json!({
            "lines": self.total_lines,
            "comments": self.comment_lines,
            "comment_percentage": fmt_percent(self.comment_percentage),
            "classes": self.classes,
            "functions": self.functions,
            "public_methods": self.public_methods,
            "private_methods": self.private_methods,
            "average_function_size": fmt_size(self.average_function_size),
            "dependencies": self.dependencies.summary(),
            "indentation": self.indentation.summary(),
        })
    }
}

/// `{directory, summary}` plus a `files` map of per-file summaries when
/// `include_files` is set. A single-file outcome reports the file path under
/// `directory` and never has a `files` map.
pub fn report_value<T>(outcome: &ScanOutcome<T>, include_files: bool) -> Value
where
    T: Aggregate + Summary,
    T::Total: Summary,
{
    match outcome {
        ScanOutcome::File { path, result } => json!({
            "directory": path.to_string_lossy(),
            "summary": result.summary(),
        }),
        ScanOutcome::Directory(report) => {
            let mut obj = json!({
                "directory": report.root.to_string_lossy(),
                "summary": report.total.summary(),
            });
            if include_files {
                let files: Map<String, Value> = report
                    .files
                    .iter()
                    .map(|(name, result)| (name.clone(), result.summary()))
                    .collect();
                obj["files"] = Value::Object(files);
            }
            obj
        }
        ScanOutcome::NoFiles { root } => {
            let mut obj = json!({
                "directory": root.to_string_lossy(),
                "summary": T::Total::default().summary(),
            });
            if include_files {
                obj["files"] = json!({});
            }
            obj
        }
    }
}

pub fn export_json<T>(outcome: &ScanOutcome<T>, path: &Path, include_files: bool) -> Result<()>
where
    T: Aggregate + Summary,
    T::Total: Summary,
{
    write_json(&report_value(outcome, include_files), path)?;
    eprintln!("[SUCCESS] Exported JSON → {}", path.display());
    Ok(())
}

pub(crate) fn write_json(value: &impl serde::Serialize, path: &Path) -> Result<()> {
    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), value)
        .with_context(|| "Failed to serialize JSON")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::DirectoryReport;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    #[test]
    fn test_percent_summary_is_formatted() {
        let v = PercentResult::new(3, 1).summary();
        assert_eq!(v["comment_percentage"], "33.33%");
        assert_eq!(v["total_lines"], 3);
    }

    #[test]
    fn test_file_outcome_has_no_files_map() {
        let outcome = ScanOutcome::File {
            path: PathBuf::from("app.js"),
            result: LineResult { total_lines: 4 },
        };
        let v = report_value(&outcome, true);
        assert_eq!(v["directory"], "app.js");
        assert_eq!(v["summary"]["total_lines"], 4);
        assert!(v.get("files").is_none());
    }

    #[test]
    fn test_directory_summary_shape() {
        let metric = FileMetric {
            total_lines: 10,
            comment_lines: 2,
            comment_percentage: 20.0,
            average_function_size: 3.5,
            ..Default::default()
        };
        let mut files = BTreeMap::new();
        files.insert("a.js".to_string(), metric.clone());
        let total = FileMetric::aggregate(files.values());
        let outcome = ScanOutcome::Directory(DirectoryReport {
            root: PathBuf::from("/proj"),
            sources: BTreeMap::new(),
            files,
            total,
        });

        let v = report_value(&outcome, true);
        assert_eq!(v["directory"], "/proj");
        let summary = &v["summary"];
        assert_eq!(summary["lines"], 10);
        assert_eq!(summary["comments"], 2);
        assert_eq!(summary["average_function_size"], "3.50");
        assert!(summary["indentation"].get("maxIndentLevel").is_some());
        assert_eq!(v["files"]["a.js"]["lines"], 10);
    }
}
