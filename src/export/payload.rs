// Author: kelexine (https://github.com/kelexine)
// export/payload.rs - Request body accepted by the remote metrics API

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::aggregate::Aggregate;
use crate::models::{DependencyResult, DirectoryMetric, FileMetric, IndentResult};
use crate::scan::ScanOutcome;

use super::json::{fmt_percent, write_json};

#[derive(Debug, Clone, Serialize)]
pub struct MetricsPayload {
    pub recorded_at: String,
    pub lines: usize,
    pub functions: usize,
    pub classes: usize,
    pub comments: usize,
    pub comment_percentage: String,
    pub dependencies: DependencyResult,
    pub indentation: IndentationPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndentationPayload {
    pub directory: String,
    pub files: Vec<IndentationFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndentationFile {
    pub filename: String,
    pub path: String,
    pub stats: IndentResult,
}

impl MetricsPayload {
    /// Build the payload from per-file metrics, their source paths and the
    /// directory fold. Files are listed in key order.
    pub fn new(
        root: &Path,
        files: &BTreeMap<String, FileMetric>,
        sources: &BTreeMap<String, PathBuf>,
        total: &DirectoryMetric,
    ) -> Self {
        let indentation_files = files
            .iter()
            .map(|(key, metric)| {
                let path = sources.get(key).cloned().unwrap_or_else(|| root.join(key));
                IndentationFile {
                    filename: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| key.clone()),
                    path: path.to_string_lossy().into_owned(),
                    stats: metric.indentation.clone(),
                }
            })
            .collect();

        Self {
            recorded_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            lines: total.total_lines,
            functions: total.functions,
            classes: total.classes,
            comments: total.comment_lines,
            comment_percentage: fmt_percent(total.comment_percentage),
            dependencies: total.dependencies.clone(),
            indentation: IndentationPayload {
                directory: root.to_string_lossy().into_owned(),
                files: indentation_files,
            },
        }
    }

    pub fn from_outcome(outcome: &ScanOutcome<FileMetric>) -> Self {
        match outcome {
            ScanOutcome::Directory(report) => {
                Self::new(&report.root, &report.files, &report.sources, &report.total)
            }
            ScanOutcome::File { path, result } => {
                let key = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let files = BTreeMap::from([(key.clone(), result.clone())]);
                let sources = BTreeMap::from([(key, path.clone())]);
                let total = FileMetric::aggregate(files.values());
                let root = path.parent().unwrap_or(Path::new(""));
                Self::new(root, &files, &sources, &total)
            }
            ScanOutcome::NoFiles { root } => Self::new(
                root,
                &BTreeMap::new(),
                &BTreeMap::new(),
                &DirectoryMetric::default(),
            ),
        }
    }
}

pub fn export_payload(outcome: &ScanOutcome<FileMetric>, path: &Path) -> Result<()> {
    write_json(&MetricsPayload::from_outcome(outcome), path)?;
    eprintln!("[SUCCESS] Exported metrics payload → {}", path.display());
    Ok(())
}
