// Author: kelexine (https://github.com/kelexine)
// scan.rs - Runs one analyzer against a resolved file or directory target

use std::path::PathBuf;

use tracing::{debug, info};

use crate::aggregate::Aggregate;
use crate::analyzer::Analyzer;
use crate::config::GlobalConfig;
use crate::error::Result;
use crate::paths::Target;
use crate::walker::{DirectoryReport, KeyMode, WalkOptions, analyze_directory};

/// Configuration for a scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub target: Target,
    pub walk: WalkOptions,
}

/// Command-line overrides layered on top of [`GlobalConfig`].
#[derive(Debug, Default, Clone)]
pub struct ScanOverrides {
    pub extra_ignore: Vec<String>,
    pub key_by_path: bool,
    pub no_parallel: bool,
}

impl ScanConfig {
    pub fn new(target: Target, global: &GlobalConfig, overrides: &ScanOverrides) -> Self {
        let mut extra_ignore = global.extra_ignore.clone().unwrap_or_default();
        extra_ignore.extend(overrides.extra_ignore.iter().cloned());

        let key_by_path = overrides.key_by_path || global.key_by_path.unwrap_or(false);
        let parallel = !overrides.no_parallel && global.parallel.unwrap_or(true);

        Self {
            target,
            walk: WalkOptions {
                extra_ignore,
                key_mode: if key_by_path {
                    KeyMode::RelativePath
                } else {
                    KeyMode::FileName
                },
                parallel,
            },
        }
    }
}

/// What a scan produced. An empty directory is its own outcome rather than
/// a fold of nothing.
#[derive(Debug, Clone)]
pub enum ScanOutcome<T: Aggregate> {
    File { path: PathBuf, result: T },
    Directory(DirectoryReport<T>),
    NoFiles { root: PathBuf },
}

/// Run the analyzer over the configured target.
pub fn run<A: Analyzer>(analyzer: &A, config: &ScanConfig) -> Result<ScanOutcome<A::Output>> {
    match &config.target {
        Target::File(path) => {
            debug!(analyzer = analyzer.name(), path = %path.display(), "analyzing single file");
            let result = analyzer.analyze_file(path)?;
            Ok(ScanOutcome::File {
                path: path.clone(),
                result,
            })
        }
        Target::Directory(root) => {
            let report = analyze_directory(root, analyzer, &config.walk)?;
            if report.is_empty() {
                info!(root = %root.display(), "no JavaScript files found");
                Ok(ScanOutcome::NoFiles { root: root.clone() })
            } else {
                Ok(ScanOutcome::Directory(report))
            }
        }
    }
}
