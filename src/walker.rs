// Author: kelexine (https://github.com/kelexine)
// walker.rs - Directory traversal, per-file dispatch and result folding

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::aggregate::Aggregate;
use crate::analyzer::Analyzer;
use crate::error::{AnalyzerError, Result};
use crate::paths::is_js_file;

/// Names every walk skips.
pub const STANDARD_IGNORE: &[&str] = &[".git", "node_modules"];

/// Wider list used by the function size walk.
pub const BROAD_IGNORE: &[&str] = &["node_modules", ".git", "dist", "build", "coverage", "vendor"];

/// Parallel analysis only pays off past this many files.
const PARALLEL_THRESHOLD: usize = 50;

/// How per-file results are keyed in a [`DirectoryReport`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Bare file name. Files sharing a name in different subdirectories
    /// collide and the one visited last wins.
    #[default]
    FileName,
    /// Path relative to the walk root, `/`-separated.
    RelativePath,
}

#[derive(Debug, Default, Clone)]
pub struct WalkOptions {
    /// Names skipped in addition to the analyzer's own ignore list.
    pub extra_ignore: Vec<String>,
    pub key_mode: KeyMode,
    pub parallel: bool,
}

impl WalkOptions {
    fn is_ignored(&self, name: &str, builtin: &[&str]) -> bool {
        builtin.contains(&name) || self.extra_ignore.iter().any(|n| n == name)
    }
}

/// Per-file results of one walk plus their fold.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct DirectoryReport<T: Aggregate> {
    pub root: PathBuf,
    pub files: BTreeMap<String, T>,
    /// Path of the file each key was last taken from.
    pub sources: BTreeMap<String, PathBuf>,
    pub total: T::Total,
}

impl<T: Aggregate> DirectoryReport<T> {
    /// True when the walk found no matching source files at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// List every `.js`/`.mjs` file under `root` in depth-first pre-order.
///
/// Ignore names are matched against the bare entry name before the
/// extension filter, so an ignored directory is never entered. The root
/// itself is checked too.
pub fn collect_source_files(
    root: &Path,
    ignore: &[&str],
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| keep_entry(e, ignore, options));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| AnalyzerError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if is_regular_file(&entry) && is_js_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

// Symlinked files are read through; symlinked directories are not entered.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn keep_entry(entry: &DirEntry, ignore: &[&str], options: &WalkOptions) -> bool {
    let name = entry.file_name().to_string_lossy();
    if options.is_ignored(&name, ignore) {
        debug!(path = %entry.path().display(), "skipping ignored entry");
        return false;
    }
    true
}

fn result_key(root: &Path, path: &Path, mode: KeyMode) -> String {
    match mode {
        KeyMode::FileName => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        KeyMode::RelativePath => {
            let rel = path.strip_prefix(root).unwrap_or(path);
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        }
    }
}

/// Walk `root`, run `analyzer` on every matching file and fold the results.
///
/// The first unreadable file or traversal error aborts the whole walk.
pub fn analyze_directory<A: Analyzer>(
    root: &Path,
    analyzer: &A,
    options: &WalkOptions,
) -> Result<DirectoryReport<A::Output>> {
    let paths = collect_source_files(root, analyzer.ignore_list(), options)?;
    debug!(
        analyzer = analyzer.name(),
        root = %root.display(),
        files = paths.len(),
        "listed source files"
    );

    let analyze = |path: &PathBuf| -> Result<(String, PathBuf, A::Output)> {
        debug!(path = %path.display(), "analyzing");
        let output = analyzer.analyze_file(path)?;
        Ok((result_key(root, path, options.key_mode), path.clone(), output))
    };

    let results: Vec<(String, PathBuf, A::Output)> =
        if options.parallel && paths.len() > PARALLEL_THRESHOLD {
            paths.par_iter().map(analyze).collect::<Result<_>>()?
        } else {
            paths.iter().map(analyze).collect::<Result<_>>()?
        };

    // Walk order is preserved by both branches, so colliding keys resolve
    // the same way either way.
    let mut files = BTreeMap::new();
    let mut sources = BTreeMap::new();
    for (key, path, output) in results {
        sources.insert(key.clone(), path);
        files.insert(key, output);
    }

    let total = A::Output::aggregate(files.values());
    info!(
        analyzer = analyzer.name(),
        root = %root.display(),
        files = files.len(),
        "directory scan complete"
    );

    Ok(DirectoryReport {
        root: root.to_path_buf(),
        files,
        sources,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{FullAnalyzer, FunctionSizeScanner, LineCounter};
    use crate::models::{DirectoryMetric, LineResult};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_node_modules_contributes_nothing() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::write(
            dir.path().join("node_modules/pkg/index.js"),
            "// vendored\nfunction big() {\n  return 1;\n}\n",
        )
        .unwrap();
        fs::write(dir.path().join("app.js"), "run();\n").unwrap();

        let report = analyze_directory(dir.path(), &FullAnalyzer::default(), &WalkOptions::default())
            .unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.total.total_lines, 1);
        assert_eq!(report.total.comment_lines, 0);
        assert_eq!(report.total.functions, 0);
    }

    #[test]
    fn test_extension_filter() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.js"), "a();\n").unwrap();
        fs::write(dir.path().join("b.mjs"), "b();\n").unwrap();
        fs::write(dir.path().join("c.ts"), "c();\n").unwrap();
        fs::write(dir.path().join("d.json"), "{}\n").unwrap();

        let files = collect_source_files(dir.path(), STANDARD_IGNORE, &WalkOptions::default())
            .unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_ignore_matches_bare_name_only() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/build")).unwrap();
        fs::write(dir.path().join("src/build/out.js"), "x();\n").unwrap();
        fs::write(dir.path().join("src/main.js"), "y();\n").unwrap();

        let standard = collect_source_files(dir.path(), STANDARD_IGNORE, &WalkOptions::default())
            .unwrap();
        assert_eq!(standard.len(), 2);

        let broad = collect_source_files(dir.path(), BROAD_IGNORE, &WalkOptions::default())
            .unwrap();
        assert_eq!(broad.len(), 1);
    }

    #[test]
    fn test_extra_ignore_names() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("fixtures")).unwrap();
        fs::write(dir.path().join("fixtures/f.js"), "x();\n").unwrap();
        fs::write(dir.path().join("skip.js"), "x();\n").unwrap();
        fs::write(dir.path().join("keep.js"), "x();\n").unwrap();

        let options = WalkOptions {
            extra_ignore: vec!["fixtures".into(), "skip.js".into()],
            ..Default::default()
        };
        let report = analyze_directory(dir.path(), &LineCounter, &options).unwrap();
        assert_eq!(report.files.keys().collect::<Vec<_>>(), vec!["keep.js"]);
    }

    #[test]
    fn test_ignored_root_is_not_walked() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("node_modules");
        fs::create_dir_all(root.join("pkg")).unwrap();
        fs::write(root.join("pkg/index.js"), "x();\n").unwrap();

        let report = analyze_directory(&root, &LineCounter, &WalkOptions::default()).unwrap();
        assert!(report.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_analyzed() {
        let dir = tempdir().unwrap();
        let outside = tempdir().unwrap();
        fs::write(outside.path().join("real.js"), "a();\nb();\n").unwrap();
        std::os::unix::fs::symlink(outside.path().join("real.js"), dir.path().join("link.js"))
            .unwrap();

        let report = analyze_directory(dir.path(), &LineCounter, &WalkOptions::default()).unwrap();
        assert_eq!(report.files.keys().collect::<Vec<_>>(), vec!["link.js"]);
        assert_eq!(report.total.total_lines, 2);
    }

    #[test]
    fn test_basename_collision_last_visited_wins() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("a/index.js"), "one();\n").unwrap();
        fs::write(dir.path().join("b/index.js"), "one();\ntwo();\n").unwrap();

        let report = analyze_directory(dir.path(), &LineCounter, &WalkOptions::default()).unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files["index.js"], LineResult { total_lines: 2 });
        assert_eq!(report.sources["index.js"], dir.path().join("b/index.js"));
        assert_eq!(report.total.total_lines, 2);
    }

    #[test]
    fn test_relative_path_keys_avoid_collision() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("a/index.js"), "one();\n").unwrap();
        fs::write(dir.path().join("b/index.js"), "one();\ntwo();\n").unwrap();

        let options = WalkOptions {
            key_mode: KeyMode::RelativePath,
            ..Default::default()
        };
        let report = analyze_directory(dir.path(), &LineCounter, &options).unwrap();
        assert_eq!(
            report.files.keys().collect::<Vec<_>>(),
            vec!["a/index.js", "b/index.js"]
        );
        assert_eq!(report.total.total_lines, 3);
    }

    #[test]
    fn test_empty_directory_is_empty_report() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "# hi\n").unwrap();

        let report = analyze_directory(dir.path(), &FullAnalyzer::default(), &WalkOptions::default())
            .unwrap();
        assert!(report.is_empty());
        assert_eq!(report.total, DirectoryMetric::default());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = tempdir().unwrap();
        for i in 0..60 {
            fs::write(
                dir.path().join(format!("f{i:02}.js")),
                format!("// file {i}\nfunction f{i}() {{\n  return {i};\n}}\n"),
            )
            .unwrap();
        }

        let sequential = analyze_directory(dir.path(), &FullAnalyzer::default(), &WalkOptions::default())
            .unwrap();
        let parallel = analyze_directory(
            dir.path(),
            &FullAnalyzer::default(),
            &WalkOptions {
                parallel: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(sequential.files, parallel.files);
        assert_eq!(sequential.total, parallel.total);
        assert_eq!(parallel.total.files, 60);
    }

    #[test]
    fn test_function_size_walk_skips_dist() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("dist")).unwrap();
        fs::write(dir.path().join("dist/bundle.js"), "function a() {\n}\n").unwrap();
        fs::write(dir.path().join("main.js"), "let x = 1;\n").unwrap();

        let report =
            analyze_directory(dir.path(), &FunctionSizeScanner, &WalkOptions::default()).unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.total.function_count, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_aborts_walk() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("locked.js");
        fs::write(&path, "x();\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits; nothing to assert there.
        if fs::read(&path).is_ok() {
            return;
        }
        let err = analyze_directory(dir.path(), &LineCounter, &WalkOptions::default()).unwrap_err();
        assert!(matches!(err, AnalyzerError::FileRead { .. }));
    }
}
