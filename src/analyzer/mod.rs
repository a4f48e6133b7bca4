// Author: kelexine (https://github.com/kelexine)
// analyzer/mod.rs - Single-file analyzer trait and shared source loading

pub mod dependencies;
pub mod full;
pub mod indentation;
pub mod lines;
pub mod structure;

pub use dependencies::{DependencyScanner, ModuleClass, classify_module};
pub use full::FullAnalyzer;
pub use indentation::{IndentationAnalyzer, measure_indent};
pub use lines::{CommentCounter, CommentPercentAnalyzer, LineClassifier, LineCounter, LineRecord};
pub use structure::{DeclarationCounter, FunctionSizeScanner, MethodCounter, ScanState};

use std::path::Path;

use crate::aggregate::Aggregate;
use crate::error::{AnalyzerError, Result};
use crate::walker::STANDARD_IGNORE;

/// A per-file producer. The directory walker applies any implementation to
/// each matching file and folds the outputs with [`Aggregate`].
pub trait Analyzer: Sync {
    type Output: Aggregate + Send;

    /// Short identifier used in logs and report titles.
    fn name(&self) -> &'static str;

    /// Directory names this analyzer never descends into.
    fn ignore_list(&self) -> &'static [&'static str] {
        STANDARD_IGNORE
    }

    fn analyze_source(&self, source: &str) -> Self::Output;

    fn analyze_file(&self, path: &Path) -> Result<Self::Output> {
        let source = read_source(path)?;
        Ok(self.analyze_source(&source))
    }
}

/// Read a source file. Invalid UTF-8 is replaced rather than rejected; only
/// an unreadable file is an error.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| AnalyzerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
