// Author: kelexine (https://github.com/kelexine)
// lib.rs - Line-oriented metrics for JavaScript sources
//
// The core classifies each line of a `.js`/`.mjs` file (blank, comment,
// declaration, import, indentation), applies those classifiers file by file
// across a directory tree, and folds the per-file records into totals. It is
// pattern matching over lines, not a JavaScript parser.

pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod paths;
pub mod patterns;
pub mod scan;
pub mod walker;

pub use aggregate::Aggregate;
pub use analyzer::Analyzer;
pub use error::{AnalyzerError, Result};
pub use scan::{ScanConfig, ScanOutcome};
pub use walker::{DirectoryReport, KeyMode, WalkOptions, analyze_directory};
