// Author: kelexine (https://github.com/kelexine)
// error.rs - Error types for the analysis core

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the scanning core.
///
/// Every variant is fatal for the invocation that produced it: a directory
/// walk that hits one of these aborts without a partial report.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// A source file could not be opened or read.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("file does not exist: {0}")]
    FileNotFound(PathBuf),

    /// Only `.js` and `.mjs` files are accepted.
    #[error("only JavaScript files are accepted: {0}")]
    NotJavaScript(PathBuf),

    #[error("directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("cannot expand '~': home directory is unavailable")]
    HomeDirUnavailable,

    #[error("cannot resolve current directory: {0}")]
    CurrentDir(std::io::Error),

    /// Traversal failed part-way through a directory.
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
