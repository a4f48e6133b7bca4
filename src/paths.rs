// Author: kelexine (https://github.com/kelexine)
// paths.rs - Home expansion, target validation and the JavaScript extension filter

use std::path::{Path, PathBuf};

use crate::error::{AnalyzerError, Result};

/// Extensions (without the dot) treated as JavaScript sources.
pub const JS_EXTENSIONS: &[&str] = &["js", "mjs"];

/// What a command was pointed at, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

/// Expand a leading `~/` to the user's home directory. Anything else is
/// returned untouched.
pub fn expand_home(input: &str) -> Result<PathBuf> {
    match input.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or(AnalyzerError::HomeDirUnavailable)?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(input)),
    }
}

pub fn is_js_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| JS_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Resolve a directory argument. `"."` becomes the current working
/// directory; other inputs go through `~/` expansion. The directory must exist.
pub fn resolve_directory(input: &str) -> Result<PathBuf> {
    let path = if input == "." {
        std::env::current_dir().map_err(AnalyzerError::CurrentDir)?
    } else {
        expand_home(input)?
    };

    if !path.exists() {
        return Err(AnalyzerError::DirectoryNotFound(path));
    }
    if !path.is_dir() {
        return Err(AnalyzerError::NotADirectory(path));
    }
    Ok(path)
}

/// Resolve a single-file argument: expand `~/`, require an existing `.js`/`.mjs` file.
pub fn resolve_file(input: &str) -> Result<PathBuf> {
    let path = expand_home(input)?;
    if !is_js_file(&path) {
        return Err(AnalyzerError::NotJavaScript(path));
    }
    if !path.is_file() {
        return Err(AnalyzerError::FileNotFound(path));
    }
    Ok(path)
}

impl Target {
    /// Build a target from the mutually exclusive `file` / `directory` inputs.
    /// A file takes precedence when both are somehow present.
    pub fn resolve(file: Option<&str>, directory: Option<&str>) -> Result<Option<Self>> {
        if let Some(f) = file {
            return Ok(Some(Self::File(resolve_file(f)?)));
        }
        if let Some(d) = directory {
            return Ok(Some(Self::Directory(resolve_directory(d)?)));
        }
        Ok(None)
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::File(p) | Self::Directory(p) => p,
        }
    }
}
