// Author: kelexine (https://github.com/kelexine)
// export/mod.rs - Export dispatcher

pub mod html;
pub mod json;
pub mod payload;

use std::path::Path;

use anyhow::Result;

use crate::aggregate::Aggregate;
use crate::scan::ScanOutcome;
use json::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Html,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Write `outcome` to `output_path`, choosing the format from its extension.
pub fn export<T>(
    outcome: &ScanOutcome<T>,
    output_path: &str,
    title: &str,
    include_files: bool,
) -> Result<()>
where
    T: Aggregate + Summary,
    T::Total: Summary,
{
    let path = Path::new(output_path);

    match ExportFormat::from_path(path) {
        Some(ExportFormat::Json) => json::export_json(outcome, path, include_files),
        Some(ExportFormat::Html) => html::export_html(outcome, path, title),
        None => anyhow::bail!(
            "Unsupported export format '{}'. Use .json or .html",
            path.extension().and_then(|e| e.to_str()).unwrap_or("?")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("r.json")), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_path(Path::new("r.HTML")), Some(ExportFormat::Html));
        assert_eq!(ExportFormat::from_path(Path::new("r.htm")), Some(ExportFormat::Html));
        assert_eq!(ExportFormat::from_path(Path::new("r.csv")), None);
        assert_eq!(ExportFormat::from_path(Path::new("report")), None);
    }
}
