//! Catalog loading with multiple fallback strategies.
//!
//! A missing or unparseable file is fatal; the tool is a one-shot analysis
//! run with no retry value. Compressed inputs (gzip/zstd) are handled
//! transparently by polars.

use crate::error::{AnalysisError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load a catalog CSV with multiple fallback strategies.
pub fn load_catalog(path: &Path) -> Result<DataFrame> {
    // Strategy 1: Standard loading with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard loading failed: {}", e);
        }
    }

    // Strategy 2: Without quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Loading without quotes failed: {}", e);
        }
    }

    // Strategy 3: Pre-clean content and parse from memory
    let content = std::fs::read_to_string(path)
        .map_err(|e| AnalysisError::LoadFailed(format!("{}: {}", path.display(), e)))?;
    let cleaned = clean_csv_content(&content);
    let cursor = std::io::Cursor::new(cleaned);

    CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .into_reader_with_file_handle(cursor)
        .finish()
        .map_err(|e| AnalysisError::LoadFailed(format!("{}: {}", path.display(), e)))
}

/// Collapse doubled quotes and drop blank lines before a last-resort parse.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_basic_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "type,title,release_year").unwrap();
        writeln!(f, "Movie,Alpha,2001").unwrap();
        writeln!(f, "TV Show,Beta,2015").unwrap();

        let df = load_catalog(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_catalog(Path::new("/nonexistent/catalog.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_clean_csv_content() {
        let raw = "a,b\n\"\"quoted\"\",2\n\n1,3\n";
        let cleaned = clean_csv_content(raw);
        assert!(!cleaned.contains("\"\""));
        assert_eq!(cleaned.lines().count(), 3);
    }
}
