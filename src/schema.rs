//! Schema detection for catalog exports.
//!
//! The expected column set is known up front but any subset may be absent in
//! a given export. Presence is detected once at load time; downstream stages
//! degrade per-column instead of failing.

use polars::prelude::*;
use serde::Serialize;

/// Columns a catalog export is expected to carry. None are mandatory.
pub const EXPECTED_COLUMNS: [&str; 9] = [
    "type",
    "country",
    "director",
    "cast",
    "rating",
    "duration",
    "date_added",
    "release_year",
    "genres",
];

/// The column set detected in a loaded catalog, in file order.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSchema {
    columns: Vec<String>,
}

impl CatalogSchema {
    /// Detect the schema of a loaded DataFrame.
    pub fn detect(df: &DataFrame) -> Self {
        Self {
            columns: df
                .get_column_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether a column is present.
    pub fn has(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Expected columns that are absent from this export.
    pub fn missing_expected(&self) -> Vec<&'static str> {
        EXPECTED_COLUMNS
            .iter()
            .copied()
            .filter(|name| !self.has(name))
            .collect()
    }
}

/// Whether a DataFrame currently carries a column with the given name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}
