//! Column normalization for catalog exports.
//!
//! This module derives a fixed set of columns from the raw export:
//! - `date_added` parsed to a Date column, with `year_added`/`month_added`
//! - categorical gaps (`country`, `director`, `cast`, `rating`, `duration`)
//!   filled with `"Unknown"`
//! - `duration` split into `duration_int` / `duration_type`
//! - `genres` split into a `genre_list` list column
//!
//! Every derivation is guarded by presence of its source column, so a partial
//! export degrades to all-null derived columns instead of failing. Malformed
//! individual values map to per-row nulls, never a fatal error.

pub mod dates;
pub mod durations;
pub mod genres;

pub use dates::{parse_date_added, DATE_ADDED_FORMAT};
pub use durations::split_duration_label;
pub use genres::split_genres;

use crate::error::Result;
use crate::schema::has_column;
use polars::prelude::*;
use tracing::{debug, info};

/// Placeholder written into missing categorical values.
pub const UNKNOWN: &str = "Unknown";

/// Categorical columns whose nulls are replaced with [`UNKNOWN`].
pub const FILLED_COLUMNS: [&str; 5] = ["country", "director", "cast", "rating", "duration"];

/// Applies the column derivation rules in place.
pub struct Normalizer;

impl Normalizer {
    /// Normalize a catalog DataFrame, returning a log of actions taken.
    pub fn normalize(df: &mut DataFrame) -> Result<Vec<String>> {
        let mut actions = Vec::new();

        info!("Normalizing catalog columns...");

        dates::derive_date_columns(df, &mut actions)?;
        Self::fill_categorical_gaps(df, &mut actions)?;
        durations::derive_duration_columns(df, &mut actions)?;
        genres::derive_genre_list(df, &mut actions)?;

        debug!("Normalization finished: {} actions", actions.len());
        Ok(actions)
    }

    /// Replace nulls in the categorical columns with the `"Unknown"` marker.
    ///
    /// Non-string source columns are cast to String first, matching the
    /// downstream expectation that these columns hold display text.
    fn fill_categorical_gaps(df: &mut DataFrame, actions: &mut Vec<String>) -> Result<()> {
        for name in FILLED_COLUMNS {
            if !has_column(df, name) {
                continue;
            }
            let series = df.column(name)?.as_materialized_series().clone();
            let null_count = series.null_count();
            let filled = fill_string_nulls(&series, UNKNOWN)?;
            df.with_column(filled)?;
            if null_count > 0 {
                actions.push(format!(
                    "Filled {} missing values in '{}' with '{}'",
                    null_count, name, UNKNOWN
                ));
                debug!("Filled {} nulls in '{}'", null_count, name);
            }
        }
        Ok(())
    }
}

/// Fill null values in a column with a fixed string, casting to String dtype.
fn fill_string_nulls(series: &Series, fill_value: &str) -> Result<Series> {
    let strings = series.cast(&DataType::String)?;
    let ca = strings.str()?;
    let filled: StringChunked = ca
        .into_iter()
        .map(|v| Some(v.unwrap_or(fill_value)))
        .collect();
    Ok(filled.with_name(series.name().clone()).into_series())
}
