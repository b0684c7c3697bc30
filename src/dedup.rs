//! Duplicate-row removal over scalar columns.
//!
//! Two rows are duplicates when every scalar column matches; list-typed
//! columns are excluded from the comparison key. The exclusion is declared
//! explicitly by column name, with a dtype check as a backstop, instead of
//! relying on runtime value inspection. The first occurrence of each key is
//! kept and the relative order of kept rows is preserved, which is why this
//! builds its own keep-mask rather than going through `DataFrame::unique`.

use crate::error::Result;
use polars::prelude::*;
use std::collections::HashSet;
use tracing::{debug, info};

/// Columns declared list-typed, excluded from the duplicate key.
pub const LIST_COLUMNS: [&str; 1] = ["genre_list"];

/// Unit separator, keeps adjacent field values from gluing into a false match.
const KEY_SEPARATOR: char = '\u{1f}';

fn is_list_column(name: &str, dtype: &DataType) -> bool {
    LIST_COLUMNS.contains(&name) || matches!(dtype, DataType::List(_))
}

/// Remove duplicate rows, comparing only scalar columns.
///
/// Returns the filtered DataFrame and the number of rows removed.
pub fn drop_duplicate_rows(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let height = df.height();
    let key_columns: Vec<&Series> = df
        .get_columns()
        .iter()
        .map(|c| c.as_materialized_series())
        .filter(|s| !is_list_column(s.name().as_str(), s.dtype()))
        .collect();

    if key_columns.is_empty() || height == 0 {
        return Ok((df.clone(), 0));
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(height);
    let mut keep: Vec<bool> = Vec::with_capacity(height);

    for i in 0..height {
        let mut key = String::new();
        for series in &key_columns {
            let value = series.get(i)?;
            // Debug formatting keeps a null distinct from the string "null"
            key.push_str(&format!("{:?}", value));
            key.push(KEY_SEPARATOR);
        }
        keep.push(seen.insert(key));
    }

    let removed = keep.iter().filter(|&&k| !k).count();
    if removed == 0 {
        debug!("No duplicate rows found");
        return Ok((df.clone(), 0));
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let filtered = df.filter(&mask)?;
    info!("Removed {} duplicate rows", removed);
    Ok((filtered, removed))
}
