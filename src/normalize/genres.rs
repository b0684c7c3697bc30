//! Splitting of the delimited `genres` field into a list column.

use crate::error::Result;
use crate::schema::has_column;
use polars::prelude::*;
use tracing::debug;

/// Name of the derived list column.
pub const GENRE_LIST: &str = "genre_list";

/// Split a raw genres field on commas, trimming each piece.
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',').map(|g| g.trim().to_string()).collect()
}

/// Append a `genre_list` List(String) column derived from `genres`.
///
/// A null source value becomes an empty list rather than a null entry, and
/// an absent source column yields a column of empty lists.
pub fn derive_genre_list(df: &mut DataFrame, actions: &mut Vec<String>) -> Result<()> {
    let height = df.height();

    if !has_column(df, "genres") {
        let lists: ListChunked = (0..height)
            .map(|_| Some(Series::new(PlSmallStr::EMPTY, Vec::<String>::new())))
            .collect();
        df.with_column(lists.with_name(GENRE_LIST.into()).into_series())?;
        actions.push("'genres' absent; genre_list set to empty lists".to_string());
        debug!("'genres' column absent, genre_list left empty");
        return Ok(());
    }

    let source = df.column("genres")?.as_materialized_series().clone();
    let strings = source.cast(&DataType::String)?;
    let ca = strings.str()?;

    let lists: ListChunked = ca
        .into_iter()
        .map(|val| {
            let pieces = val.map(split_genres).unwrap_or_default();
            Some(Series::new(PlSmallStr::EMPTY, pieces))
        })
        .collect();

    df.with_column(lists.with_name(GENRE_LIST.into()).into_series())?;
    actions.push(format!("Split 'genres' into '{}' lists", GENRE_LIST));
    Ok(())
}
