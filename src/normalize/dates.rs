//! Parsing of the `date_added` column and its calendar derivatives.

use crate::error::Result;
use crate::schema::has_column;
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use tracing::debug;

/// Month-name/day/year format used by catalog exports, e.g. "January 5, 2018".
pub const DATE_ADDED_FORMAT: &str = "%B %d, %Y";

/// Days from 0001-01-01 (CE) to the Unix epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Parse a raw `date_added` value. Unparseable input yields `None`.
pub fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_ADDED_FORMAT).ok()
}

/// Overwrite `date_added` with a parsed Date column and append
/// `year_added`/`month_added`.
///
/// When the source column is absent, the derived columns are appended
/// all-null so the post-normalization schema stays fixed.
pub fn derive_date_columns(df: &mut DataFrame, actions: &mut Vec<String>) -> Result<()> {
    let height = df.height();

    if !has_column(df, "date_added") {
        df.with_column(Series::new("year_added".into(), vec![None::<i32>; height]))?;
        df.with_column(Series::new("month_added".into(), vec![None::<i32>; height]))?;
        actions.push("'date_added' absent; year_added/month_added set to null".to_string());
        debug!("'date_added' column absent, skipping date parsing");
        return Ok(());
    }

    let source = df.column("date_added")?.as_materialized_series().clone();
    let strings = source.cast(&DataType::String)?;
    let ca = strings.str()?;

    let mut days: Vec<Option<i32>> = Vec::with_capacity(height);
    let mut years: Vec<Option<i32>> = Vec::with_capacity(height);
    let mut months: Vec<Option<i32>> = Vec::with_capacity(height);
    let mut parsed = 0usize;

    for val in ca.into_iter() {
        match val.and_then(parse_date_added) {
            Some(date) => {
                days.push(Some(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE));
                years.push(Some(date.year()));
                months.push(Some(date.month() as i32));
                parsed += 1;
            }
            None => {
                days.push(None);
                years.push(None);
                months.push(None);
            }
        }
    }

    let dates = Series::new("date_added".into(), days).cast(&DataType::Date)?;
    df.with_column(dates)?;
    df.with_column(Series::new("year_added".into(), years))?;
    df.with_column(Series::new("month_added".into(), months))?;

    actions.push(format!(
        "Parsed 'date_added' ({}/{} values matched '{}')",
        parsed, height, DATE_ADDED_FORMAT
    ));
    debug!("Parsed {}/{} date_added values", parsed, height);
    Ok(())
}
