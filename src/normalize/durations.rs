//! Splitting of the `duration` label into numeric and unit parts.
//!
//! Catalog durations look like "90 min" or "2 Seasons". The leading digit run
//! becomes `duration_int` (Float64) and the first alphabetic run becomes
//! `duration_type`. A filled placeholder like "Unknown" yields null for both.

use crate::error::Result;
use crate::normalize::UNKNOWN;
use crate::schema::has_column;
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;
use tracing::debug;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit regex"));
static ALPHA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]+").expect("valid alpha regex"));

/// Split one duration label into its numeric and unit parts.
pub fn split_duration_label(label: &str) -> (Option<f64>, Option<String>) {
    let number = DIGIT_RUN
        .find(label)
        .and_then(|m| m.as_str().parse::<f64>().ok());
    let unit = ALPHA_RUN.find(label).map(|m| m.as_str().to_string());
    (number, unit)
}

/// Append `duration_int` and `duration_type` derived from `duration`.
pub fn derive_duration_columns(df: &mut DataFrame, actions: &mut Vec<String>) -> Result<()> {
    let height = df.height();

    if !has_column(df, "duration") {
        df.with_column(Series::new("duration_int".into(), vec![None::<f64>; height]))?;
        df.with_column(Series::new("duration_type".into(), vec![None::<String>; height]))?;
        actions.push("'duration' absent; duration_int/duration_type set to null".to_string());
        debug!("'duration' column absent, skipping duration split");
        return Ok(());
    }

    let source = df.column("duration")?.as_materialized_series().clone();
    let strings = source.cast(&DataType::String)?;
    let ca = strings.str()?;

    let mut numbers: Vec<Option<f64>> = Vec::with_capacity(height);
    let mut units: Vec<Option<String>> = Vec::with_capacity(height);

    for val in ca.into_iter() {
        match val {
            // the filled placeholder carries no duration information
            Some(label) if label != UNKNOWN => {
                let (number, unit) = split_duration_label(label);
                numbers.push(number);
                units.push(unit);
            }
            _ => {
                numbers.push(None);
                units.push(None);
            }
        }
    }

    let split = numbers.iter().filter(|v| v.is_some()).count();
    df.with_column(Series::new("duration_int".into(), numbers))?;
    df.with_column(Series::new("duration_type".into(), units))?;

    actions.push(format!(
        "Split 'duration' into numeric/unit parts ({}/{} numeric)",
        split, height
    ));
    Ok(())
}
