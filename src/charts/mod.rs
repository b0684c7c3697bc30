//! The six descriptive catalog charts.
//!
//! Each chart is an independent, read-only pass over the normalized table.
//! A chart is skipped, not failed, when its required columns are absent (or,
//! for the additions-by-year chart, when every value is null). Output is one
//! PNG per chart in the configured output directory.

pub mod data;
mod render;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::schema::has_column;
use data::{histogram, integer_counts, kde_curve, sort_by_count_desc, value_counts};
use plotters::style::RGBColor;
use polars::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

// Per-chart fill colors.
const TYPE_COLOR: RGBColor = RGBColor(102, 194, 165);
const COUNTRY_COLOR: RGBColor = RGBColor(66, 110, 180);
const YEAR_COLOR: RGBColor = RGBColor(255, 165, 0);
const RELEASE_COLOR: RGBColor = RGBColor(128, 0, 128);
const RATING_COLOR: RGBColor = RGBColor(205, 92, 92);
const DURATION_COLOR: RGBColor = RGBColor(46, 139, 87);

/// Sample count for the KDE overlay on the duration histogram.
const KDE_POINTS: usize = 200;

/// Which charts were written and which were skipped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartOutcome {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Renders the six catalog charts into the configured output directory.
pub struct ChartRenderer<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Render every enabled chart. Returns which were written or skipped.
    pub fn render_all(&self, df: &DataFrame) -> Result<ChartOutcome> {
        let mut outcome = ChartOutcome::default();

        info!("Rendering charts to {}", self.config.output_dir.display());

        self.record(&mut outcome, "type_distribution", self.type_distribution(df)?);
        self.record(&mut outcome, "top_countries", self.top_countries(df)?);
        self.record(&mut outcome, "additions_by_year", self.additions_by_year(df)?);
        self.record(
            &mut outcome,
            "release_year_distribution",
            self.release_year_distribution(df)?,
        );
        self.record(&mut outcome, "rating_distribution", self.rating_distribution(df)?);
        self.record(
            &mut outcome,
            "movie_duration_distribution",
            self.movie_duration_distribution(df)?,
        );

        Ok(outcome)
    }

    fn record(&self, outcome: &mut ChartOutcome, name: &str, path: Option<PathBuf>) {
        match path {
            Some(path) => {
                info!("Rendered {}", path.display());
                outcome.written.push(path.display().to_string());
            }
            None => {
                debug!("Skipped chart '{}' (required data absent)", name);
                outcome.skipped.push(name.to_string());
            }
        }
    }

    fn output_path(&self, file_name: &str) -> PathBuf {
        self.config.output_dir.join(file_name)
    }

    /// Bar chart of row counts grouped by `type`.
    fn type_distribution(&self, df: &DataFrame) -> Result<Option<PathBuf>> {
        if !has_column(df, "type") {
            return Ok(None);
        }
        let counts = value_counts(df.column("type")?.as_materialized_series())?;
        if counts.is_empty() {
            return Ok(None);
        }

        let (labels, values) = split_pairs(&counts);
        let path = self.output_path("type_distribution.png");
        render::draw_vertical_bars(
            &path,
            "Distribution of Movies vs TV Shows",
            "Type",
            "Count",
            &labels,
            &values,
            TYPE_COLOR,
        )?;
        Ok(Some(path))
    }

    /// Horizontal bar chart of the most frequent `country` values.
    fn top_countries(&self, df: &DataFrame) -> Result<Option<PathBuf>> {
        if !has_column(df, "country") {
            return Ok(None);
        }
        let mut counts = value_counts(df.column("country")?.as_materialized_series())?;
        if counts.is_empty() {
            return Ok(None);
        }
        sort_by_count_desc(&mut counts);
        counts.truncate(self.config.top_countries);

        let (labels, values) = split_pairs(&counts);
        let title = format!("Top {} Countries by Content Count", self.config.top_countries);
        let path = self.output_path("top_countries.png");
        render::draw_horizontal_bars(
            &path,
            &title,
            "Number of Titles",
            "Country",
            &labels,
            &values,
            COUNTRY_COLOR,
        )?;
        Ok(Some(path))
    }

    /// Bar chart of row counts grouped by `year_added`, ascending.
    ///
    /// Skipped when the column is absent or every value is null (the export
    /// carried no usable `date_added`).
    fn additions_by_year(&self, df: &DataFrame) -> Result<Option<PathBuf>> {
        if !has_column(df, "year_added") {
            return Ok(None);
        }
        let series = df.column("year_added")?.as_materialized_series().clone();
        if series.null_count() == series.len() {
            return Ok(None);
        }
        let counts = integer_counts(&series)?;

        let labels: Vec<String> = counts.iter().map(|(year, _)| year.to_string()).collect();
        let values: Vec<usize> = counts.iter().map(|(_, count)| *count).collect();
        let path = self.output_path("additions_by_year.png");
        render::draw_vertical_bars(
            &path,
            "Content Added by Year",
            "Year Added",
            "Number of Titles",
            &labels,
            &values,
            YEAR_COLOR,
        )?;
        Ok(Some(path))
    }

    /// Histogram over the per-year title counts of `release_year`.
    fn release_year_distribution(&self, df: &DataFrame) -> Result<Option<PathBuf>> {
        if !has_column(df, "release_year") {
            return Ok(None);
        }
        let counts = integer_counts(df.column("release_year")?.as_materialized_series())?;
        if counts.is_empty() {
            return Ok(None);
        }

        let values: Vec<f64> = counts.iter().map(|(_, count)| *count as f64).collect();
        let bins = histogram(&values, self.config.release_year_bins);
        let path = self.output_path("release_year_distribution.png");
        render::draw_histogram(
            &path,
            "Distribution of Release Years",
            "Release Year",
            "Number of Titles",
            &bins,
            None,
            RELEASE_COLOR,
        )?;
        Ok(Some(path))
    }

    /// Horizontal bar chart of `rating` counts, descending frequency.
    fn rating_distribution(&self, df: &DataFrame) -> Result<Option<PathBuf>> {
        if !has_column(df, "rating") {
            return Ok(None);
        }
        let mut counts = value_counts(df.column("rating")?.as_materialized_series())?;
        if counts.is_empty() {
            return Ok(None);
        }
        sort_by_count_desc(&mut counts);

        let (labels, values) = split_pairs(&counts);
        let path = self.output_path("rating_distribution.png");
        render::draw_horizontal_bars(
            &path,
            "Content Rating Distribution",
            "Count",
            "Rating",
            &labels,
            &values,
            RATING_COLOR,
        )?;
        Ok(Some(path))
    }

    /// Histogram of `duration_int` for rows whose `type` is "Movie", with a
    /// smoothed density overlay scaled into count space.
    fn movie_duration_distribution(&self, df: &DataFrame) -> Result<Option<PathBuf>> {
        if !has_column(df, "type") || !has_column(df, "duration_int") {
            return Ok(None);
        }

        let types = df.column("type")?.as_materialized_series().cast(&DataType::String)?;
        let durations = df
            .column("duration_int")?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let values: Vec<f64> = types
            .str()?
            .into_iter()
            .zip(durations.f64()?.into_iter())
            .filter_map(|(ty, dur)| match (ty, dur) {
                (Some("Movie"), Some(v)) if v.is_finite() => Some(v),
                _ => None,
            })
            .collect();

        if values.is_empty() {
            debug!("No movie durations available, skipping duration chart");
            return Ok(None);
        }

        let bins = histogram(&values, self.config.duration_bins);
        let bin_width = bins.first().map(|b| b.upper - b.lower).unwrap_or(1.0);
        let x_min = bins.first().map(|b| b.lower).unwrap_or(0.0);
        let x_max = bins.last().map(|b| b.upper).unwrap_or(1.0);

        // density -> expected count per bin, so the overlay shares the y-axis
        let scale = values.len() as f64 * bin_width;
        let overlay: Vec<(f64, f64)> = kde_curve(&values, x_min, x_max, KDE_POINTS)
            .into_iter()
            .map(|(x, d)| (x, d * scale))
            .collect();

        let path = self.output_path("movie_duration_distribution.png");
        render::draw_histogram(
            &path,
            "Movie Duration Distribution (in minutes)",
            "Duration (minutes)",
            "Count",
            &bins,
            Some(&overlay),
            DURATION_COLOR,
        )?;
        Ok(Some(path))
    }
}

fn split_pairs(counts: &[(String, usize)]) -> (Vec<String>, Vec<usize>) {
    let labels = counts.iter().map(|(label, _)| label.clone()).collect();
    let values = counts.iter().map(|(_, count)| *count).collect();
    (labels, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &std::path::Path) -> AnalysisConfig {
        AnalysisConfig::builder()
            .output_dir(dir)
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_all_with_full_frame() {
        let mut df = df!(
            "type" => &["Movie", "TV Show", "Movie", "Movie"],
            "country" => &["US", "India", "US", "Japan"],
            "rating" => &["PG", "R", "PG", "TV-MA"],
            "release_year" => &[2001i64, 2015, 2001, 1999],
            "year_added" => &[Some(2018i32), Some(2019), None, Some(2018)],
            "duration" => &["90 min", "2 Seasons", "120 min", "101 min"]
        )
        .unwrap();
        let mut actions = Vec::new();
        crate::normalize::durations::derive_duration_columns(&mut df, &mut actions).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let outcome = ChartRenderer::new(&config).render_all(&df).unwrap();

        assert_eq!(outcome.written.len(), 6);
        assert!(outcome.skipped.is_empty());
        assert!(dir.path().join("type_distribution.png").exists());
        assert!(dir.path().join("movie_duration_distribution.png").exists());
    }

    #[test]
    fn test_charts_skipped_without_columns() {
        let df = df!("title" => &["A", "B"]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let outcome = ChartRenderer::new(&config).render_all(&df).unwrap();

        assert!(outcome.written.is_empty());
        assert_eq!(outcome.skipped.len(), 6);
    }

    #[test]
    fn test_additions_chart_skipped_when_all_null() {
        let df = df!(
            "year_added" => &[None::<i32>, None, None]
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let outcome = ChartRenderer::new(&config).render_all(&df).unwrap();

        assert!(outcome.skipped.contains(&"additions_by_year".to_string()));
    }

    #[test]
    fn test_top_countries_truncated_and_sorted() {
        let countries: Vec<&str> = ["US"; 5]
            .into_iter()
            .chain(["India"; 4])
            .chain(["Japan"; 3])
            .chain(["France"; 2])
            .chain(["Peru"; 1])
            .collect();
        let df = df!("country" => &countries).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let config = AnalysisConfig::builder()
            .output_dir(dir.path())
            .top_countries(3)
            .build()
            .unwrap();
        let outcome = ChartRenderer::new(&config).render_all(&df).unwrap();

        assert!(outcome.written.iter().any(|p| p.contains("top_countries")));
    }
}
