//! Integration tests for the catalog analysis pipeline.
//!
//! These tests verify end-to-end behavior over small CSV fixtures.

use catalog_eda::{AnalysisConfig, AnalysisPipeline, Normalizer};
use polars::prelude::*;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(filename: &str) -> DataFrame {
    catalog_eda::load_catalog(&fixtures_path().join(filename)).expect("Failed to load fixture")
}

fn test_config(dir: &std::path::Path) -> AnalysisConfig {
    AnalysisConfig::builder().output_dir(dir).build().unwrap()
}

// ============================================================================
// Full Pipeline Tests
// ============================================================================

#[test]
fn test_full_pipeline_small_catalog() {
    let df = load_fixture("catalog_small.csv");
    assert_eq!(df.height(), 10);

    let dir = tempfile::tempdir().unwrap();
    let summary = AnalysisPipeline::new(test_config(dir.path()))
        .unwrap()
        .run(df)
        .unwrap();

    // the s1 and s3 rows each appear twice, identical in every scalar column
    assert_eq!(summary.rows_before, 10);
    assert_eq!(summary.duplicates_removed, 2);
    assert_eq!(summary.rows_after, 8);

    // all six charts render for this fixture
    assert_eq!(summary.charts_written.len(), 6);
    assert!(summary.charts_skipped.is_empty());
    for name in [
        "type_distribution.png",
        "top_countries.png",
        "additions_by_year.png",
        "release_year_distribution.png",
        "rating_distribution.png",
        "movie_duration_distribution.png",
    ] {
        assert!(dir.path().join(name).exists(), "missing chart {}", name);
    }

    assert!(!summary.normalization_actions.is_empty());
    assert!(summary.columns.contains(&"genres".to_string()));
}

#[test]
fn test_pipeline_degrades_without_expected_columns() {
    let df = df!("title" => &["A", "B", "A"]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let summary = AnalysisPipeline::new(test_config(dir.path()))
        .unwrap()
        .run(df)
        .unwrap();

    // nothing to chart, but the run completes and still deduplicates
    assert_eq!(summary.charts_written.len(), 0);
    assert_eq!(summary.charts_skipped.len(), 6);
    assert_eq!(summary.duplicates_removed, 1);
}

// ============================================================================
// Normalization Scenarios
// ============================================================================

#[test]
fn test_year_added_sequence_end_to_end() {
    // one parseable date, one garbage value, one absent
    let mut df = df!(
        "title" => &["A", "B", "C"],
        "date_added" => &[Some("January 5, 2018"), Some("sometime in 2017"), None]
    )
    .unwrap();

    Normalizer::normalize(&mut df).unwrap();

    let years = df
        .column("year_added")
        .unwrap()
        .as_materialized_series()
        .clone();
    let years: Vec<Option<i32>> = years.i32().unwrap().into_iter().collect();
    assert_eq!(years, vec![Some(2018), None, None]);
}

#[test]
fn test_normalized_fixture_has_no_categorical_nulls() {
    let mut df = load_fixture("catalog_small.csv");
    Normalizer::normalize(&mut df).unwrap();

    for name in catalog_eda::FILLED_COLUMNS {
        let series = df.column(name).unwrap().as_materialized_series().clone();
        assert_eq!(series.null_count(), 0, "column '{}' still has nulls", name);
    }

    // the fully-empty row got the placeholder everywhere
    let country = df.column("country").unwrap().as_materialized_series().clone();
    let country = country.str().unwrap();
    assert_eq!(country.get(7), Some(catalog_eda::UNKNOWN));
}

#[test]
fn test_duration_split_on_fixture() {
    let mut df = load_fixture("catalog_small.csv");
    Normalizer::normalize(&mut df).unwrap();

    let ints = df
        .column("duration_int")
        .unwrap()
        .as_materialized_series()
        .clone();
    let ints = ints.f64().unwrap();
    assert_eq!(ints.get(0), Some(98.0));
    assert_eq!(ints.get(1), Some(2.0));

    let units = df
        .column("duration_type")
        .unwrap()
        .as_materialized_series()
        .clone();
    let units = units.str().unwrap();
    assert_eq!(units.get(0), Some("min"));
    assert_eq!(units.get(1), Some("Seasons"));
}

#[test]
fn test_genre_list_on_fixture() {
    let mut df = load_fixture("catalog_small.csv");
    Normalizer::normalize(&mut df).unwrap();

    let col = df
        .column("genre_list")
        .unwrap()
        .as_materialized_series()
        .clone();
    let lists = col.list().unwrap();

    let first = lists.get_as_series(0).unwrap();
    let first: Vec<String> = first
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect();
    assert_eq!(first, vec!["Drama", "Adventure"]);

    // row s8 has an empty genres field -> empty list, never null
    assert_eq!(col.null_count(), 0);
}

// ============================================================================
// Deduplication Scenarios
// ============================================================================

#[test]
fn test_rows_differing_only_in_genres_collapse() {
    let mut df = df!(
        "title" => &["Same", "Same"],
        "type" => &["Movie", "Movie"],
        "genres" => &["Drama", "Comedy"]
    )
    .unwrap();
    Normalizer::normalize(&mut df).unwrap();
    // drop the raw scalar source so only the list column differs
    let df = df.drop("genres").unwrap();

    let (deduped, removed) = catalog_eda::drop_duplicate_rows(&df).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(deduped.height(), 1);
}

#[test]
fn test_keep_duplicates_flag() {
    let df = load_fixture("catalog_small.csv");

    let dir = tempfile::tempdir().unwrap();
    let config = AnalysisConfig::builder()
        .output_dir(dir.path())
        .remove_duplicates(false)
        .build()
        .unwrap();
    let summary = AnalysisPipeline::new(config).unwrap().run(df).unwrap();

    assert_eq!(summary.duplicates_removed, 0);
    assert_eq!(summary.rows_after, 10);
}
