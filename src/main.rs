//! CLI entry point for the catalog analysis pipeline.

use anyhow::{anyhow, Result};
use catalog_eda::{AnalysisConfig, AnalysisPipeline, AnalysisSummary, CatalogSchema};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory analysis of catalog exports",
    long_about = "Loads a catalog CSV, normalizes its columns, removes duplicate rows,\n\
                  and renders six descriptive charts as PNG files.\n\n\
                  EXAMPLES:\n  \
                  # Basic usage\n  \
                  catalog-eda -i catalog.csv\n\n  \
                  # Custom chart directory and top-country count\n  \
                  catalog-eda -i catalog.csv -o figures --top-countries 15\n\n  \
                  # Machine-readable summary\n  \
                  catalog-eda -i catalog.csv --json | jq .rows_after"
)]
struct Args {
    /// Path to the catalog CSV file (may be gzip/zstd compressed)
    #[arg(short, long)]
    input: String,

    /// Output directory for rendered charts
    #[arg(short, long, default_value = "./charts")]
    output: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and the final summary)
    #[arg(short, long)]
    quiet: bool,

    /// Output the run summary as JSON to stdout instead of the
    /// human-readable report (disables all logging)
    #[arg(long)]
    json: bool,

    /// Number of countries in the top-countries chart
    #[arg(long, default_value = "10")]
    top_countries: usize,

    /// Bucket count for the release-year histogram
    #[arg(long, default_value = "20")]
    release_year_bins: usize,

    /// Bucket count for the movie-duration histogram
    #[arg(long, default_value = "30")]
    duration_bins: usize,

    /// Keep duplicate rows instead of dropping them
    #[arg(long)]
    keep_duplicates: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    info!("Loading catalog from: {}", args.input);
    let df = catalog_eda::load_catalog(Path::new(&args.input))?;
    info!("Catalog loaded: {} rows x {} columns", df.height(), df.width());

    let schema = CatalogSchema::detect(&df);
    if !args.json {
        println!("Columns in dataset: {:?}", schema.columns());
    }
    let missing = schema.missing_expected();
    if !missing.is_empty() {
        warn!("Expected columns absent from export: {:?}", missing);
    }

    let config = AnalysisConfig::builder()
        .output_dir(&args.output)
        .top_countries(args.top_countries)
        .release_year_bins(args.release_year_bins)
        .duration_bins(args.duration_bins)
        .remove_duplicates(!args.keep_duplicates)
        .build()?;

    let summary = AnalysisPipeline::new(config)?.run(df)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_summary(&args.input, &summary);
    Ok(())
}

/// Print a human-readable summary of the analysis run.
///
/// This uses `println!` intentionally: it is the primary output of the tool
/// and should be visible regardless of log level.
fn print_summary(input: &str, summary: &AnalysisSummary) {
    println!();
    println!("{}", "=".repeat(80));
    println!("CATALOG ANALYSIS COMPLETE");
    println!("{}", "=".repeat(80));
    println!();

    println!(
        "Input: {} ({} rows x {} columns)",
        input,
        summary.rows_before,
        summary.columns.len()
    );
    println!(
        "Rows: {} -> {} ({} duplicates removed)",
        summary.rows_before, summary.rows_after, summary.duplicates_removed
    );
    println!("Duration: {}ms", summary.duration_ms);
    println!();

    if !summary.normalization_actions.is_empty() {
        println!("Normalization:");
        for action in &summary.normalization_actions {
            println!("  - {}", action);
        }
        println!();
    }

    println!(
        "Charts: {} written, {} skipped",
        summary.charts_written.len(),
        summary.charts_skipped.len()
    );
    for path in &summary.charts_written {
        println!("  - {}", path);
    }
    for name in &summary.charts_skipped {
        println!("  ! skipped: {}", name);
    }
    println!();

    println!("Use --json for machine-readable output");
    println!("{}", "=".repeat(80));
}
