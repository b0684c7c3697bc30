//! Chart drawing via the plotters bitmap backend.
//!
//! Three primitives cover the six catalog charts: vertical bars, horizontal
//! bars, and a histogram with an optional density overlay. Each writes one
//! PNG and returns nothing; the caller owns file naming and skip logic.

use crate::charts::data::HistogramBin;
use crate::error::{AnalysisError, Result};
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1000, 500);

fn render_err(chart: &str, err: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::ChartRender {
        chart: chart.to_string(),
        reason: err.to_string(),
    }
}

/// Draw a vertical bar chart with one bar per label.
pub fn draw_vertical_bars(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    counts: &[usize],
    color: RGBColor,
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(title, e))?;

    let n = labels.len() as f64;
    let y_max = (counts.iter().copied().max().unwrap_or(0) as f64 * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..n, 0f64..y_max)
        .map_err(|e| render_err(title, e))?;

    let x_fmt = |x: &f64| -> String {
        let rounded = x.round();
        if (*x - rounded).abs() > 0.01 || rounded < 0.0 {
            return String::new();
        }
        labels.get(rounded as usize).cloned().unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels((labels.len() + 1).min(25))
        .x_label_formatter(&x_fmt)
        .draw()
        .map_err(|e| render_err(title, e))?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, &c)| {
            Rectangle::new(
                [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, c as f64)],
                color.filled(),
            )
        }))
        .map_err(|e| render_err(title, e))?;

    root.present().map_err(|e| render_err(title, e))?;
    Ok(())
}

/// Draw a horizontal bar chart. `labels[0]` is drawn as the topmost bar.
pub fn draw_horizontal_bars(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    counts: &[usize],
    color: RGBColor,
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(title, e))?;

    let n = labels.len() as f64;
    let x_max = (counts.iter().copied().max().unwrap_or(0) as f64 * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(140)
        .build_cartesian_2d(0f64..x_max, 0f64..n)
        .map_err(|e| render_err(title, e))?;

    let y_fmt = |y: &f64| -> String {
        let rounded = y.round();
        if (*y - rounded).abs() > 0.01 || rounded < 0.0 {
            return String::new();
        }
        let idx = rounded as usize;
        if idx >= labels.len() {
            return String::new();
        }
        // index 0 sits at the top of the axis
        labels[labels.len() - 1 - idx].clone()
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .y_labels((labels.len() + 1).min(25))
        .y_label_formatter(&y_fmt)
        .draw()
        .map_err(|e| render_err(title, e))?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, &c)| {
            let y = (labels.len() - 1 - i) as f64;
            Rectangle::new([(0.0, y + 0.15), (c as f64, y + 0.85)], color.filled())
        }))
        .map_err(|e| render_err(title, e))?;

    root.present().map_err(|e| render_err(title, e))?;
    Ok(())
}

/// Draw a histogram, optionally with a smoothed density overlay already
/// scaled to count space.
pub fn draw_histogram(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    bins: &[HistogramBin],
    overlay: Option<&[(f64, f64)]>,
    color: RGBColor,
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(title, e))?;

    let x_min = bins.first().map(|b| b.lower).unwrap_or(0.0);
    let x_max = bins.last().map(|b| b.upper).unwrap_or(1.0);
    let mut y_max = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    if let Some(points) = overlay {
        for &(_, y) in points {
            y_max = y_max.max(y);
        }
    }
    let y_max = (y_max * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(|e| render_err(title, e))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(|e| render_err(title, e))?;

    chart
        .draw_series(bins.iter().map(|b| {
            Rectangle::new([(b.lower, 0.0), (b.upper, b.count as f64)], color.mix(0.6).filled())
        }))
        .map_err(|e| render_err(title, e))?;

    if let Some(points) = overlay {
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(2),
            ))
            .map_err(|e| render_err(title, e))?;
    }

    root.present().map_err(|e| render_err(title, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_bars_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bars.png");
        draw_vertical_bars(
            &path,
            "Test",
            "x",
            "y",
            &["Movie".to_string(), "TV Show".to_string()],
            &[7, 3],
            RGBColor(70, 160, 120),
        )
        .unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_histogram_with_overlay_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.png");
        let bins = vec![
            HistogramBin { lower: 0.0, upper: 1.0, count: 2 },
            HistogramBin { lower: 1.0, upper: 2.0, count: 5 },
        ];
        let overlay = vec![(0.0, 1.0), (1.0, 4.0), (2.0, 1.0)];
        draw_histogram(
            &path,
            "Test",
            "x",
            "y",
            &bins,
            Some(&overlay),
            RGBColor(60, 140, 60),
        )
        .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_horizontal_bars_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hbars.png");
        draw_horizontal_bars(
            &path,
            "Test",
            "count",
            "country",
            &["US".to_string(), "India".to_string(), "Japan".to_string()],
            &[10, 6, 2],
            RGBColor(60, 100, 180),
        )
        .unwrap();
        assert!(path.exists());
    }
}
