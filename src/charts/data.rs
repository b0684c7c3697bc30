//! Chart data preparation: value counts, histogram binning, and a Gaussian
//! KDE for the duration overlay. All functions are pure reads over Series.

use crate::error::Result;
use polars::prelude::*;
use std::collections::{BTreeMap, HashMap};

/// Count occurrences of each distinct value, in first-encounter order.
///
/// The stable ordering matters downstream: top-N selection breaks count ties
/// by whichever value appeared first in the data.
pub fn value_counts(series: &Series) -> Result<Vec<(String, usize)>> {
    let strings = series.cast(&DataType::String)?;
    let ca = strings.str()?;

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for val in ca.into_iter().flatten() {
        match index.get(val) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(val.to_string(), counts.len());
                counts.push((val.to_string(), 1));
            }
        }
    }

    Ok(counts)
}

/// Sort counts descending. The sort is stable, so ties keep their
/// first-encounter order from [`value_counts`].
pub fn sort_by_count_desc(counts: &mut [(String, usize)]) {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
}

/// Count occurrences per integer value, ascending.
pub fn integer_counts(series: &Series) -> Result<Vec<(i32, usize)>> {
    let ints = series.cast(&DataType::Int32)?;
    let ca = ints.i32()?;

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for val in ca.into_iter().flatten() {
        *counts.entry(val).or_insert(0) += 1;
    }

    Ok(counts.into_iter().collect())
}

/// One histogram bucket: half-open interval [lower, upper).
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Bucket values into `bin_count` equal-width bins spanning [min, max].
///
/// Values equal to the maximum land in the last bin. Returns an empty vec
/// for empty input.
pub fn histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    // degenerate range: widen so every value falls into a real bucket
    let (min, max) = if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in values {
        let mut idx = ((v - min) / width) as usize;
        if idx >= bin_count {
            idx = bin_count - 1;
        }
        bins[idx].count += 1;
    }

    bins
}

/// Sample a Gaussian kernel density estimate over [lower, upper].
///
/// Bandwidth follows Silverman's rule of thumb; a constant sample falls back
/// to bandwidth 1.0 so the curve stays finite.
pub fn kde_curve(values: &[f64], lower: f64, upper: f64, points: usize) -> Vec<(f64, f64)> {
    if values.is_empty() || points < 2 {
        return Vec::new();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    let bandwidth = if std_dev > 0.0 {
        1.06 * std_dev * n.powf(-0.2)
    } else {
        1.0
    };

    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * bandwidth * n);
    let step = (upper - lower) / (points - 1) as f64;

    (0..points)
        .map(|i| {
            let x = lower + i as f64 * step;
            let density: f64 = values
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect()
}
