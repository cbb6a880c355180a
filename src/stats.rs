//! Per-tag quantile reduction over raw latency samples.
//!
//! Quantiles use linear interpolation between order statistics: for a
//! fraction `p` over `n` sorted samples the index is `p * (n - 1)` and the
//! value interpolates between the two bracketing samples. Identical sample
//! multisets always reduce to identical output.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{StatsError, StatsResult};
use crate::results::SampleSet;

/// Reduced run statistics: tag to quantile-label to value.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct QuantileReport(pub BTreeMap<String, BTreeMap<String, f64>>);

impl QuantileReport {
    #[must_use]
    pub fn get(&self, tag: &str, label: &str) -> Option<f64> {
        self.0.get(tag).and_then(|entries| entries.get(label)).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Computes the requested quantiles for every tag in the sample set.
///
/// An empty sample set reduces to an empty report.
///
/// # Errors
///
/// Returns `StatsError::FractionOutOfRange` for fractions outside `[0, 1]`
/// and `StatsError::EmptySampleSet` when a quantile is requested for a tag
/// holding no samples.
pub fn reduce(samples: &SampleSet, fractions: &[f64]) -> StatsResult<QuantileReport> {
    for &fraction in fractions {
        validate_fraction(fraction)?;
    }
    let mut report = BTreeMap::new();
    for (tag, latencies) in samples.iter() {
        let mut sorted = latencies.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mut entries = BTreeMap::new();
        for &fraction in fractions {
            if sorted.is_empty() {
                return Err(StatsError::EmptySampleSet {
                    tag: tag.to_owned(),
                });
            }
            entries.insert(quantile_label(fraction), interpolate(&sorted, fraction));
        }
        report.insert(tag.to_owned(), entries);
    }
    Ok(QuantileReport(report))
}

/// Single-shot quantile over one tag's samples.
///
/// # Errors
///
/// Returns `StatsError::FractionOutOfRange` for fractions outside `[0, 1]`
/// and `StatsError::EmptySampleSet` when `samples` is empty.
pub fn quantile(tag: &str, samples: &[f64], fraction: f64) -> StatsResult<f64> {
    validate_fraction(fraction)?;
    if samples.is_empty() {
        return Err(StatsError::EmptySampleSet {
            tag: tag.to_owned(),
        });
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(interpolate(&sorted, fraction))
}

/// Label for a quantile fraction: `0.5` becomes `q50`, `0.999` becomes
/// `q99.9`.
#[must_use]
pub fn quantile_label(fraction: f64) -> String {
    let percent = ((fraction * 100_000.0).round()) / 1000.0;
    if percent.fract() == 0.0 {
        format!("q{}", percent as i64)
    } else {
        format!("q{}", percent)
    }
}

fn validate_fraction(fraction: f64) -> StatsResult<()> {
    if (0.0..=1.0).contains(&fraction) {
        Ok(())
    } else {
        Err(StatsError::FractionOutOfRange { fraction })
    }
}

/// `sorted` must be non-empty and ascending.
fn interpolate(sorted: &[f64], fraction: f64) -> f64 {
    let count = sorted.len().saturating_sub(1);
    let position = fraction * (count as f64);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let lower_value = sorted.get(lower).copied().unwrap_or(f64::NAN);
    let upper_value = sorted.get(upper).copied().unwrap_or(lower_value);
    let weight = position - (lower as f64);
    lower_value + (upper_value - lower_value) * weight
}
