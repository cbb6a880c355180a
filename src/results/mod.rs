//! Result log discovery, parsing, and per-tag sample accumulation.
mod reader;


pub use reader::{discover_result_log, read_result_log};

#[cfg(test)]
pub(crate) use reader::parse_result_log;

use std::collections::BTreeMap;

/// Latencies grouped by tag, in arrival order. Accumulation is unbounded;
/// the whole run's samples are held until reduction.
#[derive(Debug, Default, Clone)]
pub struct SampleSet {
    samples: BTreeMap<String, Vec<f64>>,
}

impl SampleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: impl Into<String>, latency_seconds: f64) {
        self.samples
            .entry(tag.into())
            .or_default()
            .push(latency_seconds);
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&[f64]> {
        self.samples.get(tag).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.samples
            .iter()
            .map(|(tag, latencies)| (tag.as_str(), latencies.as_slice()))
    }

    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples
            .values()
            .map(Vec::len)
            .fold(0usize, usize::saturating_add)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
