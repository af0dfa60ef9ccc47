use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Discrete band scale: maps each domain key to a contiguous, padded slot.
///
/// Uses a single `padding` ratio for both the gaps between bands and the
/// outer edges, with bands centered in the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale<K> {
    domain: Vec<K>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<K: PartialEq + Clone> BandScale<K> {
    pub fn new(
        domain: Vec<K>,
        range_start: f64,
        range_end: f64,
        padding: f64,
    ) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }

        let (lo, hi) = if range_end < range_start {
            (range_end, range_start)
        } else {
            (range_start, range_end)
        };
        let n = domain.len() as f64;
        let step = (hi - lo) / (n - padding + padding * 2.0).max(1.0);
        let start = lo + (hi - lo - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Ok(Self {
            domain,
            start,
            step,
            bandwidth,
        })
    }

    #[must_use]
    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Start coordinate of the band for `key`, or `None` for unknown keys.
    #[must_use]
    pub fn position(&self, key: &K) -> Option<f64> {
        self.domain
            .iter()
            .position(|candidate| candidate == key)
            .map(|index| self.start + self.step * index as f64)
    }
}
