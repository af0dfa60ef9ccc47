use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const NICE_MAX_ITERATIONS: usize = 10;

/// Continuous linear mapping from a value domain to a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how
/// vertical axes map larger values upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    clamp: bool,
}

impl LinearScale {
    /// Creates a scale over `[domain_start, domain_end]` mapped onto `[0, 1]`.
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
            clamp: false,
        })
    }

    /// Builds a scale from the min/max of `values`.
    ///
    /// A single distinct value is widened by half a unit on each side so the
    /// sample lands in the middle of the range.
    pub fn from_extent(values: impl IntoIterator<Item = f64>) -> ChartResult<Self> {
        let (min, max) = extent(values).ok_or_else(|| {
            ChartError::InvalidData("scale extent requires at least one finite value".to_owned())
        })?;
        if min == max {
            return Self::new(min - 0.5, max + 0.5);
        }
        Self::new(min, max)
    }

    pub fn with_range(mut self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    #[must_use]
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let mut normalized = (value - self.domain_start) / span;
        if self.clamp {
            normalized = normalized.clamp(0.0, 1.0);
        }
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        let mut normalized = if span == 0.0 {
            0.5
        } else {
            (pixel - self.range_start) / span
        };
        if self.clamp {
            normalized = normalized.clamp(0.0, 1.0);
        }
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Extends the domain outward to round tick boundaries for roughly
    /// `tick_count` ticks.
    ///
    /// Mirrors the iterative refinement used by d3: the increment is
    /// recomputed against the widened domain until it stabilizes.
    #[must_use]
    pub fn nice(self, tick_count: usize) -> Self {
        let reversed = self.domain_end < self.domain_start;
        let (mut start, mut stop) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let mut previous_step: Option<f64> = None;
        for _ in 0..NICE_MAX_ITERATIONS {
            let step = tick_increment(start, stop, tick_count);
            if previous_step == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            previous_step = Some(step);
        }

        let (domain_start, domain_end) = if reversed {
            (stop, start)
        } else {
            (start, stop)
        };
        Self {
            domain_start,
            domain_end,
            ..self
        }
    }
}

/// Finite min/max of `values`, ignoring NaN and infinities.
#[must_use]
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let finite: Vec<OrderedFloat<f64>> = values
        .into_iter()
        .filter(|v| v.is_finite())
        .map(OrderedFloat)
        .collect();
    let min = finite.iter().min()?;
    let max = finite.iter().max()?;
    Some((min.0, max.0))
}

/// Tick increment for `tick_count` ticks over `[start, stop]`.
///
/// Positive values are the step itself; negative values encode `1 / step`
/// for sub-unit steps, which keeps the rounding exact.
fn tick_increment(start: f64, stop: f64, tick_count: usize) -> f64 {
    let step = (stop - start) / tick_count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        10f64.powf(power) * factor
    } else {
        -(10f64.powf(-power) / factor)
    }
}
