//! Grouping, averaging and ranking of per-country values.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::data::{Country, Record, RecordFilter};
use crate::metrics::{DerivedMetric, MetricDeriver};

/// `{country, value}` pair shared by the ranker and the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountryValue {
    pub country: Country,
    pub value: f64,
}

impl CountryValue {
    #[must_use]
    pub const fn new(country: Country, value: f64) -> Self {
        Self { country, value }
    }
}

/// Descending order with ties broken by country roster order.
fn rank_order(a: &CountryValue, b: &CountryValue) -> Ordering {
    b.value
        .total_cmp(&a.value)
        .then_with(|| a.country.cmp(&b.country))
}

/// Country values in rank order, first place at index 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    values: SmallVec<[CountryValue; 3]>,
}

impl Ranking {
    /// Ranks arbitrary values, e.g. caller-supplied figures.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = CountryValue>) -> Self {
        let mut values: SmallVec<[CountryValue; 3]> = values.into_iter().collect();
        values.sort_by(rank_order);
        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[CountryValue] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Zero-based rank of `country`.
    #[must_use]
    pub fn position(&self, country: Country) -> Option<usize> {
        self.values
            .iter()
            .position(|entry| entry.country == country)
    }

    #[must_use]
    pub fn value_of(&self, country: Country) -> Option<f64> {
        self.values
            .iter()
            .find(|entry| entry.country == country)
            .map(|entry| entry.value)
    }

    /// Arithmetic mean of the ranked values, `0` when empty.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().map(|entry| entry.value).sum::<f64>() / self.values.len() as f64
    }

    /// `value / average` for `country`; `None` when the country is absent or
    /// the average is zero.
    #[must_use]
    pub fn ratio_to_average(&self, country: Country) -> Option<f64> {
        let average = self.average();
        if average == 0.0 {
            return None;
        }
        self.value_of(country).map(|value| value / average)
    }
}

/// Averages `metric` per country over the rows that pass `filter`.
///
/// Returns exactly one entry per roster country. A country without rows
/// gets `0` and a warning. Entries come back in rank order.
pub fn aggregate<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    metric: DerivedMetric,
    filter: RecordFilter,
    roster: &[Country],
    deriver: &MetricDeriver,
) -> Ranking {
    let mut sums: SmallVec<[(f64, usize); 3]> = SmallVec::from_elem((0.0, 0), roster.len());

    for record in records.into_iter().filter(|record| filter.matches(record)) {
        let Some(slot) = roster.iter().position(|&c| c == record.country) else {
            continue;
        };
        sums[slot].0 += deriver.derive(record, metric);
        sums[slot].1 += 1;
    }

    let values = roster.iter().zip(sums).map(|(&country, (sum, count))| {
        if count == 0 {
            warn!(
                country = %country,
                metric = metric.name(),
                year = ?filter.year,
                sex = ?filter.sex,
                "no rows for country; defaulting to 0"
            );
            return CountryValue::new(country, 0.0);
        }
        trace!(country = %country, metric = metric.name(), count, "aggregated rows");
        CountryValue::new(country, sum / count as f64)
    });

    Ranking::from_values(values)
}

/// Ordinal label for a zero-based rank: `1st`, `2nd`, `3rd`, `4th`, ...
#[must_use]
pub fn ordinal_label(position: usize) -> String {
    let n = position + 1;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// How often a country lands on each podium place across several rankings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankCounts {
    pub first: usize,
    pub second: usize,
    pub third: usize,
}

impl RankCounts {
    #[must_use]
    pub fn tally<'a>(country: Country, rankings: impl IntoIterator<Item = &'a Ranking>) -> Self {
        let mut counts = Self::default();
        for ranking in rankings {
            match ranking.position(country) {
                Some(0) => counts.first += 1,
                Some(1) => counts.second += 1,
                Some(2) => counts.third += 1,
                _ => {}
            }
        }
        counts
    }
}

/// Tooltip wording for a ratio against the average, e.g. `1.20× more than avg`.
#[must_use]
pub fn ratio_label(ratio: f64) -> String {
    let direction = if ratio >= 1.0 { "more" } else { "less" };
    format!("{ratio:.2}× {direction} than avg")
}
