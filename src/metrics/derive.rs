use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::warn;

use crate::data::{Country, Metric, Record};

/// A value read from, or computed out of, one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivedMetric {
    /// Column value as loaded.
    Raw(Metric),
    /// `100 - Overweight - Obese`.
    NormalWeight,
    /// Regular plus somewhat-regular exercise.
    CombinedRegularExercise,
    /// `100 - VigorousActivity(Never)`.
    AnyVigorousActivity,
}

impl DerivedMetric {
    /// Whether the value is computed rather than read.
    #[must_use]
    pub const fn is_computed(self) -> bool {
        !matches!(self, Self::Raw(_))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Raw(metric) => metric.column_name(),
            Self::NormalWeight => "Normal (%)",
            Self::CombinedRegularExercise => "Combined Regular Exercise (%)",
            Self::AnyVigorousActivity => "Any Vigorous Activity (%)",
        }
    }

    /// Pass-through computation: missing sources count as `0` and the result
    /// is never adjusted.
    #[must_use]
    pub fn compute(self, record: &Record) -> f64 {
        match self {
            Self::Raw(metric) => record.value_or_zero(metric),
            Self::NormalWeight => {
                100.0
                    - record.value_or_zero(Metric::Overweight)
                    - record.value_or_zero(Metric::Obese)
            }
            Self::CombinedRegularExercise => {
                record.value_or_zero(Metric::ExerciseRegularly)
                    + record.value_or_zero(Metric::ExerciseSomeRegularity)
            }
            Self::AnyVigorousActivity => 100.0 - record.value_or_zero(Metric::VigorousNever),
        }
    }
}

impl From<Metric> for DerivedMetric {
    fn from(metric: Metric) -> Self {
        Self::Raw(metric)
    }
}

impl fmt::Display for DerivedMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do with computed percentages that leave `[0, 100]`.
///
/// Inconsistent source rows (Overweight + Obese above 100) are the usual
/// cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegativeValuePolicy {
    #[default]
    PassThrough,
    Clamp,
    Warn,
}

/// Metric derivation with an explicit out-of-range policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDeriver {
    pub policy: NegativeValuePolicy,
}

impl MetricDeriver {
    #[must_use]
    pub const fn new(policy: NegativeValuePolicy) -> Self {
        Self { policy }
    }

    /// Derives `metric` from `record`.
    ///
    /// The policy only applies to computed metrics; raw columns are returned
    /// as loaded.
    #[must_use]
    pub fn derive(&self, record: &Record, metric: DerivedMetric) -> f64 {
        let value = metric.compute(record);
        if !metric.is_computed() || (0.0..=100.0).contains(&value) {
            return value;
        }

        match self.policy {
            NegativeValuePolicy::PassThrough => value,
            NegativeValuePolicy::Clamp => value.clamp(0.0, 100.0),
            NegativeValuePolicy::Warn => {
                warn!(
                    metric = metric.name(),
                    country = %record.country,
                    year = record.year,
                    value,
                    "derived percentage outside [0, 100]"
                );
                value
            }
        }
    }

    /// Normal/Overweight/Obese split of one record.
    #[must_use]
    pub fn bmi_breakdown(&self, record: &Record) -> BmiBreakdown {
        BmiBreakdown {
            country: record.country,
            normal: self.derive(record, DerivedMetric::NormalWeight),
            overweight: record.value_or_zero(Metric::Overweight),
            obese: record.value_or_zero(Metric::Obese),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 3] = [
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `{category, value}` segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub category: BmiCategory,
    pub value: f64,
}

/// BMI composition of one country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiBreakdown {
    pub country: Country,
    pub normal: f64,
    pub overweight: f64,
    pub obese: f64,
}

impl BmiBreakdown {
    #[must_use]
    pub fn value(&self, category: BmiCategory) -> f64 {
        match category {
            BmiCategory::Normal => self.normal,
            BmiCategory::Overweight => self.overweight,
            BmiCategory::Obese => self.obese,
        }
    }

    /// Segments in `order`.
    #[must_use]
    pub fn segments(&self, order: &[BmiCategory]) -> SmallVec<[CategoryValue; 3]> {
        order
            .iter()
            .map(|&category| CategoryValue {
                category,
                value: self.value(category),
            })
            .collect()
    }

    /// Segments in the half-donut order: Overweight, Obese, Normal.
    #[must_use]
    pub fn donut_segments(&self) -> SmallVec<[CategoryValue; 3]> {
        smallvec![
            CategoryValue {
                category: BmiCategory::Overweight,
                value: self.overweight,
            },
            CategoryValue {
                category: BmiCategory::Obese,
                value: self.obese,
            },
            CategoryValue {
                category: BmiCategory::Normal,
                value: self.normal,
            },
        ]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.normal + self.overweight + self.obese
    }
}
