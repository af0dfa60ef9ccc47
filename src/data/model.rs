use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Countries covered by the survey, in their canonical roster order.
///
/// The declaration order is the tie-break order used by rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    France,
    Italy,
    Netherlands,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::France, Country::Italy, Country::Netherlands];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::France => "France",
            Self::Italy => "Italy",
            Self::Netherlands => "Netherlands",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|country| country.as_str() == s.trim())
            .ok_or_else(|| ChartError::InvalidData(format!("unknown country `{s}`")))
    }
}

/// Respondent sex as recorded in the health table.
///
/// Tables without a sex column load every row as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Total,
    Unknown,
}

impl Sex {
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim() {
            "Male" => Self::Male,
            "Female" => Self::Female,
            "Total" => Self::Total,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Total => "Total",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw survey columns, one variant per known table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Sph,
    Healthy,
    FruitConsumption,
    VegetableConsumption,
    Overweight,
    Obese,
    OverweightOrObese,
    ExerciseRegularly,
    ExerciseSomeRegularity,
    ExerciseNever,
    ModerateUnder60,
    ModerateOver60,
    ModerateNever,
    VigorousUnder60,
    VigorousOver60,
    VigorousNever,
}

impl Metric {
    pub const ALL: [Metric; 16] = [
        Metric::Sph,
        Metric::Healthy,
        Metric::FruitConsumption,
        Metric::VegetableConsumption,
        Metric::Overweight,
        Metric::Obese,
        Metric::OverweightOrObese,
        Metric::ExerciseRegularly,
        Metric::ExerciseSomeRegularity,
        Metric::ExerciseNever,
        Metric::ModerateUnder60,
        Metric::ModerateOver60,
        Metric::ModerateNever,
        Metric::VigorousUnder60,
        Metric::VigorousOver60,
        Metric::VigorousNever,
    ];

    /// Header of the column holding this metric.
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Sph => "SPH",
            Self::Healthy => "Healthy (%)",
            Self::FruitConsumption => "Fruit Consumption (%)",
            Self::VegetableConsumption => "Vegetable Consumption (%)",
            Self::Overweight => "Overweight (%)",
            Self::Obese => "Obese (%)",
            Self::OverweightOrObese => "Overweight or Obese (%)",
            Self::ExerciseRegularly => "Exercise Frequency (Regularly)",
            Self::ExerciseSomeRegularity => "Exercise Frequency (Some Regularity)",
            Self::ExerciseNever => "Exercise Frequency (Never)",
            Self::ModerateUnder60 => "Moderate Activity (< 60 min)",
            Self::ModerateOver60 => "Moderate Activity (> 60 min)",
            Self::ModerateNever => "Moderate Activity (Never)",
            Self::VigorousUnder60 => "Vigorous Activity (< 60 min)",
            Self::VigorousOver60 => "Vigorous Activity (> 60 min)",
            Self::VigorousNever => "Vigorous Activity (Never)",
        }
    }

    /// Resolves a column header, failing with `UnknownMetric` for anything
    /// outside the known schema.
    pub fn from_column(column: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.column_name() == column)
            .ok_or_else(|| ChartError::UnknownMetric(column.to_owned()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Named optional metric fields of one row.
///
/// `None` means the column is absent from the table or the cell did not
/// parse as a finite number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    pub sph: Option<f64>,
    pub healthy: Option<f64>,
    pub fruit_consumption: Option<f64>,
    pub vegetable_consumption: Option<f64>,
    pub overweight: Option<f64>,
    pub obese: Option<f64>,
    pub overweight_or_obese: Option<f64>,
    pub exercise_regularly: Option<f64>,
    pub exercise_some_regularity: Option<f64>,
    pub exercise_never: Option<f64>,
    pub moderate_under_60: Option<f64>,
    pub moderate_over_60: Option<f64>,
    pub moderate_never: Option<f64>,
    pub vigorous_under_60: Option<f64>,
    pub vigorous_over_60: Option<f64>,
    pub vigorous_never: Option<f64>,
}

impl MetricValues {
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        *self.slot(metric)
    }

    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        *self.slot_mut(metric) = value;
    }

    fn slot(&self, metric: Metric) -> &Option<f64> {
        match metric {
            Metric::Sph => &self.sph,
            Metric::Healthy => &self.healthy,
            Metric::FruitConsumption => &self.fruit_consumption,
            Metric::VegetableConsumption => &self.vegetable_consumption,
            Metric::Overweight => &self.overweight,
            Metric::Obese => &self.obese,
            Metric::OverweightOrObese => &self.overweight_or_obese,
            Metric::ExerciseRegularly => &self.exercise_regularly,
            Metric::ExerciseSomeRegularity => &self.exercise_some_regularity,
            Metric::ExerciseNever => &self.exercise_never,
            Metric::ModerateUnder60 => &self.moderate_under_60,
            Metric::ModerateOver60 => &self.moderate_over_60,
            Metric::ModerateNever => &self.moderate_never,
            Metric::VigorousUnder60 => &self.vigorous_under_60,
            Metric::VigorousOver60 => &self.vigorous_over_60,
            Metric::VigorousNever => &self.vigorous_never,
        }
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::Sph => &mut self.sph,
            Metric::Healthy => &mut self.healthy,
            Metric::FruitConsumption => &mut self.fruit_consumption,
            Metric::VegetableConsumption => &mut self.vegetable_consumption,
            Metric::Overweight => &mut self.overweight,
            Metric::Obese => &mut self.obese,
            Metric::OverweightOrObese => &mut self.overweight_or_obese,
            Metric::ExerciseRegularly => &mut self.exercise_regularly,
            Metric::ExerciseSomeRegularity => &mut self.exercise_some_regularity,
            Metric::ExerciseNever => &mut self.exercise_never,
            Metric::ModerateUnder60 => &mut self.moderate_under_60,
            Metric::ModerateOver60 => &mut self.moderate_over_60,
            Metric::ModerateNever => &mut self.moderate_never,
            Metric::VigorousUnder60 => &mut self.vigorous_under_60,
            Metric::VigorousOver60 => &mut self.vigorous_over_60,
            Metric::VigorousNever => &mut self.vigorous_never,
        }
    }
}

/// One survey row keyed by `(year, country, sex)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub country: Country,
    pub sex: Sex,
    pub values: MetricValues,
}

impl Record {
    #[must_use]
    pub fn new(year: i32, country: Country, sex: Sex) -> Self {
        Self {
            year,
            country,
            sex,
            values: MetricValues::default(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, metric: Metric, value: f64) -> Self {
        self.values.set(metric, Some(value));
        self
    }

    #[must_use]
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.values.get(metric)
    }

    /// Metric value with absent cells read as `0`.
    #[must_use]
    pub fn value_or_zero(&self, metric: Metric) -> f64 {
        self.value(metric).unwrap_or(0.0)
    }
}
