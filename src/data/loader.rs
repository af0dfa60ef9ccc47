use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ChartResult;

use super::model::{Country, Metric, MetricValues, Record, Sex};
use super::parse::{lenient_number, parse_year};
use super::table::{DataTable, TableKind};

/// CSV row shape shared by both survey tables.
///
/// Every metric column is optional so one struct reads either table; columns
/// the file does not carry stay `None`.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Sex", default)]
    sex: Option<String>,
    #[serde(rename = "SPH", default, deserialize_with = "lenient_number")]
    sph: Option<f64>,
    #[serde(rename = "Healthy (%)", default, deserialize_with = "lenient_number")]
    healthy: Option<f64>,
    #[serde(
        rename = "Fruit Consumption (%)",
        default,
        deserialize_with = "lenient_number"
    )]
    fruit_consumption: Option<f64>,
    #[serde(
        rename = "Vegetable Consumption (%)",
        default,
        deserialize_with = "lenient_number"
    )]
    vegetable_consumption: Option<f64>,
    #[serde(
        rename = "Overweight (%)",
        default,
        deserialize_with = "lenient_number"
    )]
    overweight: Option<f64>,
    #[serde(rename = "Obese (%)", default, deserialize_with = "lenient_number")]
    obese: Option<f64>,
    #[serde(
        rename = "Overweight or Obese (%)",
        default,
        deserialize_with = "lenient_number"
    )]
    overweight_or_obese: Option<f64>,
    #[serde(
        rename = "Exercise Frequency (Regularly)",
        default,
        deserialize_with = "lenient_number"
    )]
    exercise_regularly: Option<f64>,
    #[serde(
        rename = "Exercise Frequency (Some Regularity)",
        default,
        deserialize_with = "lenient_number"
    )]
    exercise_some_regularity: Option<f64>,
    #[serde(
        rename = "Exercise Frequency (Never)",
        default,
        deserialize_with = "lenient_number"
    )]
    exercise_never: Option<f64>,
    #[serde(
        rename = "Moderate Activity (< 60 min)",
        default,
        deserialize_with = "lenient_number"
    )]
    moderate_under_60: Option<f64>,
    #[serde(
        rename = "Moderate Activity (> 60 min)",
        default,
        deserialize_with = "lenient_number"
    )]
    moderate_over_60: Option<f64>,
    #[serde(
        rename = "Moderate Activity (Never)",
        default,
        deserialize_with = "lenient_number"
    )]
    moderate_never: Option<f64>,
    #[serde(
        rename = "Vigorous Activity (< 60 min)",
        default,
        deserialize_with = "lenient_number"
    )]
    vigorous_under_60: Option<f64>,
    #[serde(
        rename = "Vigorous Activity (> 60 min)",
        default,
        deserialize_with = "lenient_number"
    )]
    vigorous_over_60: Option<f64>,
    #[serde(
        rename = "Vigorous Activity (Never)",
        default,
        deserialize_with = "lenient_number"
    )]
    vigorous_never: Option<f64>,
}

impl RawRow {
    fn into_record(self, kind: TableKind, line: u64) -> Option<Record> {
        let Some(year) = parse_year(&self.year) else {
            warn!(
                table = kind.name(),
                line,
                year = %self.year,
                "skipping row with unparseable year"
            );
            return None;
        };
        let country = match self.country.parse::<Country>() {
            Ok(country) => country,
            Err(err) => {
                warn!(table = kind.name(), line, error = %err, "skipping row");
                return None;
            }
        };
        let sex = Sex::parse_lenient(self.sex.as_deref().unwrap_or_default());

        let values = MetricValues {
            sph: self.sph,
            healthy: self.healthy,
            fruit_consumption: self.fruit_consumption,
            vegetable_consumption: self.vegetable_consumption,
            overweight: self.overweight,
            obese: self.obese,
            overweight_or_obese: self.overweight_or_obese,
            exercise_regularly: self.exercise_regularly,
            exercise_some_regularity: self.exercise_some_regularity,
            exercise_never: self.exercise_never,
            moderate_under_60: self.moderate_under_60,
            moderate_over_60: self.moderate_over_60,
            moderate_never: self.moderate_never,
            vigorous_under_60: self.vigorous_under_60,
            vigorous_over_60: self.vigorous_over_60,
            vigorous_never: self.vigorous_never,
        };

        Some(Record {
            year,
            country,
            sex,
            values,
        })
    }
}

/// Reads one survey table from CSV text.
///
/// Rows with an unknown country or an unparseable year are skipped with a
/// warning; malformed CSV structure is an error.
pub fn read_table<R: Read>(kind: TableKind, reader: R) -> ChartResult<DataTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let known_columns = headers
        .iter()
        .filter(|header| Metric::from_column(header).is_ok())
        .count();
    debug!(
        table = kind.name(),
        columns = headers.len(),
        known_columns,
        "reading survey table"
    );

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (index, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = row?;
        // header is line 1
        match row.into_record(kind, index as u64 + 2) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    debug!(
        table = kind.name(),
        loaded = records.len(),
        skipped,
        "loaded survey table"
    );
    Ok(DataTable::new(kind, records))
}

/// Reads one survey table from a CSV file on disk.
pub fn load_table(kind: TableKind, path: impl AsRef<Path>) -> ChartResult<DataTable> {
    let file = File::open(path.as_ref())?;
    read_table(kind, file)
}
