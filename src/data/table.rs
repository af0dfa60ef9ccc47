use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::loader::load_table;
use super::model::{Country, Record, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    /// Diet and self-perceived health, stratified by sex.
    Health,
    /// BMI categories and physical activity, one row per country and year.
    Sports,
}

impl TableKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Sports => "sports",
        }
    }
}

/// Row filter applied before grouping.
///
/// `None` fields match every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub year: Option<i32>,
    pub sex: Option<Sex>,
}

impl RecordFilter {
    #[must_use]
    pub const fn any() -> Self {
        Self {
            year: None,
            sex: None,
        }
    }

    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self {
            year: Some(year),
            sex: None,
        }
    }

    #[must_use]
    pub const fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.year.is_none_or(|year| record.year == year)
            && self.sex.is_none_or(|sex| record.sex == sex)
    }
}

/// In-memory survey table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    kind: TableKind,
    records: Vec<Record>,
}

impl DataTable {
    #[must_use]
    pub fn new(kind: TableKind, records: Vec<Record>) -> Self {
        Self { kind, records }
    }

    #[must_use]
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn filtered(&self, filter: RecordFilter) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(move |record| filter.matches(record))
    }

    /// First row for `country` that passes `filter`.
    #[must_use]
    pub fn find(&self, country: Country, filter: RecordFilter) -> Option<&Record> {
        self.filtered(filter)
            .find(|record| record.country == country)
    }

    /// Distinct years present, ascending.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|record| record.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Both survey tables, available together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    health: DataTable,
    sports: DataTable,
}

impl Dataset {
    pub fn new(health: DataTable, sports: DataTable) -> ChartResult<Self> {
        if health.kind() != TableKind::Health {
            return Err(ChartError::InvalidData(format!(
                "expected health table, got {}",
                health.kind().name()
            )));
        }
        if sports.kind() != TableKind::Sports {
            return Err(ChartError::InvalidData(format!(
                "expected sports table, got {}",
                sports.kind().name()
            )));
        }
        Ok(Self { health, sports })
    }

    /// Loads both tables from CSV files.
    pub fn load(health_path: impl AsRef<Path>, sports_path: impl AsRef<Path>) -> ChartResult<Self> {
        let health = load_table(TableKind::Health, health_path)?;
        let sports = load_table(TableKind::Sports, sports_path)?;
        Self::new(health, sports)
    }

    #[must_use]
    pub fn health(&self) -> &DataTable {
        &self.health
    }

    #[must_use]
    pub fn sports(&self) -> &DataTable {
        &self.sports
    }

    #[must_use]
    pub fn table(&self, kind: TableKind) -> &DataTable {
        match kind {
            TableKind::Health => &self.health,
            TableKind::Sports => &self.sports,
        }
    }

    /// Distinct years across both tables, ascending.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        let mut years: BTreeSet<i32> = self.health.years().into_iter().collect();
        years.extend(self.sports.years());
        years.into_iter().collect()
    }
}

/// Collects the two tables as they arrive, in any order.
///
/// Nothing downstream may run until both are present.
#[derive(Debug, Clone, Default)]
pub struct PendingDataset {
    health: Option<DataTable>,
    sports: Option<DataTable>,
}

impl PendingDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `table` in its slot, replacing an earlier table of the same kind.
    pub fn provide(&mut self, table: DataTable) {
        debug!(
            table = table.kind().name(),
            records = table.records().len(),
            "survey table arrived"
        );
        match table.kind() {
            TableKind::Health => self.health = Some(table),
            TableKind::Sports => self.sports = Some(table),
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.health.is_some() && self.sports.is_some()
    }

    /// Joins the two tables, failing with `MissingTable` while either is absent.
    pub fn finish(self) -> ChartResult<Dataset> {
        let health = self
            .health
            .ok_or(ChartError::MissingTable(TableKind::Health.name()))?;
        let sports = self
            .sports
            .ok_or(ChartError::MissingTable(TableKind::Sports.name()))?;
        Dataset::new(health, sports)
    }
}
