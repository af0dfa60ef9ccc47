//! Survey records and table loading.

mod loader;
mod model;
mod parse;
mod table;

pub use loader::{load_table, read_table};
pub use model::{Country, Metric, MetricValues, Record, Sex};
pub use parse::{parse_number, parse_year};
pub use table::{DataTable, Dataset, PendingDataset, RecordFilter, TableKind};
