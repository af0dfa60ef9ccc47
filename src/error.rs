use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid region: x={x_min}..{x_max}, y={y_min}..{y_max}")]
    InvalidRegion {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown metric: `{0}`")]
    UnknownMetric(String),

    #[error("missing {0} table")]
    MissingTable(&'static str),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
