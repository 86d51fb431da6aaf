use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid view box: width={width}, height={height}")]
    InvalidViewBox { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("exchange rate source error: {0}")]
    RateSource(String),
}
