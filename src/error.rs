use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid range: lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
