use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown slice renderer: `{0}`")]
    UnknownRenderer(String),

    #[error("data set adapter unavailable: {0}")]
    AdapterUnavailable(String),
}
