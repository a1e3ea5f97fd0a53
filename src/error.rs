use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid event payload: {0}")]
    InvalidPayload(String),

    #[error("invalid lifecycle transition: {0}")]
    InvalidLifecycle(String),

    #[error("chart adapter has been destroyed")]
    Destroyed,

    #[error("render failed: {0}")]
    Render(String),
}
