use thiserror::Error;

pub type VaseResult<T> = Result<T, VaseError>;

#[derive(Debug, Error)]
pub enum VaseError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
