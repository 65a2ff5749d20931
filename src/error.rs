use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("response error: {0}")]
    Response(String),
}

pub type AppResult<T> = Result<T, AppError>;
