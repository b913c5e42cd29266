use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown runtime: {0}")]
    UnknownRuntime(String),

    #[error("unknown setting key: {0}")]
    UnknownSetting(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
