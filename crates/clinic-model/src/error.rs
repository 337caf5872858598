use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("month out of range: {0}")]
    InvalidMonth(u32),
    #[error("year out of range: {0}")]
    InvalidYear(i32),
}

pub type Result<T> = std::result::Result<T, ModelError>;
