use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("{field} is empty after normalization")]
    EmptyField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
