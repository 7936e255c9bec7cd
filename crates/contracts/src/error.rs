use thiserror::Error;

/// Contract-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid birth date: {0}")]
    InvalidBirthDate(String),

    #[error("Unknown command action: {0}")]
    UnknownAction(String),
}

pub type Result<T> = std::result::Result<T, ContractError>;
