use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumerologyError {
    #[error("invalid date of birth {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
