use thiserror::Error;

pub type Result<T> = std::result::Result<T, TellerError>;

#[derive(Error, Debug)]
pub enum TellerError {
    #[error("Wrong PIN entered")]
    Authentication,
    #[error("Not sufficient balance")]
    InsufficientFunds,
    #[error("Unrecognized menu option: {0}")]
    InvalidSelection(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
