use thiserror::Error;

pub type AddressResult<T> = std::result::Result<T, AddressError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Malformed hex: {0}")]
    MalformedHex(#[from] HexError),

    #[error("Invalid address length: expected 40 hex digits, got {0}")]
    InvalidAddressLength(usize),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Config Error: {0}")]
    Config(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),

    #[error("invalid character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

