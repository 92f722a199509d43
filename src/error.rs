use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown algorithm '{0}', expected one of: {names}", names = crate::Algorithm::names().join(", "))]
    UnknownAlgorithm(String),

    #[error("invalid number '{value}' at position {position}: {source}")]
    InvalidNumber {
        position: usize,
        value: String,
        source: ParseIntError,
    },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
