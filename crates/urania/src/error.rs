use thiserror::Error;

/// Failure to read a sign or aspect name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown zodiac sign: {0}")]
    UnknownSign(String),
    #[error("unknown aspect: {0}")]
    UnknownAspect(String),
}
