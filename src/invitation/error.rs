use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("secure random source unavailable: {0}")]
    EntropySource(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid invitation token format")]
    MalformedToken,
}

/// Why a presented invitation token was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RedeemError {
    #[error("invitation token is malformed")]
    Malformed,
    #[error("invitation token does not match")]
    Mismatch,
    #[error("invitation has expired")]
    Expired,
}
