// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid size string: '{0}' (expected <number>[k|m|g])")]
    InvalidSize(String),

    #[error("Size overflows 64 bits: '{0}'")]
    SizeOverflow(String),

    #[error("Missing required property: {0}")]
    MissingProperty(&'static str),
}

pub type Result<T> = std::result::Result<T, DomainError>;
