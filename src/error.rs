// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("failed to open cipher: {0}")]
    Open(String),

    #[error("cipher handle is not open")]
    NotOpen,

    #[error("invalid key size {got}; accepted key sizes are {accepted:?}")]
    InvalidKeySize { got: usize, accepted: Vec<usize> },

    #[error("invalid iv size {got}; expected {expected}")]
    InvalidIvSize { got: usize, expected: usize },

    #[error("cipher operation failed: {0}")]
    Operation(String),

    #[error("cipher handle already closed")]
    DoubleClose,
}

pub type Result<T> = std::result::Result<T, CipherError>;
