#[cfg(feature = "traditional")]
use crate::asymmetric::errors::{EncryptionError, KeyGenerationError};
use thiserror::Error;

/// 加密操作可能遇到的错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error (JSON)")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[cfg(feature = "traditional")]
    #[error("Key generation error: {0}")]
    KeyGeneration(#[from] KeyGenerationError),

    #[cfg(feature = "traditional")]
    #[error("Encryption error: {0}")]
    Encryption(#[from] EncryptionError),
}

pub type Result<T> = std::result::Result<T, Error>;
