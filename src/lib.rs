//! # Ephemeral-Seal: 一次性 RSA 加密
//!
//! `ephemeral-seal` 提供两个彼此独立、无状态的操作：
//!
//! - **加密器**：每次调用都生成一个全新的 RSA 密钥对（默认 4096 位），
//!   使用 PKCS#1 v1.5 填充在该公钥下加密明文，然后丢弃私钥。
//! - **加法器**：返回两个整数之和。
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ephemeral_seal::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let encryptor = EphemeralRsaEncryptor::default();
//!     let ciphertext = encryptor.encrypt(b"Hello, Seal!")?;
//!     assert_eq!(ciphertext.len(), 512);
//!
//!     assert_eq!(ephemeral_seal::add(2, 3), 5);
//!     Ok(())
//! }
//! ```

pub mod arithmetic;
pub mod common;

#[cfg(feature = "traditional")]
pub mod asymmetric;

pub use arithmetic::add;
pub use common::errors::{Error, Result};

#[cfg(feature = "traditional")]
pub use asymmetric::systems::traditional::rsa::{Ciphertext, EphemeralRsaEncryptor};

/// 最常用的 trait、结构体和枚举。
pub mod prelude {
    pub use crate::common::config::{ConfigFile, CryptoConfig};
    pub use crate::common::errors::{Error, Result};

    #[cfg(feature = "traditional")]
    pub use crate::asymmetric::errors::{EncryptionError, KeyGenerationError};
    #[cfg(feature = "traditional")]
    pub use crate::asymmetric::systems::traditional::rsa::{Ciphertext, EphemeralRsaEncryptor};
    #[cfg(feature = "traditional")]
    pub use crate::asymmetric::traits::OneShotEncryptor;
}

/// 使用默认配置（RSA-4096）的一次性加密。
///
/// 等价于 `EphemeralRsaEncryptor::default().encrypt(plaintext)`。
#[cfg(feature = "traditional")]
pub fn encrypt(plaintext: &[u8]) -> Result<Ciphertext> {
    use asymmetric::traits::OneShotEncryptor;
    EphemeralRsaEncryptor::default().encrypt(plaintext)
}

/// The version of the `ephemeral-seal` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
