//! # Traditional Cryptographic Algorithm Module
//!
//! This module contains implementations of traditional cryptographic algorithms such as RSA.
//!
//! ---
//!
//! # 传统加密算法模块
//!
//! 本模块包含RSA等传统加密算法的实现。

pub mod rsa;

pub use self::rsa::{Ciphertext, EphemeralRsaEncryptor};
