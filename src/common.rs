//! 通用模块，包含错误处理与配置

pub mod config;
pub mod errors;

pub use self::config::{ConfigFile, CryptoConfig};
pub use self::errors::Error;
