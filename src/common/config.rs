//!
//! # 通用配置模块
//!
//! 定义加密参数以及从 JSON 文件加载配置的方式。
//!
use crate::common::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// 允许的 RSA 模数位数
pub const SUPPORTED_RSA_KEY_BITS: [usize; 3] = [2048, 3072, 4096];

/// 加密配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CryptoConfig {
    /// RSA密钥位数
    pub rsa_key_bits: usize,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self { rsa_key_bits: 4096 }
    }
}

impl CryptoConfig {
    /// 检查配置是否可用于生成密钥
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_RSA_KEY_BITS.contains(&self.rsa_key_bits) {
            return Err(Error::Configuration(format!(
                "不支持的RSA密钥位数 {}，可选值: {:?}",
                self.rsa_key_bits, SUPPORTED_RSA_KEY_BITS
            )));
        }
        Ok(())
    }
}

/// 完整配置文件
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ConfigFile {
    /// 加密配置
    #[serde(default)]
    pub crypto: CryptoConfig,
}

impl ConfigFile {
    /// 从 JSON 字符串解析并校验配置
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ConfigFile = serde_json::from_str(json)?;
        config.crypto.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            rsa_key_bits = config.crypto.rsa_key_bits,
            "loaded configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_crypto_config_default() {
        let config = CryptoConfig::default();
        assert_eq!(config.rsa_key_bits, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unsupported_key_bits_rejected() {
        for bits in [0, 512, 1024, 4095, 8192] {
            let config = CryptoConfig { rsa_key_bits: bits };
            assert!(matches!(config.validate(), Err(Error::Configuration(_))));
        }
    }

    #[test]
    fn test_from_json_str_fills_defaults() {
        let config = ConfigFile::from_json_str("{}").unwrap();
        assert_eq!(config, ConfigFile::default());

        let config = ConfigFile::from_json_str(r#"{"crypto": {}}"#).unwrap();
        assert_eq!(config.crypto.rsa_key_bits, 4096);
    }

    #[test]
    fn test_from_json_str_custom_bits() {
        let config = ConfigFile::from_json_str(r#"{"crypto": {"rsa_key_bits": 2048}}"#).unwrap();
        assert_eq!(config.crypto.rsa_key_bits, 2048);
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(matches!(
            ConfigFile::from_json_str("not json"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            ConfigFile::from_json_str(r#"{"crypto": {"rsa_key_bits": 1000}}"#),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"crypto": {{"rsa_key_bits": 3072}}}}"#).unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.crypto.rsa_key_bits, 3072);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigFile::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
