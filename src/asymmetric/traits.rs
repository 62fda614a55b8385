//! 定义了一次性加密器的核心 Trait。
use std::fmt::Debug;

/// `OneShotEncryptor` 接收明文并返回不透明的密文。
///
/// 实现者自行管理密钥材料，调用方拿不到任何可用于解密的密钥。
pub trait OneShotEncryptor {
    /// 密文类型
    type Output: AsRef<[u8]> + Debug;

    /// 错误类型
    type Error: std::error::Error + Send + Sync + 'static;

    /// 加密一段明文
    fn encrypt(&self, plaintext: &[u8]) -> Result<Self::Output, Self::Error>;
}
