//!
//! 集成测试的通用辅助函数
//!

use ephemeral_seal::EphemeralRsaEncryptor;

/// 默认的 RSA-4096 加密器
pub fn default_encryptor() -> EphemeralRsaEncryptor {
    EphemeralRsaEncryptor::default()
}

/// 生成指定长度、内容可辨识的明文
pub fn plaintext_of(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
