use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyGenerationError {
    /// 熵源失效或参数无法生成密钥
    #[error("RSA key generation failed: {0}")]
    Rsa(String),
    #[error("generated modulus has {got} bits, expected {expected}")]
    ModulusMismatch { got: usize, expected: usize },
}

#[derive(Error, Debug)]
pub enum EncryptionError {
    /// PKCS#1 v1.5 最多容纳 `模数字节数 - 11` 字节明文
    #[error("plaintext of {len} bytes exceeds the PKCS#1 v1.5 limit of {max} bytes")]
    PlaintextTooLong { len: usize, max: usize },
    #[error("ciphertext of {len} bytes does not match any supported RSA modulus size")]
    InvalidCiphertextLength { len: usize },
    #[error("RSA error: {0}")]
    Rsa(String),
}
