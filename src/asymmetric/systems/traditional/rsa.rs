//! `EphemeralRsaEncryptor` 提供一次性的 RSA PKCS#1 v1.5 加密。
//! 每次调用都会生成新的密钥对，私钥只在调用期间存在，
//! 离开作用域时由 `RsaPrivateKey` 的 drop 实现擦除。

use crate::asymmetric::errors::{EncryptionError, KeyGenerationError};
use crate::asymmetric::traits::OneShotEncryptor;
use crate::common::config::{CryptoConfig, SUPPORTED_RSA_KEY_BITS};
use crate::common::errors::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rsa::rand_core::{CryptoRngCore, OsRng as RsaOsRng};
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// PKCS#1 v1.5 加密填充的固定开销（字节）
pub const PKCS1V15_OVERHEAD: usize = 11;

/// 给定模数字节数时 PKCS#1 v1.5 可加密的最大明文长度
pub fn max_plaintext_len_for(modulus_bytes: usize) -> usize {
    modulus_bytes.saturating_sub(PKCS1V15_OVERHEAD)
}

/// RSA 密文，长度恒等于模数字节数
///
/// 反序列化时同样校验长度，只接受受支持模数对应的字节数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_bytes::ByteBuf")]
pub struct Ciphertext(#[serde(with = "serde_bytes")] Vec<u8>);

impl TryFrom<Vec<u8>> for Ciphertext {
    type Error = EncryptionError;

    fn try_from(bytes: Vec<u8>) -> std::result::Result<Self, Self::Error> {
        if !SUPPORTED_RSA_KEY_BITS
            .iter()
            .any(|bits| bits.div_ceil(8) == bytes.len())
        {
            return Err(EncryptionError::InvalidCiphertextLength { len: bytes.len() });
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<serde_bytes::ByteBuf> for Ciphertext {
    type Error = EncryptionError;

    fn try_from(buf: serde_bytes::ByteBuf) -> std::result::Result<Self, Self::Error> {
        Self::try_from(buf.into_vec())
    }
}

impl Ciphertext {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// 标准 base64 编码，便于文本传输
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.0)
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Ciphertext> for Vec<u8> {
    fn from(ciphertext: Ciphertext) -> Self {
        ciphertext.0
    }
}

/// 单次调用内使用的密钥对，不对外暴露
pub(crate) struct EphemeralKeyPair {
    private_key: RsaPrivateKey,
}

impl EphemeralKeyPair {
    pub(crate) fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R, bits: usize) -> Result<Self> {
        debug!(bits, "generating ephemeral RSA key pair");
        let private_key = RsaPrivateKey::new(rng, bits)
            .map_err(|e| KeyGenerationError::Rsa(e.to_string()))?;
        check_modulus_bits(private_key.n().bits(), bits)?;

        trace!(bits, "ephemeral RSA key pair ready");
        Ok(Self { private_key })
    }

    pub(crate) fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey::from(&self.private_key)
    }
}

fn check_modulus_bits(got: usize, expected: usize) -> std::result::Result<(), KeyGenerationError> {
    if got != expected {
        return Err(KeyGenerationError::ModulusMismatch { got, expected });
    }
    Ok(())
}

fn encrypt_under<R: CryptoRngCore>(
    public_key: &RsaPublicKey,
    rng: &mut R,
    plaintext: &[u8],
) -> Result<Ciphertext> {
    let ciphertext = public_key
        .encrypt(rng, Pkcs1v15Encrypt, plaintext)
        .map_err(|e| match e {
            rsa::Error::MessageTooLong => EncryptionError::PlaintextTooLong {
                len: plaintext.len(),
                max: max_plaintext_len_for(public_key.size()),
            },
            other => EncryptionError::Rsa(format!("RSA加密失败: {}", other)),
        })?;
    Ok(Ciphertext(ciphertext))
}

/// 一次性 RSA 加密器
///
/// 每次加密都生成新的密钥对，因此同一明文的两次加密结果必然不同，
/// 且任何人（包括调用方）都无法解密。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemeralRsaEncryptor {
    bits: usize,
}

impl Default for EphemeralRsaEncryptor {
    fn default() -> Self {
        Self {
            bits: CryptoConfig::default().rsa_key_bits,
        }
    }
}

impl EphemeralRsaEncryptor {
    pub fn new(config: &CryptoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bits: config.rsa_key_bits,
        })
    }

    pub fn key_bits(&self) -> usize {
        self.bits
    }

    /// 密文长度（模数字节数）
    pub fn ciphertext_len(&self) -> usize {
        self.bits.div_ceil(8)
    }

    pub fn max_plaintext_len(&self) -> usize {
        max_plaintext_len_for(self.ciphertext_len())
    }

    /// 使用调用方提供的随机源完成密钥生成与填充
    pub fn encrypt_with_rng<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
    ) -> Result<Ciphertext> {
        // 超长明文无论密钥如何都会失败，先于密钥生成检查
        let max = self.max_plaintext_len();
        if plaintext.len() > max {
            warn!(len = plaintext.len(), max, "rejecting oversized plaintext");
            return Err(EncryptionError::PlaintextTooLong {
                len: plaintext.len(),
                max,
            }
            .into());
        }

        let key_pair = EphemeralKeyPair::generate(rng, self.bits)?;
        let ciphertext = encrypt_under(&key_pair.public_key(), rng, plaintext)?;

        debug!(
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "encrypted under ephemeral RSA key"
        );
        Ok(ciphertext)
    }
}

impl OneShotEncryptor for EphemeralRsaEncryptor {
    type Output = Ciphertext;
    type Error = Error;

    fn encrypt(&self, plaintext: &[u8]) -> Result<Ciphertext> {
        let mut rng = RsaOsRng;
        self.encrypt_with_rng(&mut rng, plaintext)
    }
}
