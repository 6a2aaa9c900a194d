//! 加密配置
//!
//! 密钥长度、签名算法和摘要算法的默认值

use serde::{Deserialize, Serialize};

use crate::{
    asymmetric::{keys::MIN_KEY_BITS, signature::SignatureAlgorithm},
    error::{Error, Result},
    hash::DigestAlgorithm,
};

/// 加密配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoConfig {
    /// RSA 模数长度（位）
    pub key_bits: usize,
    /// 签名算法
    pub signature_algorithm: SignatureAlgorithm,
    /// 摘要算法
    pub digest_algorithm: DigestAlgorithm,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            key_bits: 2048,
            signature_algorithm: SignatureAlgorithm::default(),
            digest_algorithm: DigestAlgorithm::default(),
        }
    }
}

impl CryptoConfig {
    /// 兼容旧系统的配置：1024 位密钥和 MD5withRSA 签名
    pub fn legacy() -> Self {
        Self {
            key_bits: 1024,
            signature_algorithm: SignatureAlgorithm::Md5WithRsa,
            digest_algorithm: DigestAlgorithm::Md5,
        }
    }

    /// 设置密钥长度
    pub fn with_key_bits(mut self, key_bits: usize) -> Self {
        self.key_bits = key_bits;
        self
    }

    /// 设置签名算法
    pub fn with_signature_algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
        self.signature_algorithm = algorithm;
        self
    }

    /// 设置摘要算法
    pub fn with_digest_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.digest_algorithm = algorithm;
        self
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        if self.key_bits < MIN_KEY_BITS {
            return Err(Error::ConfigError(format!(
                "key_bits must be at least {}, got {}",
                MIN_KEY_BITS, self.key_bits
            )));
        }
        if self.key_bits % 8 != 0 {
            return Err(Error::ConfigError(format!(
                "key_bits must be a multiple of 8, got {}",
                self.key_bits
            )));
        }
        Ok(())
    }

    /// 从 JSON 加载并验证
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::ConfigError(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 导出为 JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("config serialization failed: {}", e)))
    }
}
