use thiserror::Error;

/// Crypto模块的错误类型
#[derive(Error, Debug)]
pub enum Error {
    /// 请求的算法不可用
    #[error("Algorithm unavailable: {0}")]
    AlgorithmUnavailable(String),

    /// 密钥生成失败
    #[error("Key generation error: {0}")]
    KeyGenerationError(String),

    /// 密钥数据无法解析
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Base64 解码错误
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// 加密失败
    #[error("Encryption error: {0}")]
    EncryptionError(String),

    /// 解密失败
    #[error("Decryption error: {0}")]
    DecryptionError(String),

    /// 签名失败
    #[error("Signing error: {0}")]
    SigningError(String),

    /// 签名的 Base64 编码无效
    #[error("Invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    /// 配置错误
    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, Error>;
