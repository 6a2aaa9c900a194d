//! AnLib Cryptography Library
//!
//! Stateless helpers over the RustCrypto stack:
//!
//! - [`hash`] - uppercase hex text digests (MD5 by default) and the Base64 codec
//! - [`asymmetric`] - RSA key generation, encryption and signatures keyed by
//!   Base64 key material
//!
//! Text is always converted to bytes as UTF-8.

pub mod config;
pub mod error;

pub mod asymmetric;
pub mod hash;

// Re-export commonly used types for convenience
pub use asymmetric::{
    decrypt_text, decrypt_with_private_key, decrypt_with_public_key, encrypt_text,
    encrypt_with_private_key, encrypt_with_public_key, generate_key_pair, generate_key_pair_with,
    max_plaintext_len, sign, sign_text, sign_with, sign_with_config, verify, verify_text, verify_with,
    verify_with_config,
    KeyPairMaterial, SignatureAlgorithm,
};
pub use config::CryptoConfig;
pub use error::{Error, Result};
pub use hash::{
    base64, digest, digest_named, digest_with, digest_with_config, verify_digest, DigestAlgorithm,
};
