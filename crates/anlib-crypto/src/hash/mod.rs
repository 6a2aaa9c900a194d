//! Digest functions and the Base64 codec
//!
//! This module provides the uppercase-hex text digest (MD5 by default)
//! and the Base64 helpers used for key material, ciphertext and signatures.

pub mod base64;
pub mod digest;

pub use self::digest::{
    digest, digest_bytes, digest_named, digest_with, digest_with_config, verify_digest,
    DigestAlgorithm,
};
