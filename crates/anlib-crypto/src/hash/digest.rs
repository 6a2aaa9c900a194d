//! Text digests rendered as uppercase hex
//!
//! Input text is always hashed as its UTF-8 bytes. MD5 is the default
//! algorithm; SHA-256 and SHA-512 can be selected explicitly.

use std::{fmt, str::FromStr};

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

use crate::{
    config::CryptoConfig,
    error::{Error, Result},
};

// ============================================================================
// Algorithm Selection
// ============================================================================

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// MD5 (16-byte output)
    #[default]
    Md5,
    /// SHA-256 (32-byte output)
    Sha256,
    /// SHA-512 (64-byte output)
    Sha512,
}

impl DigestAlgorithm {
    /// Digest length in bytes
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha512 => 64,
        }
    }

    /// Canonical algorithm name
    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = Error;

    /// Parse `MD5`, `SHA-256` or `SHA-512` (case-insensitive, dash optional)
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "MD5" => Ok(DigestAlgorithm::Md5),
            "SHA256" => Ok(DigestAlgorithm::Sha256),
            "SHA512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(Error::AlgorithmUnavailable(format!(
                "{} digest is not supported",
                s
            ))),
        }
    }
}

// ============================================================================
// Digest Functions
// ============================================================================

/// Compute the raw digest of `data`
pub fn digest_bytes(data: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Md5 => Md5::digest(data).to_vec(),
        DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

/// MD5 digest of `input` as 32 uppercase hex characters
///
/// # Example
/// ```
/// use anlib_crypto::digest;
///
/// assert_eq!(digest("abc").unwrap(), "900150983CD24FB0D6963F7D28E17F72");
/// ```
pub fn digest(input: &str) -> Result<String> {
    digest_with(input, DigestAlgorithm::Md5)
}

/// Digest of `input` with the given algorithm, as uppercase hex
pub fn digest_with(input: &str, algorithm: DigestAlgorithm) -> Result<String> {
    Ok(hex::encode_upper(digest_bytes(input.as_bytes(), algorithm)))
}

/// Digest of `input` with the algorithm from `config`
pub fn digest_with_config(input: &str, config: &CryptoConfig) -> Result<String> {
    digest_with(input, config.digest_algorithm)
}

/// Digest of `input` with an algorithm selected by name
///
/// # Errors
/// [`Error::AlgorithmUnavailable`] if `algorithm` names an unsupported digest.
pub fn digest_named(input: &str, algorithm: &str) -> Result<String> {
    digest_with(input, algorithm.parse()?)
}

/// Check `input` against a previously computed MD5 hex digest
///
/// The comparison ignores hex letter case, so lowercase digests produced by
/// other tools match as well.
pub fn verify_digest(input: &str, expected_hex: &str) -> Result<bool> {
    let computed = digest(input)?;
    Ok(computed.eq_ignore_ascii_case(expected_hex.trim()))
}
