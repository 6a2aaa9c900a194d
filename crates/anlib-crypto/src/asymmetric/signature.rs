//! RSA signature algorithm selection

use std::{fmt, str::FromStr};

use md5::Md5;
use rsa::Pkcs1v15Sign;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// PKCS#1 v1.5 digest-then-sign combinations
///
/// `Sha256WithRsa` is the default. `Md5WithRsa` only exists to check and
/// produce signatures for peers that still expect `MD5withRSA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SignatureAlgorithm {
    #[default]
    Sha256WithRsa,
    Md5WithRsa,
}

impl SignatureAlgorithm {
    /// JCA-style algorithm name
    pub fn name(self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha256WithRsa => "SHA256withRSA",
            SignatureAlgorithm::Md5WithRsa => "MD5withRSA",
        }
    }

    pub fn is_legacy(self) -> bool {
        matches!(self, SignatureAlgorithm::Md5WithRsa)
    }

    pub(crate) fn hash(self, data: &[u8]) -> Vec<u8> {
        match self {
            SignatureAlgorithm::Sha256WithRsa => Sha256::digest(data).to_vec(),
            SignatureAlgorithm::Md5WithRsa => Md5::digest(data).to_vec(),
        }
    }

    pub(crate) fn scheme(self) -> Pkcs1v15Sign {
        match self {
            SignatureAlgorithm::Sha256WithRsa => Pkcs1v15Sign::new::<Sha256>(),
            SignatureAlgorithm::Md5WithRsa => Pkcs1v15Sign::new::<Md5>(),
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.replace('-', "").to_ascii_uppercase().as_str() {
            "SHA256WITHRSA" => Ok(SignatureAlgorithm::Sha256WithRsa),
            "MD5WITHRSA" => Ok(SignatureAlgorithm::Md5WithRsa),
            _ => Err(Error::AlgorithmUnavailable(format!(
                "{} signature is not supported",
                s
            ))),
        }
    }
}
