//! Base64 codec for key material, ciphertext and signatures
//!
//! Everything that crosses the API boundary as text uses the standard
//! RFC 4648 alphabet with padding. Decoding is strict: whitespace, line
//! breaks and missing padding are rejected instead of being skipped.
//!
//! ## Examples
//! ```
//! use anlib_crypto::base64;
//!
//! let encoded = base64::encode(b"Hello, World!");
//! assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");
//! assert_eq!(base64::decode(&encoded).unwrap(), b"Hello, World!");
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Error, Result};

/// Encode bytes to standard base64 string with padding
pub fn encode<T: AsRef<[u8]>>(data: T) -> String {
    STANDARD.encode(data)
}

/// Decode standard base64 string to bytes
///
/// # Errors
/// [`Error::InvalidEncoding`] if `encoded` is not canonical padded base64.
pub fn decode<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| Error::InvalidEncoding(format!("Base64 decode error: {}", e)))
}
