//! RSA key generation, encryption and signatures over Base64 key material
//!
//! Public keys are Base64 SPKI DER and private keys Base64 PKCS#8 DER, as
//! produced by [`generate_key_pair`]. Encryption uses PKCS#1 v1.5 padding
//! without chunking, so every encrypt operation accepts at most
//! [`max_plaintext_len`] bytes.

use rsa::{traits::PublicKeyParts, BigUint, Pkcs1v15Encrypt, Pkcs1v15Sign, RsaPublicKey};

use super::{
    keys::{parse_private_key, parse_public_key, KeyPairMaterial},
    signature::SignatureAlgorithm,
};
use crate::{
    base64,
    config::CryptoConfig,
    error::{Error, Result},
};

/// PKCS#1 v1.5 overhead: two marker bytes, eight padding bytes, one separator
const PKCS1_OVERHEAD: usize = 11;

// ============================================================================
// Key Generation
// ============================================================================

/// Generate a fresh key pair with a `bits`-bit modulus
pub fn generate_key_pair(bits: usize) -> Result<KeyPairMaterial> {
    if bits < 2048 {
        tracing::warn!("Generating a {}-bit RSA key; 2048 bits or more is recommended", bits);
    } else {
        tracing::debug!("Generating a {}-bit RSA key", bits);
    }
    KeyPairMaterial::generate(bits)
}

/// Generate a key pair with the size from `config`
pub fn generate_key_pair_with(config: &CryptoConfig) -> Result<KeyPairMaterial> {
    config.validate()?;
    generate_key_pair(config.key_bits)
}

/// Largest input accepted by the encrypt operations for this key
pub fn max_plaintext_len(public_key: &str) -> Result<usize> {
    let public_key = parse_public_key(public_key)?;
    Ok(public_key.size() - PKCS1_OVERHEAD)
}

// ============================================================================
// Encryption / Decryption
// ============================================================================

/// Encrypt with the public key (PKCS#1 v1.5 type 2 padding)
pub fn encrypt_with_public_key(data: &[u8], public_key: &str) -> Result<Vec<u8>> {
    let public_key = parse_public_key(public_key)?;
    tracing::debug!("RSA public key encrypt, {} bytes", data.len());

    let mut rng = rand::thread_rng();
    public_key
        .encrypt(&mut rng, Pkcs1v15Encrypt, data)
        .map_err(|e| Error::EncryptionError(format!("RSA encryption failed: {}", e)))
}

/// Decrypt data produced by [`encrypt_with_public_key`]
pub fn decrypt_with_private_key(data: &[u8], private_key: &str) -> Result<Vec<u8>> {
    let private_key = parse_private_key(private_key)?;
    tracing::debug!("RSA private key decrypt, {} bytes", data.len());

    private_key
        .decrypt(Pkcs1v15Encrypt, data)
        .map_err(|e| Error::DecryptionError(format!("RSA decryption failed: {}", e)))
}

/// Encrypt with the private key (PKCS#1 v1.5 type 1 padding)
///
/// Anyone holding the public key can recover the data with
/// [`decrypt_with_public_key`]; this proves origin, not confidentiality.
pub fn encrypt_with_private_key(data: &[u8], private_key: &str) -> Result<Vec<u8>> {
    let private_key = parse_private_key(private_key)?;
    tracing::debug!("RSA private key encrypt, {} bytes", data.len());

    // The unprefixed signature scheme is exactly type 1 padding over raw data
    let mut rng = rand::thread_rng();
    private_key
        .sign_with_rng(&mut rng, Pkcs1v15Sign::new_unprefixed(), data)
        .map_err(|e| Error::EncryptionError(format!("RSA encryption failed: {}", e)))
}

/// Decrypt data produced by [`encrypt_with_private_key`]
pub fn decrypt_with_public_key(data: &[u8], public_key: &str) -> Result<Vec<u8>> {
    let public_key = parse_public_key(public_key)?;
    tracing::debug!("RSA public key decrypt, {} bytes", data.len());

    let encoded = public_key_op(&public_key, data)?;
    unpad_type1(&encoded)
}

/// Apply the raw RSA public operation and left-pad the result to the modulus size
fn public_key_op(public_key: &RsaPublicKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let k = public_key.size();
    if ciphertext.len() != k {
        return Err(Error::DecryptionError(format!(
            "ciphertext must be {} bytes, got {}",
            k,
            ciphertext.len()
        )));
    }

    let c = BigUint::from_bytes_be(ciphertext);
    if &c >= public_key.n() {
        return Err(Error::DecryptionError(
            "ciphertext is out of range for this key".to_string(),
        ));
    }

    let m = rsa::hazmat::rsa_encrypt(public_key, &c)
        .map_err(|e| Error::DecryptionError(format!("RSA public operation failed: {}", e)))?
        .to_bytes_be();
    let mut encoded = vec![0u8; k];
    encoded[k - m.len()..].copy_from_slice(&m);
    Ok(encoded)
}

/// Strip `00 01 FF.. 00` padding
fn unpad_type1(encoded: &[u8]) -> Result<Vec<u8>> {
    let invalid = || Error::DecryptionError("invalid PKCS#1 v1.5 type 1 padding".to_string());

    if encoded.len() < PKCS1_OVERHEAD || encoded[0] != 0x00 || encoded[1] != 0x01 {
        return Err(invalid());
    }

    let body = &encoded[2..];
    match body.iter().position(|&b| b != 0xFF) {
        Some(pad_len) if pad_len >= 8 && body[pad_len] == 0x00 => Ok(body[pad_len + 1..].to_vec()),
        _ => Err(invalid()),
    }
}

// ============================================================================
// Signatures
// ============================================================================

/// Sign `data` with SHA256withRSA and return the Base64 signature
pub fn sign(data: &[u8], private_key: &str) -> Result<String> {
    sign_with(data, private_key, SignatureAlgorithm::default())
}

/// Sign `data` with an explicit signature algorithm
pub fn sign_with(data: &[u8], private_key: &str, algorithm: SignatureAlgorithm) -> Result<String> {
    let private_key = parse_private_key(private_key)?;
    if algorithm.is_legacy() {
        tracing::warn!("Signing with {}, which relies on a broken digest", algorithm);
    }

    let mut rng = rand::thread_rng();
    let hashed = algorithm.hash(data);
    let signature = private_key
        .sign_with_rng(&mut rng, algorithm.scheme(), &hashed)
        .map_err(|e| Error::SigningError(format!("RSA signing failed: {}", e)))?;
    Ok(base64::encode(signature))
}

/// Sign `data` with the signature algorithm from `config`
pub fn sign_with_config(data: &[u8], private_key: &str, config: &CryptoConfig) -> Result<String> {
    sign_with(data, private_key, config.signature_algorithm)
}

/// Verify a SHA256withRSA signature
///
/// Returns `Ok(false)` when the signature does not match; errors are reserved
/// for key or signature values that cannot be decoded.
pub fn verify(data: &[u8], public_key: &str, signature: &str) -> Result<bool> {
    verify_with(data, public_key, signature, SignatureAlgorithm::default())
}

/// Verify a signature made with an explicit signature algorithm
pub fn verify_with(
    data: &[u8],
    public_key: &str,
    signature: &str,
    algorithm: SignatureAlgorithm,
) -> Result<bool> {
    let public_key = parse_public_key(public_key)?;
    let signature = base64::decode(signature)
        .map_err(|e| Error::InvalidSignatureEncoding(e.to_string()))?;
    if algorithm.is_legacy() {
        tracing::warn!("Verifying a {} signature", algorithm);
    }

    let hashed = algorithm.hash(data);
    Ok(public_key
        .verify(algorithm.scheme(), &hashed, &signature)
        .is_ok())
}

/// Verify a signature made with the signature algorithm from `config`
pub fn verify_with_config(
    data: &[u8],
    public_key: &str,
    signature: &str,
    config: &CryptoConfig,
) -> Result<bool> {
    verify_with(data, public_key, signature, config.signature_algorithm)
}

// ============================================================================
// Text Helpers
// ============================================================================

/// Sign the UTF-8 bytes of `text`
pub fn sign_text(private_key: &str, text: &str) -> Result<String> {
    sign(text.as_bytes(), private_key)
}

/// Verify a signature over the UTF-8 bytes of `text`
pub fn verify_text(public_key: &str, signature: &str, text: &str) -> Result<bool> {
    verify(text.as_bytes(), public_key, signature)
}

/// Encrypt the UTF-8 bytes of `text` and return Base64 ciphertext
pub fn encrypt_text(public_key: &str, text: &str) -> Result<String> {
    let ciphertext = encrypt_with_public_key(text.as_bytes(), public_key)?;
    Ok(base64::encode(ciphertext))
}

/// Decrypt Base64 ciphertext from [`encrypt_text`] back into text
pub fn decrypt_text(private_key: &str, ciphertext: &str) -> Result<String> {
    let ciphertext = base64::decode(ciphertext)?;
    let plaintext = decrypt_with_private_key(&ciphertext, private_key)?;
    String::from_utf8(plaintext)
        .map_err(|e| Error::DecryptionError(format!("plaintext is not UTF-8: {}", e)))
}
