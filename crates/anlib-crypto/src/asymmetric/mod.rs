//! Asymmetric cryptography
//!
//! RSA key pairs, PKCS#1 v1.5 encryption in both directions, and PKCS#1 v1.5
//! signatures. Every operation takes Base64 key material and keeps no state.

pub mod keys;
pub mod rsa;
pub mod signature;

pub use self::keys::{KeyPairMaterial, MIN_KEY_BITS};
pub use self::rsa::{
    decrypt_text, decrypt_with_private_key, decrypt_with_public_key, encrypt_text,
    encrypt_with_private_key, encrypt_with_public_key, generate_key_pair, generate_key_pair_with,
    max_plaintext_len, sign, sign_text, sign_with, sign_with_config, verify, verify_text, verify_with,
    verify_with_config,
};
pub use self::signature::SignatureAlgorithm;
