//! # AnLib
//!
//! MD5 digests and RSA key, cipher and signature helpers
//!
//! ## 模块
//!
//! - `anlib_crypto` - 基础加密原语

// Re-export all sub-crates
pub use anlib_crypto;
pub use anlib_crypto::*;
