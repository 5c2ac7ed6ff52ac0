//! Key types for JWT signing and verification
//!
//! - Symmetric secrets (for HMAC algorithms)
//! - RSA private keys (for RSA signing; also accepted for verification)
//! - RSA public keys (for RSA verification)
//!
//! Key material is zeroized on drop and never printed by `Debug`.

mod set;

pub use set::KeySet;

use crate::error::{Error, Result};
use ::rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPublicKey};
use ::rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey};
use zeroize::Zeroizing;

/// A key that can be used to sign or verify a JWT
#[derive(Debug, Clone)]
pub enum Key {
    /// Shared secret for HMAC algorithms
    Symmetric(SymmetricKey),

    /// RSA private key for RS* signing
    RsaPrivate(RsaPrivateKey),

    /// RSA public key for RS* verification
    RsaPublic(RsaPublicKey),
}

impl Key {
    /// Create a symmetric key from secret bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Key::Symmetric(SymmetricKey::new(secret.into()))
    }

    /// Create an RSA private key from DER (PKCS#8 `PrivateKeyInfo` or PKCS#1 `RSAPrivateKey`)
    pub fn rsa_private_der(der: impl Into<Vec<u8>>) -> Self {
        Key::RsaPrivate(RsaPrivateKey::new(der.into()))
    }

    /// Create an RSA public key from PKCS#1 `RSAPublicKey` DER
    pub fn rsa_public_der(der: impl Into<Vec<u8>>) -> Self {
        Key::RsaPublic(RsaPublicKey::new(der.into()))
    }

    /// Parse an RSA private key from PEM
    ///
    /// Accepts both `PRIVATE KEY` (PKCS#8) and `RSA PRIVATE KEY` (PKCS#1) blocks.
    pub fn rsa_private_pem(pem: &str) -> Result<Self> {
        let key = ::rsa::RsaPrivateKey::from_pkcs8_pem(pem)
            .or_else(|_| ::rsa::RsaPrivateKey::from_pkcs1_pem(pem))
            .map_err(|e| Error::key("RSA", format!("invalid private key PEM: {e}")))?;

        let der = key
            .to_pkcs8_der()
            .map_err(|e| Error::key("RSA", format!("cannot re-encode private key: {e}")))?;

        Ok(Self::rsa_private_der(der.as_bytes()))
    }

    /// Parse an RSA public key from PEM
    ///
    /// Accepts both `PUBLIC KEY` (SubjectPublicKeyInfo) and `RSA PUBLIC KEY`
    /// (PKCS#1) blocks.
    pub fn rsa_public_pem(pem: &str) -> Result<Self> {
        let key = ::rsa::RsaPublicKey::from_public_key_pem(pem)
            .or_else(|_| ::rsa::RsaPublicKey::from_pkcs1_pem(pem))
            .map_err(|e| Error::key("RSA", format!("invalid public key PEM: {e}")))?;

        let der = key
            .to_pkcs1_der()
            .map_err(|e| Error::key("RSA", format!("cannot re-encode public key: {e}")))?;

        Ok(Self::rsa_public_der(der.as_bytes()))
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Symmetric(_) => "symmetric secret",
            Key::RsaPrivate(_) => "RSA private key",
            Key::RsaPublic(_) => "RSA public key",
        }
    }

    pub(crate) fn as_symmetric(&self, algorithm: &str) -> Result<&SymmetricKey> {
        match self {
            Key::Symmetric(key) => Ok(key),
            _ => Err(self.unexpected(algorithm, "symmetric secret")),
        }
    }

    pub(crate) fn as_rsa_private(&self, algorithm: &str) -> Result<&RsaPrivateKey> {
        match self {
            Key::RsaPrivate(key) => Ok(key),
            _ => Err(self.unexpected(algorithm, "RSA private key")),
        }
    }

    pub(crate) fn unexpected(&self, algorithm: &str, expected: &str) -> Error {
        Error::key(
            algorithm,
            format!("expected {expected}, got {}", self.key_type()),
        )
    }
}

/// Symmetric key for HMAC algorithms
#[derive(Clone)]
pub struct SymmetricKey {
    secret: Zeroizing<Vec<u8>>,
}

impl SymmetricKey {
    /// Create a new symmetric key
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            secret: Zeroizing::new(secret),
        }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for SymmetricKey {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl From<&[u8]> for SymmetricKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl From<String> for SymmetricKey {
    fn from(secret: String) -> Self {
        Self::new(secret.into_bytes())
    }
}

impl From<&str> for SymmetricKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

/// RSA private key (DER-encoded PKCS#8 or PKCS#1)
#[derive(Clone)]
pub struct RsaPrivateKey {
    der: Zeroizing<Vec<u8>>,
}

impl RsaPrivateKey {
    pub fn new(der: Vec<u8>) -> Self {
        Self {
            der: Zeroizing::new(der),
        }
    }

    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

impl std::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPrivateKey").finish_non_exhaustive()
    }
}

/// RSA public key (DER-encoded PKCS#1 `RSAPublicKey`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

impl RsaPublicKey {
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// Check that the bytes parse as a PKCS#1 RSA public key
    pub(crate) fn validate(&self, algorithm: &str) -> Result<()> {
        ::rsa::RsaPublicKey::from_pkcs1_der(&self.der)
            .map(|_| ())
            .map_err(|e| Error::key(algorithm, format!("invalid RSA public key: {e}")))
    }
}
