use crate::algorithm::AlgorithmId;
use crate::error::Result;
use crate::keys::Key;

/// Core algorithm trait that all JWT signature algorithms implement
///
/// Different algorithm families (HMAC, RSA) implement this trait. The signing
/// input is always `base64url(header) || "." || base64url(payload)`.
pub trait Algorithm {
    /// The algorithm identifier (e.g., "HS256", "RS256")
    fn name(&self) -> &'static str;

    /// Compute the raw signature bytes for the signing input
    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>>;

    /// Verify raw signature bytes against the signing input
    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()>;
}

/// Type alias for boxed algorithm trait objects
pub type SignatureAlgorithm = Box<dyn Algorithm + Send + Sync>;

/// Get the implementation for the given algorithm ID
pub fn get_algorithm(algorithm: &AlgorithmId) -> SignatureAlgorithm {
    match algorithm {
        AlgorithmId::HS256 => Box::new(super::hmac::HS256),
        AlgorithmId::HS384 => Box::new(super::hmac::HS384),
        AlgorithmId::HS512 => Box::new(super::hmac::HS512),

        AlgorithmId::RS256 => Box::new(super::rsa::RS256),
        AlgorithmId::RS384 => Box::new(super::rsa::RS384),
        AlgorithmId::RS512 => Box::new(super::rsa::RS512),
    }
}
