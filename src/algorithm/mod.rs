mod traits;

pub mod hmac;
pub mod rsa;

pub use traits::{Algorithm, SignatureAlgorithm, get_algorithm};

use crate::error::{Error, Result};
use crate::keys::Key;
use std::str::FromStr;

/// Algorithm identifier from the JWT `alg` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    #[default]
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,

    /// RSA PKCS#1 v1.5 with SHA-256
    RS256,

    /// RSA PKCS#1 v1.5 with SHA-384
    RS384,

    /// RSA PKCS#1 v1.5 with SHA-512
    RS512,
}

impl AlgorithmId {
    /// Every supported algorithm
    pub const ALL: [AlgorithmId; 6] = [
        AlgorithmId::HS256,
        AlgorithmId::HS384,
        AlgorithmId::HS512,
        AlgorithmId::RS256,
        AlgorithmId::RS384,
        AlgorithmId::RS512,
    ];

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",
            AlgorithmId::RS256 => "RS256",
            AlgorithmId::RS384 => "RS384",
            AlgorithmId::RS512 => "RS512",
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512
        )
    }

    /// Check if algorithm is asymmetric (RSA)
    pub fn is_asymmetric(&self) -> bool {
        !self.is_symmetric()
    }
}

impl FromStr for AlgorithmId {
    type Err = Error;

    /// Parse an algorithm identifier, case-sensitively
    ///
    /// The unsigned `none` algorithm is never supported.
    fn from_str(s: &str) -> Result<Self> {
        AlgorithmId::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for AlgorithmId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Sign a message with the given key and algorithm, returning raw signature bytes
pub fn sign(message: &[u8], key: &Key, algorithm: AlgorithmId) -> Result<Vec<u8>> {
    get_algorithm(&algorithm).sign(message, key)
}

/// Verify raw signature bytes over a message
pub fn verify(message: &[u8], signature: &[u8], key: &Key, algorithm: AlgorithmId) -> Result<()> {
    get_algorithm(&algorithm).verify(message, signature, key)
}

/// Caller-supplied allow-list of algorithms
///
/// A token is only verified if its header `alg` is in the policy. The policy
/// is never derived from the token itself, which is what keeps an attacker
/// from switching an RSA-signed token to HMAC. There is deliberately no
/// default: an empty policy rejects every token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmPolicy {
    allowed: Vec<AlgorithmId>,
}

impl AlgorithmPolicy {
    /// Create a policy that allows only specific algorithms
    pub fn allow_only(algorithms: Vec<AlgorithmId>) -> Self {
        Self {
            allowed: algorithms,
        }
    }

    /// Create a policy from algorithm names such as `"HS256"`
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<_>>>()
            .map(Self::allow_only)
    }

    /// Policy that allows only HS256
    pub fn hs256_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS256])
    }

    /// Policy that allows only HS384
    pub fn hs384_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS384])
    }

    /// Policy that allows only HS512
    pub fn hs512_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS512])
    }

    /// Policy that allows any HMAC algorithm (HS256, HS384, HS512)
    pub fn hmac_any() -> Self {
        Self::allow_only(vec![
            AlgorithmId::HS256,
            AlgorithmId::HS384,
            AlgorithmId::HS512,
        ])
    }

    /// Policy that allows only RS256
    pub fn rs256_only() -> Self {
        Self::allow_only(vec![AlgorithmId::RS256])
    }

    /// Policy that allows any RSA algorithm (RS256, RS384, RS512)
    pub fn rsa_any() -> Self {
        Self::allow_only(vec![
            AlgorithmId::RS256,
            AlgorithmId::RS384,
            AlgorithmId::RS512,
        ])
    }

    /// Check if an algorithm is allowed
    pub fn is_allowed(&self, algorithm: &AlgorithmId) -> bool {
        self.allowed.contains(algorithm)
    }

    /// Validate algorithm against policy
    pub fn validate(&self, algorithm: &AlgorithmId) -> Result<()> {
        if self.is_allowed(algorithm) {
            Ok(())
        } else {
            Err(Error::AlgorithmNotAllowed {
                found: algorithm.to_string(),
                allowed: self.allowed.iter().map(ToString::to_string).collect(),
            })
        }
    }

    /// Get list of allowed algorithms
    pub fn allowed_algorithms(&self) -> &[AlgorithmId] {
        &self.allowed
    }
}

impl FromIterator<AlgorithmId> for AlgorithmPolicy {
    fn from_iter<I: IntoIterator<Item = AlgorithmId>>(iter: I) -> Self {
        Self::allow_only(iter.into_iter().collect())
    }
}
