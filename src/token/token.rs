//! Public Token type for decoded JWT tokens
//!
//! A `Token` has passed every decode stage: parsing, the algorithm policy,
//! signature verification and time claim validation.

use crate::algorithm::AlgorithmId;
use crate::claims::Claims;
use crate::error::Result;
use crate::token::TokenHeader;

/// A fully validated JWT token
///
/// # Examples
///
/// ```
/// use jwtseam::*;
///
/// let key = Key::symmetric(b"secret".to_vec());
/// let encoded = TokenEncoder::new(AlgorithmId::HS256)
///     .encode(&Claims::new().with("sub", "user123"), &key)
///     .unwrap();
///
/// let token = TokenValidator::new(ParsedToken::from_string(&encoded).unwrap())
///     .allow_algorithms(AlgorithmPolicy::hs256_only())
///     .with_keys(key)
///     .run()
///     .unwrap();
///
/// assert_eq!(token.subject(), Some("user123"));
/// assert_eq!(token.header().token_type.as_deref(), Some("JWT"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    header: TokenHeader,
    algorithm: AlgorithmId,
    claims: Claims,
}

impl Token {
    pub(crate) fn new(header: TokenHeader, algorithm: AlgorithmId, claims: Claims) -> Self {
        Self {
            header,
            algorithm,
            claims,
        }
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the algorithm
    pub fn algorithm(&self) -> &AlgorithmId {
        &self.algorithm
    }

    /// Get all claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Consume the token, keeping only the claims
    pub fn into_claims(self) -> Claims {
        self.claims
    }

    /// Get the issuer (iss claim)
    pub fn issuer(&self) -> Option<&str> {
        self.claims.issuer()
    }

    /// Get the subject (sub claim)
    pub fn subject(&self) -> Option<&str> {
        self.claims.subject()
    }

    /// Get the expiration time (exp claim) as Unix timestamp
    pub fn expiration(&self) -> Result<Option<i64>> {
        self.claims.expiration()
    }
}
