//! Substitutable JWT facade
//!
//! Application code depends on [`JwtProvider`] rather than on free functions,
//! so a test can hand it a fake or a mock instead of real cryptography.
//! [`Jwt`] is the real implementation and simply forwards to the encoder,
//! the validation pipeline and the signing primitives.

use crate::algorithm::{self, AlgorithmId, AlgorithmPolicy};
use crate::claims::{Claims, ClaimsValidation, Clock, SystemClock};
use crate::encoder::encode_with_header;
use crate::error::Result;
use crate::keys::{Key, KeySet};
use crate::token::{ParsedToken, TokenHeader};
use serde_json::{Map, Value};

/// The encode, decode and sign operations as one injectable seam
///
/// Implementations hold no per-call state and may be shared across threads.
#[cfg_attr(test, mockall::automock)]
pub trait JwtProvider: Send + Sync {
    /// Sign `claims` into a compact token
    ///
    /// `key_id` becomes the `kid` header. `extra_headers` are added to the
    /// header but never replace `alg` or `typ`.
    fn encode(
        &self,
        claims: &Claims,
        key: &Key,
        alg: AlgorithmId,
        key_id: Option<String>,
        extra_headers: Option<Map<String, Value>>,
    ) -> Result<String>;

    /// Verify a token and return its claims
    ///
    /// Only algorithms in `allowed` are accepted. A key map in `keys` is
    /// indexed by the header `kid`. `leeway` widens every time check by
    /// that many seconds.
    fn decode(
        &self,
        token: &str,
        keys: &KeySet,
        allowed: &AlgorithmPolicy,
        leeway: u64,
    ) -> Result<Claims>;

    /// Produce raw signature bytes over an arbitrary message
    fn sign(&self, message: &[u8], key: &Key, alg: AlgorithmId) -> Result<Vec<u8>>;
}

/// Default [`JwtProvider`] backed by this crate's codec
///
/// # Example
///
/// ```
/// use jwtseam::*;
///
/// let jwt = Jwt::new();
/// let key = Key::symmetric(b"secret".to_vec());
///
/// let token = jwt
///     .encode(&Claims::new().with("sub", "user123"), &key, AlgorithmId::HS256, None, None)
///     .unwrap();
/// let claims = jwt
///     .decode(&token, &KeySet::from(key), &AlgorithmPolicy::hs256_only(), 0)
///     .unwrap();
///
/// assert_eq!(claims.subject(), Some("user123"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Jwt<C = SystemClock> {
    clock: C,
}

impl Jwt {
    /// Create a provider that reads the system clock
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Jwt<C> {
    /// Create a provider with a custom time source for `exp`, `nbf` and `iat`
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> JwtProvider for Jwt<C> {
    fn encode(
        &self,
        claims: &Claims,
        key: &Key,
        alg: AlgorithmId,
        key_id: Option<String>,
        extra_headers: Option<Map<String, Value>>,
    ) -> Result<String> {
        let header = TokenHeader::new(alg, key_id, extra_headers);
        encode_with_header(&header, alg, claims, key)
    }

    fn decode(
        &self,
        token: &str,
        keys: &KeySet,
        allowed: &AlgorithmPolicy,
        leeway: u64,
    ) -> Result<Claims> {
        let config = ClaimsValidation::default().leeway(leeway);

        let result = ParsedToken::from_string(token)
            .and_then(|parsed| parsed.verify(allowed, keys))
            .and_then(|verified| verified.validate(&config, &self.clock));

        match result {
            Ok(token) => Ok(token.into_claims()),
            Err(e) => {
                tracing::debug!(error = %e, "token rejected");
                Err(e)
            }
        }
    }

    fn sign(&self, message: &[u8], key: &Key, alg: AlgorithmId) -> Result<Vec<u8>> {
        algorithm::sign(message, key, alg)
    }
}
