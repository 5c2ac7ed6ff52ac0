//! Token validator with builder pattern
//!
//! All decode settings are configured upfront on the builder, then the
//! stages run in a fixed order when [`TokenValidator::run`] is called:
//!
//! 1. Parse token (done before creating the validator)
//! 2. Check the header algorithm against the allow-list
//! 3. Select the key and verify the signature
//! 4. Parse the payload and validate time claims (nbf, iat, exp)
//!
//! Nothing is optional in the sense of being skipped: a validator without an
//! algorithm policy rejects every token, and one without keys cannot verify
//! any signature.

use crate::algorithm::AlgorithmPolicy;
use crate::claims::{ClaimsValidation, Clock, SystemClock};
use crate::error::Result;
use crate::keys::KeySet;
use crate::token::{ParsedToken, Token};
use std::collections::HashMap;

/// JWT token validator with builder pattern
///
/// # Example
///
/// ```
/// use jwtseam::*;
///
/// let secret = Key::symmetric(b"my-secret".to_vec());
/// let encoded = TokenEncoder::new(AlgorithmId::HS256)
///     .encode(&Claims::new().with("sub", "user123").with("exp", 4_000_000_000i64), &secret)
///     .unwrap();
///
/// let token = TokenValidator::new(ParsedToken::from_string(&encoded).unwrap())
///     .allow_algorithms(AlgorithmPolicy::hs256_only())
///     .with_keys(secret)
///     .validate_claims(ClaimsValidation::default().leeway(30))
///     .run()
///     .unwrap();
///
/// assert_eq!(token.subject(), Some("user123"));
/// ```
pub struct TokenValidator {
    parsed: ParsedToken,
    policy: AlgorithmPolicy,
    keys: KeySet,
    claims_validation: ClaimsValidation,
    clock: Box<dyn Clock>,
}

impl TokenValidator {
    /// Create a new validator from a parsed token
    pub fn new(parsed: ParsedToken) -> Self {
        Self {
            parsed,
            policy: AlgorithmPolicy::allow_only(Vec::new()),
            keys: KeySet::ByKid(HashMap::new()),
            claims_validation: ClaimsValidation::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Restrict which algorithms are accepted
    ///
    /// Required: the default policy is empty and rejects every algorithm.
    pub fn allow_algorithms(mut self, policy: AlgorithmPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the verification key, or a key map indexed by `kid`
    pub fn with_keys(mut self, keys: impl Into<KeySet>) -> Self {
        self.keys = keys.into();
        self
    }

    /// Configure time claim validation
    pub fn validate_claims(mut self, config: ClaimsValidation) -> Self {
        self.claims_validation = config;
        self
    }

    /// Replace the system clock used for time claims
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Run the validation pipeline
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that fails:
    /// - `Error::UnsupportedAlgorithm` - Header names an unknown algorithm or `none`
    /// - `Error::AlgorithmNotAllowed` - Algorithm not in the configured policy
    /// - `Error::KeyNotFound` - No key matches the header `kid`
    /// - `Error::KeyError` - Key unusable for the algorithm
    /// - `Error::SignatureInvalid` - Signature verification failed
    /// - `Error::InvalidJson` - Payload is not a JSON object
    /// - `Error::TokenNotYetValid`, `Error::TokenIssuedInFuture`, `Error::TokenExpired`
    pub fn run(self) -> Result<Token> {
        let result = self
            .parsed
            .verify(&self.policy, &self.keys)
            .and_then(|verified| verified.validate(&self.claims_validation, self.clock.as_ref()));

        if let Err(ref e) = result {
            tracing::debug!(error = %e, "token rejected");
        }

        result
    }
}
