//! # jwtseam - Substitutable JWT encode, decode and sign
//!
//! **jwtseam** encodes, verifies and signs JSON Web Tokens behind a single
//! trait, [`JwtProvider`]. Code that issues or checks tokens takes a
//! `JwtProvider` instead of calling free functions, so tests can swap in a
//! fake or a mock without touching real keys.
//!
//! ## Overview
//!
//! A compact JWT is three Base64URL segments joined by dots: a JSON header,
//! a JSON claims object and a signature over the first two segments.
//! Verification needs the caller to say which algorithms are acceptable.
//! The header's `alg` is never trusted on its own, which is what stops an
//! RSA public key from being replayed as an HMAC secret.
//!
//! ## Quick Start
//!
//! ```
//! use jwtseam::*;
//!
//! let jwt = Jwt::new();
//! let key = Key::symmetric(b"secret".to_vec());
//!
//! let token = jwt
//!     .encode(&Claims::new().with("sub", "user123"), &key, AlgorithmId::HS256, None, None)
//!     .unwrap();
//!
//! let claims = jwt
//!     .decode(&token, &KeySet::from(key), &AlgorithmPolicy::hs256_only(), 0)
//!     .unwrap();
//!
//! assert_eq!(claims.subject(), Some("user123"));
//! ```
//!
//! ## Decode Flow
//!
//! ```text
//! &str
//!     │ ParsedToken::from_string()   (three segments, Base64URL, header JSON)
//!     ▼
//! ParsedToken
//!     │ .verify(policy, keys)        (algorithm allow-list, kid, signature)
//!     ▼
//! VerifiedToken
//!     │ .validate(config, clock)     (payload JSON, nbf, iat, exp)
//!     ▼
//! Token
//! ```
//!
//! [`TokenValidator`] runs the same pipeline from a builder, and
//! [`TokenEncoder`] is the builder for the encode side.
//!
//! ## Algorithms
//!
//! | Family | Algorithms            | Key                                   |
//! |--------|-----------------------|---------------------------------------|
//! | HMAC   | HS256, HS384, HS512   | [`Key::symmetric`]                    |
//! | RSA    | RS256, RS384, RS512   | [`Key::rsa_private_pem`] to sign, [`Key::rsa_public_pem`] to verify |
//!
//! The unsigned `none` algorithm is always rejected.
//!
//! ## Logging
//!
//! Pipeline stages emit [`tracing`] events at `debug` and `trace` level.
//! Key material never appears in logs.

// Core modules
pub mod error;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims and validation
pub mod claims;

// Token types
pub mod token;

// Builders
pub mod encoder;
pub mod validator;

// Substitutable facade (main public API)
pub mod jwt;

#[cfg(test)]
mod test_keys;

// ============================================================================
// PUBLIC API
// ============================================================================

// Facade
pub use jwt::{Jwt, JwtProvider};

// Builder flow types
pub use encoder::TokenEncoder;
pub use token::{ParsedToken, Token, TokenHeader, VerifiedToken};
pub use validator::TokenValidator;

// Configuration types
pub use algorithm::{AlgorithmId, AlgorithmPolicy};
pub use claims::{Claims, ClaimsValidation, Clock, FixedClock, SystemClock};
pub use keys::{Key, KeySet};

pub use error::{Error, Result};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::test_keys::{rsa_private_key, rsa_public_key};

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_full_flow_hmac() {
        let key = Key::symmetric(b"my-secret-key".to_vec());
        let token = TokenEncoder::new(AlgorithmId::HS256)
            .encode(
                &Claims::new()
                    .with("iss", "https://example.com")
                    .with("sub", "user123")
                    .with("exp", NOW + 3600)
                    .with("iat", NOW),
                &key,
            )
            .expect("Encode failed");

        let parsed = ParsedToken::from_string(&token).expect("Parse failed");
        let verified = parsed
            .verify(&AlgorithmPolicy::hs256_only(), &KeySet::from(key))
            .expect("Verification failed");
        let validated = verified
            .validate(&ClaimsValidation::default(), &FixedClock(NOW))
            .expect("Validation failed");

        assert_eq!(validated.issuer(), Some("https://example.com"));
        assert_eq!(validated.subject(), Some("user123"));
    }

    #[test]
    fn test_full_flow_rsa() {
        let jwt = Jwt::with_clock(FixedClock(NOW));
        let signing_key = rsa_private_key();
        let verifying_key = rsa_public_key();

        for alg in [AlgorithmId::RS256, AlgorithmId::RS384, AlgorithmId::RS512] {
            let token = jwt
                .encode(&Claims::new().with("sub", "rsa-user"), &signing_key, alg, None, None)
                .unwrap();
            let claims = jwt
                .decode(&token, &verifying_key.clone().into(), &AlgorithmPolicy::rsa_any(), 0)
                .unwrap();
            assert_eq!(claims.subject(), Some("rsa-user"));
        }
    }

    #[test]
    fn test_none_algorithm_rejected() {
        let token = format!(
            "{}.{}.",
            utils::encode_segment(br#"{"alg":"none","typ":"JWT"}"#),
            utils::encode_segment(br#"{"sub":"attacker"}"#),
        );

        let result = Jwt::new().decode(
            &token,
            &Key::symmetric(b"secret".to_vec()).into(),
            &AlgorithmPolicy::hmac_any(),
            0,
        );
        assert_eq!(result, Err(Error::UnsupportedAlgorithm("none".to_string())));
    }

    #[test]
    fn test_public_key_as_hmac_secret_rejected() {
        // Classic confusion: sign HS256 with the bytes of the RSA public key
        let Key::RsaPublic(public_key) = rsa_public_key() else {
            unreachable!("fixture is an RSA public key");
        };
        let public_der = public_key.as_der().to_vec();
        let token = Jwt::new()
            .encode(
                &Claims::new().with("sub", "attacker"),
                &Key::symmetric(public_der.clone()),
                AlgorithmId::HS256,
                None,
                None,
            )
            .unwrap();

        let result = Jwt::new().decode(
            &token,
            &Key::rsa_public_der(public_der).into(),
            &AlgorithmPolicy::rs256_only(),
            0,
        );
        assert!(matches!(result, Err(Error::AlgorithmNotAllowed { .. })));
    }
}
