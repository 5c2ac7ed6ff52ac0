//! Token encoding
//!
//! Produces `B64(header).B64(claims).B64(signature)` where the signature is
//! computed over the first two segments joined by a dot.

use crate::algorithm::{AlgorithmId, get_algorithm};
use crate::claims::Claims;
use crate::error::Result;
use crate::keys::Key;
use crate::token::TokenHeader;
use crate::utils::{base64url, json};
use serde_json::{Map, Value};

/// Builds and signs compact JWTs
///
/// # Example
///
/// ```
/// use jwtseam::*;
///
/// let token = TokenEncoder::new(AlgorithmId::HS256)
///     .key_id("2024-01")
///     .encode(&Claims::new().with("sub", "user123"), &Key::symmetric(b"secret".to_vec()))
///     .unwrap();
///
/// assert_eq!(token.split('.').count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenEncoder {
    algorithm: AlgorithmId,
    key_id: Option<String>,
    extra_headers: Option<Map<String, Value>>,
}

impl TokenEncoder {
    /// Create an encoder for the given algorithm
    pub fn new(algorithm: AlgorithmId) -> Self {
        Self {
            algorithm,
            key_id: None,
            extra_headers: None,
        }
    }

    /// Set the `kid` header parameter
    pub fn key_id(mut self, kid: impl Into<String>) -> Self {
        self.key_id = Some(kid.into());
        self
    }

    /// Add an extra header parameter
    ///
    /// `alg` and `typ` are always set by the encoder and cannot be replaced.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_headers
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Merge a map of extra header parameters
    pub fn headers(mut self, headers: Map<String, Value>) -> Self {
        self.extra_headers
            .get_or_insert_with(Map::new)
            .extend(headers);
        self
    }

    /// The header this encoder would emit
    pub fn build_header(&self) -> TokenHeader {
        TokenHeader::new(
            self.algorithm,
            self.key_id.clone(),
            self.extra_headers.clone(),
        )
    }

    /// Serialize, sign and assemble a token
    pub fn encode(&self, claims: &Claims, key: &Key) -> Result<String> {
        encode_with_header(&self.build_header(), self.algorithm, claims, key)
    }
}

pub(crate) fn encode_with_header(
    header: &TokenHeader,
    algorithm: AlgorithmId,
    claims: &Claims,
    key: &Key,
) -> Result<String> {
    let header_b64 = base64url::encode_segment(&json::serialize_header(header)?);
    let payload_b64 = base64url::encode_segment(&json::serialize_claims(claims)?);
    let signing_input = format!("{header_b64}.{payload_b64}");

    let signature = get_algorithm(&algorithm).sign(signing_input.as_bytes(), key)?;

    tracing::debug!(
        algorithm = %algorithm,
        kid = ?header.key_id(),
        claims = claims.len(),
        "encoded token"
    );

    Ok(format!(
        "{signing_input}.{}",
        base64url::encode_segment(&signature)
    ))
}
