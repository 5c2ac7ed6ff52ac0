use crate::algorithm::AlgorithmId;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JWT header structure
///
/// Serializes as `typ`, `alg`, `kid` (when present), followed by any extra
/// parameters in key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Token type (typically "JWT")
    #[serde(rename = "typ", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Key ID (for key map selection)
    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// Any other header parameters
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenHeader {
    /// Build the header for a token about to be signed
    ///
    /// Extra parameters are merged in, but can never replace `typ` or `alg`,
    /// nor `kid` when a key id is given explicitly. A `kid` extra that is not
    /// a string is discarded.
    pub fn new(
        algorithm: AlgorithmId,
        key_id: Option<String>,
        extra_headers: Option<Map<String, Value>>,
    ) -> Self {
        let mut extra = extra_headers.unwrap_or_default();
        extra.remove("typ");
        extra.remove("alg");

        let key_id = match key_id {
            Some(kid) => {
                extra.remove("kid");
                Some(kid)
            }
            // A non-string kid could not be read back, so it is dropped
            None => match extra.remove("kid") {
                Some(Value::String(kid)) => Some(kid),
                _ => None,
            },
        };

        Self {
            token_type: Some("JWT".to_string()),
            algorithm: algorithm.as_str().to_string(),
            key_id,
            extra,
        }
    }

    /// Parse algorithm from header
    pub fn parse_algorithm(&self) -> Result<AlgorithmId> {
        self.algorithm.parse()
    }

    /// Get algorithm as string
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }

    /// Get key ID if present
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// Get an extra header parameter
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}
