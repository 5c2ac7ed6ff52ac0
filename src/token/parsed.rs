use crate::algorithm::{AlgorithmId, AlgorithmPolicy, get_algorithm};
use crate::error::{Error, Result};
use crate::keys::KeySet;
use crate::token::{TokenHeader, VerifiedToken};
use crate::utils::{base64url, json};

/// A JWT token that has been parsed but not yet verified
///
/// This is the first stage in the token validation pipeline.
/// At this stage, we have:
/// - Split the token into three segments (header, payload, signature)
/// - Decoded all three segments from Base64URL
/// - Parsed the header JSON
///
/// The payload is kept as raw bytes; it is only parsed once the signature
/// has been verified.
///
/// Next step: VerifiedToken (after algorithm policy and signature checks)
#[derive(Debug, Clone)]
pub struct ParsedToken {
    header: TokenHeader,
    signing_input: String,
    raw_payload: Vec<u8>,
    signature: Vec<u8>,
}

impl ParsedToken {
    /// Parse a JWT token from a string
    ///
    /// # Example
    /// ```ignore
    /// let token = ParsedToken::from_string("eyJ...").unwrap();
    /// ```
    pub fn from_string(token: &str) -> Result<Self> {
        let mut parts = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::MalformedToken);
        };

        let header_bytes = base64url::decode_segment(header_b64)?;
        let raw_payload = base64url::decode_segment(payload_b64)?;
        let signature = base64url::decode_segment(signature_b64)?;

        let header = json::parse_header(&header_bytes)?;

        tracing::trace!(
            header_len = header_bytes.len(),
            payload_len = raw_payload.len(),
            signature_len = signature.len(),
            "parsed token segments"
        );

        Ok(Self {
            header,
            signing_input: format!("{header_b64}.{payload_b64}"),
            raw_payload,
            signature,
        })
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the algorithm from the header
    pub fn algorithm(&self) -> Result<AlgorithmId> {
        self.header.parse_algorithm()
    }

    /// Get the key ID from the header
    pub fn key_id(&self) -> Option<&str> {
        self.header.key_id()
    }

    /// Get the raw payload bytes (before verification)
    ///
    /// Note: You should not trust this data until after signature verification!
    pub fn raw_payload(&self) -> &[u8] {
        &self.raw_payload
    }

    /// Get the signing input (header.payload, still encoded)
    pub fn signing_input(&self) -> &str {
        &self.signing_input
    }

    /// Get the decoded signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Check the algorithm against the policy, select a key and verify the signature
    ///
    /// The algorithm comes from the header but is only trusted once the
    /// caller's policy allows it, and the key is chosen from the caller's
    /// key set, never from the token.
    pub fn verify(self, policy: &AlgorithmPolicy, keys: &KeySet) -> Result<VerifiedToken> {
        let algorithm = self.algorithm()?;
        policy.validate(&algorithm)?;

        let key = keys.select(self.key_id())?;
        get_algorithm(&algorithm).verify(self.signing_input.as_bytes(), &self.signature, key)?;

        tracing::debug!(algorithm = %algorithm, kid = ?self.key_id(), "signature verified");

        Ok(VerifiedToken::new(self.header, algorithm, self.raw_payload))
    }
}
