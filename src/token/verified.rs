use crate::algorithm::AlgorithmId;
use crate::claims::{Claims, ClaimsValidation, ClaimsValidator, Clock};
use crate::error::Result;
use crate::token::{Token, TokenHeader};
use crate::utils::json;

/// A JWT token whose signature has been cryptographically verified
///
/// This is the second stage in the token validation pipeline.
/// At this stage:
/// - The token has been parsed
/// - The algorithm has been checked against the caller's policy
/// - The signature has been verified with the selected key
/// - The payload can now be safely parsed
///
/// Next step: Token (after claims validation)
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    header: TokenHeader,
    algorithm: AlgorithmId,
    raw_payload: Vec<u8>,
}

impl VerifiedToken {
    pub(crate) fn new(header: TokenHeader, algorithm: AlgorithmId, raw_payload: Vec<u8>) -> Self {
        Self {
            header,
            algorithm,
            raw_payload,
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

    /// Get the raw payload JSON bytes
    pub fn raw_payload(&self) -> &[u8] {
        &self.raw_payload
    }

    /// Parse the payload as a JSON claims object, without validating it
    pub fn parse_claims(&self) -> Result<Claims> {
        json::parse_claims(&self.raw_payload)
    }

    /// Validate time claims and move to the final Token state
    pub fn validate(self, config: &ClaimsValidation, clock: &dyn Clock) -> Result<Token> {
        let claims = self.parse_claims()?;
        ClaimsValidator::validate(&claims, config, clock)?;
        Ok(Token::new(self.header, self.algorithm, claims))
    }
}
