use crate::claims::{Claims, Clock};
use crate::error::{Error, Result};

/// Configuration for claims validation
///
/// Leeway is the clock-skew tolerance applied to every time check. It defaults
/// to zero and is always passed per call; there is no process-wide setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimsValidation {
    validate_exp: bool,
    validate_nbf: bool,
    validate_iat: bool,
    leeway_seconds: u64,
}

impl Default for ClaimsValidation {
    fn default() -> Self {
        Self {
            validate_exp: true,
            validate_nbf: true,
            validate_iat: true,
            leeway_seconds: 0,
        }
    }
}

impl ClaimsValidation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock-skew leeway in seconds
    pub fn leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds;
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.validate_nbf = false;
        self
    }

    /// Disable issued-at validation
    pub fn no_iat_validation(mut self) -> Self {
        self.validate_iat = false;
        self
    }

    pub fn leeway_seconds(&self) -> u64 {
        self.leeway_seconds
    }
}

/// Claims validator
pub struct ClaimsValidator;

impl ClaimsValidator {
    /// Validate time claims against the clock
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// `nbf`, then `iat`, then `exp`.
    pub fn validate(claims: &Claims, config: &ClaimsValidation, clock: &dyn Clock) -> Result<()> {
        Self::validate_at(claims, config, clock.now())
    }

    pub(crate) fn validate_at(claims: &Claims, config: &ClaimsValidation, now: i64) -> Result<()> {
        let leeway = config.leeway_seconds;
        let skew = i64::try_from(leeway).unwrap_or(i64::MAX);

        if config.validate_nbf {
            if let Some(nbf) = claims.not_before()? {
                if now.saturating_add(skew) < nbf {
                    return Err(Error::TokenNotYetValid {
                        not_before: nbf,
                        now,
                        leeway,
                    });
                }
            }
        }

        if config.validate_iat {
            if let Some(iat) = claims.issued_at()? {
                if now.saturating_add(skew) < iat {
                    return Err(Error::TokenIssuedInFuture {
                        issued_at: iat,
                        now,
                        leeway,
                    });
                }
            }
        }

        if config.validate_exp {
            if let Some(exp) = claims.expiration()? {
                if now.saturating_sub(skew) >= exp {
                    return Err(Error::TokenExpired {
                        expired_at: exp,
                        now,
                        leeway,
                    });
                }
            }
        }

        Ok(())
    }
}
