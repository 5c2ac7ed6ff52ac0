mod clock;
mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use validator::{ClaimsValidation, ClaimsValidator};

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JWT payload: a JSON object of claims
///
/// Any JSON-compatible value may be stored. The registered time claims
/// (`exp`, `nbf`, `iat`) are read as numeric dates (seconds since the Unix
/// epoch) by [`expiration`](Self::expiration), [`not_before`](Self::not_before)
/// and [`issued_at`](Self::issued_at).
///
/// # Examples
///
/// ```
/// use jwtseam::Claims;
///
/// let claims = Claims::new()
///     .with("sub", "user123")
///     .with("exp", 1_900_000_000);
///
/// assert_eq!(claims.subject(), Some("user123"));
/// assert_eq!(claims.expiration().unwrap(), Some(1_900_000_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Create an empty claims object
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build claims from any value that serializes to a JSON object
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => Err(Error::InvalidJson(
                "Claims must serialize to a JSON object".to_string(),
            )),
            Err(e) => Err(Error::InvalidJson(format!(
                "Failed to serialize claims: {e}"
            ))),
        }
    }

    /// Deserialize the claims into a caller-defined type
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| Error::InvalidJson(format!("Failed to deserialize claims: {e}")))
    }

    /// Add a claim, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Insert a claim, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Issuer (iss)
    pub fn issuer(&self) -> Option<&str> {
        self.string_claim("iss")
    }

    /// Subject (sub)
    pub fn subject(&self) -> Option<&str> {
        self.string_claim("sub")
    }

    /// Audience (aud), when it is a single string
    pub fn audience(&self) -> Option<&str> {
        self.string_claim("aud")
    }

    /// JWT ID (jti)
    pub fn jwt_id(&self) -> Option<&str> {
        self.string_claim("jti")
    }

    /// Expiration Time (exp)
    pub fn expiration(&self) -> Result<Option<i64>> {
        self.numeric_date("exp")
    }

    /// Not Before (nbf)
    pub fn not_before(&self) -> Result<Option<i64>> {
        self.numeric_date("nbf")
    }

    /// Issued At (iat)
    pub fn issued_at(&self) -> Result<Option<i64>> {
        self.numeric_date("iat")
    }

    fn string_claim(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    // `null` counts as absent. Fractional seconds truncate toward zero.
    fn numeric_date(&self, name: &str) -> Result<Option<i64>> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(Some(match n.as_i64() {
                Some(seconds) => seconds,
                // u64 above i64::MAX or a float; `as` saturates and truncates
                None => n.as_f64().unwrap_or_default() as i64,
            })),
            Some(_) => Err(Error::InvalidJson(format!(
                "Claim '{name}' must be a numeric date"
            ))),
        }
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Claims> for Map<String, Value> {
    fn from(claims: Claims) -> Self {
        claims.0
    }
}
