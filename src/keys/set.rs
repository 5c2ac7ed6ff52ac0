use crate::error::{Error, Result};
use crate::keys::Key;
use std::collections::HashMap;

/// The key, or map of keys, a token is verified against
///
/// A single key is used for every token regardless of its header. A map is
/// indexed by the `kid` header parameter; tokens without a `kid`, or with a
/// `kid` that is not in the map, are rejected with [`Error::KeyNotFound`].
#[derive(Debug, Clone)]
pub enum KeySet {
    Single(Key),
    ByKid(HashMap<String, Key>),
}

impl KeySet {
    /// Select the verification key for a token header's `kid`
    pub fn select(&self, kid: Option<&str>) -> Result<&Key> {
        match self {
            KeySet::Single(key) => Ok(key),
            KeySet::ByKid(keys) => {
                let kid = kid.ok_or(Error::KeyNotFound { kid: None })?;
                keys.get(kid).ok_or_else(|| Error::KeyNotFound {
                    kid: Some(kid.to_string()),
                })
            }
        }
    }
}

impl From<Key> for KeySet {
    fn from(key: Key) -> Self {
        KeySet::Single(key)
    }
}

impl From<HashMap<String, Key>> for KeySet {
    fn from(keys: HashMap<String, Key>) -> Self {
        KeySet::ByKid(keys)
    }
}

impl<K: Into<String>> FromIterator<(K, Key)> for KeySet {
    fn from_iter<I: IntoIterator<Item = (K, Key)>>(iter: I) -> Self {
        KeySet::ByKid(iter.into_iter().map(|(kid, key)| (kid.into(), key)).collect())
    }
}
