use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::Key;

use constant_time_eq::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

impl Algorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        compute_mac::<Hmac<Sha256>>(self.name(), signing_input, key)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        let expected = compute_mac::<Hmac<Sha256>>(self.name(), signing_input, key)?;
        compare(&expected, signature)
    }
}

impl Algorithm for HS384 {
    fn name(&self) -> &'static str {
        "HS384"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        compute_mac::<Hmac<Sha384>>(self.name(), signing_input, key)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        let expected = compute_mac::<Hmac<Sha384>>(self.name(), signing_input, key)?;
        compare(&expected, signature)
    }
}

impl Algorithm for HS512 {
    fn name(&self) -> &'static str {
        "HS512"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        compute_mac::<Hmac<Sha512>>(self.name(), signing_input, key)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        let expected = compute_mac::<Hmac<Sha512>>(self.name(), signing_input, key)?;
        compare(&expected, signature)
    }
}

fn compute_mac<M: Mac + KeyInit>(algorithm: &str, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
    let secret = key.as_symmetric(algorithm)?.as_bytes();
    if secret.is_empty() {
        return Err(Error::key(algorithm, "HMAC secret must not be empty"));
    }

    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|_| Error::key(algorithm, "invalid HMAC key length"))?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Constant-time comparison of the recomputed and provided MACs
fn compare(expected: &[u8], provided: &[u8]) -> Result<()> {
    if provided.len() != expected.len() {
        return Err(Error::SignatureInvalid);
    }

    if constant_time_eq(expected, provided) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}
