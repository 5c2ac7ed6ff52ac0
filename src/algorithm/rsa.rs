use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::{Key, RsaPrivateKey};

use ring::rand::SystemRandom;
use ring::signature::{self, RsaKeyPair, UnparsedPublicKey};
use std::borrow::Cow;

/// RS256 algorithm (RSASSA-PKCS1-v1_5 with SHA-256)
pub struct RS256;

/// RS384 algorithm (RSASSA-PKCS1-v1_5 with SHA-384)
pub struct RS384;

/// RS512 algorithm (RSASSA-PKCS1-v1_5 with SHA-512)
pub struct RS512;

impl Algorithm for RS256 {
    fn name(&self) -> &'static str {
        "RS256"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        sign_rsa(self.name(), signing_input, key, &signature::RSA_PKCS1_SHA256)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(
            self.name(),
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA256,
        )
    }
}

impl Algorithm for RS384 {
    fn name(&self) -> &'static str {
        "RS384"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        sign_rsa(self.name(), signing_input, key, &signature::RSA_PKCS1_SHA384)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(
            self.name(),
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA384,
        )
    }
}

impl Algorithm for RS512 {
    fn name(&self) -> &'static str {
        "RS512"
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        sign_rsa(self.name(), signing_input, key, &signature::RSA_PKCS1_SHA512)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(
            self.name(),
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA512,
        )
    }
}

fn key_pair(algorithm: &str, key: &RsaPrivateKey) -> Result<RsaKeyPair> {
    RsaKeyPair::from_pkcs8(key.as_der())
        .or_else(|_| RsaKeyPair::from_der(key.as_der()))
        .map_err(|e| Error::key(algorithm, format!("invalid RSA private key: {e}")))
}

/// Generic RSA signing
fn sign_rsa(
    algorithm: &str,
    signing_input: &[u8],
    key: &Key,
    encoding: &'static dyn signature::RsaEncoding,
) -> Result<Vec<u8>> {
    let key_pair = key_pair(algorithm, key.as_rsa_private(algorithm)?)?;

    let rng = SystemRandom::new();
    let mut signature = vec![0u8; key_pair.public().modulus_len()];
    key_pair
        .sign(encoding, &rng, signing_input, &mut signature)
        .map_err(|_| Error::key(algorithm, "RSA signing failed"))?;

    Ok(signature)
}

/// Generic RSA signature verification
///
/// A private key is accepted in place of the public key; its public half is
/// used.
fn verify_rsa(
    algorithm: &str,
    signing_input: &[u8],
    signature: &[u8],
    key: &Key,
    parameters: &'static dyn signature::VerificationAlgorithm,
) -> Result<()> {
    let public_key_der: Cow<'_, [u8]> = match key {
        Key::RsaPublic(public) => {
            public.validate(algorithm)?;
            Cow::Borrowed(public.as_der())
        }
        Key::RsaPrivate(private) => {
            Cow::Owned(key_pair(algorithm, private)?.public().as_ref().to_vec())
        }
        Key::Symmetric(_) => return Err(key.unexpected(algorithm, "RSA public or private key")),
    };

    UnparsedPublicKey::new(parameters, public_key_der.as_ref())
        .verify(signing_input, signature)
        .map_err(|_| Error::SignatureInvalid)
}
