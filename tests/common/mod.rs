//! Shared fixtures for integration tests
//!
//! RSA key generation is slow, so each test binary generates its pairs once.

#![allow(dead_code)]

use jwtseam::*;
use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use std::sync::OnceLock;

pub const NOW: i64 = 1_700_000_000;

/// One RSA key pair in every format the crate accepts
pub struct RsaFixture {
    pub private_pkcs8_pem: String,
    pub private_pkcs1_pem: String,
    pub private_pkcs8_der: Vec<u8>,
    pub public_spki_pem: String,
    pub public_pkcs1_pem: String,
    pub public_pkcs1_der: Vec<u8>,
}

impl RsaFixture {
    fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let private_key =
            rsa::RsaPrivateKey::new(&mut rng, 2048).expect("failed to generate RSA key");
        let public_key = private_key.to_public_key();

        Self {
            private_pkcs8_pem: private_key
                .to_pkcs8_pem(LineEnding::LF)
                .expect("PKCS#8 PEM")
                .to_string(),
            private_pkcs1_pem: private_key
                .to_pkcs1_pem(LineEnding::LF)
                .expect("PKCS#1 PEM")
                .to_string(),
            private_pkcs8_der: private_key
                .to_pkcs8_der()
                .expect("PKCS#8 DER")
                .as_bytes()
                .to_vec(),
            public_spki_pem: public_key
                .to_public_key_pem(LineEnding::LF)
                .expect("SPKI PEM"),
            public_pkcs1_pem: public_key
                .to_pkcs1_pem(LineEnding::LF)
                .expect("PKCS#1 public PEM"),
            public_pkcs1_der: public_key
                .to_pkcs1_der()
                .expect("PKCS#1 public DER")
                .as_bytes()
                .to_vec(),
        }
    }

    pub fn signing_key(&self) -> Key {
        Key::rsa_private_pem(&self.private_pkcs8_pem).expect("valid private PEM")
    }

    pub fn verifying_key(&self) -> Key {
        Key::rsa_public_pem(&self.public_spki_pem).expect("valid public PEM")
    }
}

pub fn rsa_fixture() -> &'static RsaFixture {
    static FIXTURE: OnceLock<RsaFixture> = OnceLock::new();
    FIXTURE.get_or_init(RsaFixture::generate)
}

pub fn other_rsa_fixture() -> &'static RsaFixture {
    static FIXTURE: OnceLock<RsaFixture> = OnceLock::new();
    FIXTURE.get_or_init(RsaFixture::generate)
}

pub fn secret(bytes: &[u8]) -> Key {
    Key::symmetric(bytes.to_vec())
}

/// Claims with the standard registered set, valid around [`NOW`]
pub fn standard_claims() -> Claims {
    Claims::new()
        .with("iss", "https://example.com")
        .with("sub", "test-user")
        .with("aud", "test-app")
        .with("iat", NOW)
        .with("exp", NOW + 3600)
}

pub fn provider() -> Jwt<FixedClock> {
    Jwt::with_clock(FixedClock(NOW))
}

/// Decode a segment, flip one bit, and re-encode it canonically
pub fn flip_bit(segment: &str, byte: usize) -> String {
    let mut bytes = utils::decode_segment(segment).expect("valid segment");
    let index = byte.min(bytes.len() - 1);
    bytes[index] ^= 0x01;
    utils::encode_segment(&bytes)
}

/// Replace one of the three segments of a token
pub fn replace_segment(token: &str, index: usize, segment: &str) -> String {
    let mut parts: Vec<&str> = token.split('.').collect();
    parts[index] = segment;
    parts.join(".")
}

/// Hand-assemble a token from raw header and payload JSON
pub fn assemble(header: &str, payload: &str, signature: &[u8]) -> String {
    format!(
        "{}.{}.{}",
        utils::encode_segment(header.as_bytes()),
        utils::encode_segment(payload.as_bytes()),
        utils::encode_segment(signature)
    )
}
