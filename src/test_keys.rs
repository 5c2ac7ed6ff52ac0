//! RSA key fixtures shared by unit tests, generated once per test binary

use crate::keys::Key;
use ::rsa::pkcs1::EncodeRsaPublicKey;
use ::rsa::pkcs8::EncodePrivateKey;
use std::sync::OnceLock;

struct KeyPair {
    private_der: Vec<u8>,
    public_der: Vec<u8>,
}

fn generate() -> KeyPair {
    let mut rng = rand::thread_rng();
    let private_key = ::rsa::RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");

    let private_der = private_key
        .to_pkcs8_der()
        .expect("Failed to serialize to PKCS#8")
        .as_bytes()
        .to_vec();
    let public_der = private_key
        .to_public_key()
        .to_pkcs1_der()
        .expect("Failed to serialize to PKCS#1")
        .as_bytes()
        .to_vec();

    KeyPair {
        private_der,
        public_der,
    }
}

fn first() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(generate)
}

fn second() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(generate)
}

pub(crate) fn rsa_private_key() -> Key {
    Key::rsa_private_der(first().private_der.clone())
}

pub(crate) fn rsa_public_key() -> Key {
    Key::rsa_public_der(first().public_der.clone())
}

pub(crate) fn rsa_second_public_key() -> Key {
    Key::rsa_public_der(second().public_der.clone())
}
