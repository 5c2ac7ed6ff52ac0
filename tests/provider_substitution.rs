//! Swapping the real provider for a test double
//!
//! Consumers depend on `JwtProvider`, so a fake can stand in without keys,
//! clocks or cryptography.

mod common;

use common::*;
use jwtseam::*;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Records every call and answers with canned values
#[derive(Default)]
struct RecordingProvider {
    decoded: Mutex<Vec<String>>,
    encodes: AtomicUsize,
}

impl JwtProvider for RecordingProvider {
    fn encode(
        &self,
        claims: &Claims,
        _key: &Key,
        alg: AlgorithmId,
        key_id: Option<String>,
        _extra_headers: Option<Map<String, Value>>,
    ) -> Result<String> {
        self.encodes.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "{alg}.{}.{}",
            claims.subject().unwrap_or("anonymous"),
            key_id.unwrap_or_default()
        ))
    }

    fn decode(
        &self,
        token: &str,
        _keys: &KeySet,
        _allowed: &AlgorithmPolicy,
        _leeway: u64,
    ) -> Result<Claims> {
        self.decoded.lock().unwrap().push(token.to_string());
        match token {
            "expired" => Err(Error::TokenExpired {
                expired_at: NOW - 1,
                now: NOW,
                leeway: 0,
            }),
            other => Ok(Claims::new().with("sub", other)),
        }
    }

    fn sign(&self, message: &[u8], _key: &Key, _alg: AlgorithmId) -> Result<Vec<u8>> {
        Ok(message.iter().rev().copied().collect())
    }
}

/// Application code that only sees the trait
struct Authenticator {
    jwt: Arc<dyn JwtProvider>,
    keys: KeySet,
    policy: AlgorithmPolicy,
    signing_key: Key,
}

impl Authenticator {
    fn new(jwt: Arc<dyn JwtProvider>) -> Self {
        Self {
            jwt,
            keys: secret(b"app-secret").into(),
            policy: AlgorithmPolicy::hs256_only(),
            signing_key: secret(b"app-secret"),
        }
    }

    fn login(&self, user: &str) -> Result<String> {
        self.jwt.encode(
            &Claims::new().with("sub", user),
            &self.signing_key,
            AlgorithmId::HS256,
            Some("app".to_string()),
            None,
        )
    }

    fn whoami(&self, token: &str) -> Option<String> {
        self.jwt
            .decode(token, &self.keys, &self.policy, 30)
            .ok()
            .and_then(|claims| claims.subject().map(str::to_string))
    }
}

#[test]
fn fake_provider_stands_in() {
    let fake = Arc::new(RecordingProvider::default());
    let auth = Authenticator::new(fake.clone());

    assert_eq!(auth.login("alice").unwrap(), "HS256.alice.app");
    assert_eq!(auth.whoami("bob"), Some("bob".to_string()));
    assert_eq!(auth.whoami("expired"), None);

    assert_eq!(fake.encodes.load(Ordering::SeqCst), 1);
    assert_eq!(*fake.decoded.lock().unwrap(), vec!["bob", "expired"]);
    assert_eq!(
        fake.sign(b"abc", &secret(b"k"), AlgorithmId::HS256).unwrap(),
        b"cba"
    );
}

#[test]
fn real_provider_behind_same_seam() {
    let auth = Authenticator::new(Arc::new(provider()));

    let token = auth.login("alice").unwrap();
    assert_eq!(auth.whoami(&token), Some("alice".to_string()));
    assert_eq!(auth.whoami("not-a-token"), None);
}

#[test]
fn real_provider_is_shareable_across_threads() {
    let jwt: Arc<dyn JwtProvider> = Arc::new(provider());
    let key = secret(b"shared-secret");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let jwt = Arc::clone(&jwt);
            let key = key.clone();
            thread::spawn(move || {
                let claims = Claims::new().with("sub", format!("user-{i}"));
                let token = jwt
                    .encode(&claims, &key, AlgorithmId::HS256, None, None)
                    .unwrap();
                let decoded = jwt
                    .decode(&token, &key.into(), &AlgorithmPolicy::hs256_only(), 0)
                    .unwrap();
                assert_eq!(decoded, claims);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
