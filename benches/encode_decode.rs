//! Encode, decode and sign benchmarks
//!
//! Compares hash function overhead across the HMAC family and measures the
//! RSA verification path, which dominates decode cost for RS* tokens.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use jwtseam::*;
use std::hint::black_box;

const NOW: i64 = 1_700_000_000;

mod helpers {
    use super::*;
    use rsa::pkcs8::EncodePrivateKey;

    pub fn claims() -> Claims {
        Claims::new()
            .with("sub", "user123")
            .with("iss", "https://example.com")
            .with("iat", NOW)
            .with("exp", NOW + 3600)
    }

    pub fn rsa_private_key() -> Key {
        let mut rng = rand::thread_rng();
        let key = rsa::RsaPrivateKey::new(&mut rng, 2048).expect("failed to generate RSA key");
        Key::rsa_private_der(key.to_pkcs8_der().expect("PKCS#8 DER").as_bytes())
    }
}

fn bench_hmac(c: &mut Criterion) {
    let jwt = Jwt::with_clock(FixedClock(NOW));
    let key = Key::symmetric(b"benchmark-secret-key-with-enough-length".to_vec());
    let keys = KeySet::from(key.clone());
    let claims = helpers::claims();

    let mut group = c.benchmark_group("hmac");

    for alg in [AlgorithmId::HS256, AlgorithmId::HS384, AlgorithmId::HS512] {
        let policy = AlgorithmPolicy::allow_only(vec![alg]);
        let token = jwt.encode(&claims, &key, alg, None, None).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", alg), &alg, |b, &alg| {
            b.iter(|| jwt.encode(black_box(&claims), &key, alg, None, None));
        });

        group.bench_with_input(BenchmarkId::new("decode", alg), &token, |b, token| {
            b.iter(|| jwt.decode(black_box(token), &keys, &policy, 0));
        });
    }

    group.finish();
}

fn bench_rsa(c: &mut Criterion) {
    let jwt = Jwt::with_clock(FixedClock(NOW));
    let key = helpers::rsa_private_key();
    let keys = KeySet::from(key.clone());
    let policy = AlgorithmPolicy::rsa_any();
    let claims = helpers::claims();

    let mut group = c.benchmark_group("rsa");

    for alg in [AlgorithmId::RS256, AlgorithmId::RS512] {
        let token = jwt.encode(&claims, &key, alg, None, None).unwrap();

        group.bench_with_input(BenchmarkId::new("sign", alg), &alg, |b, &alg| {
            b.iter(|| jwt.sign(black_box(b"benchmark message"), &key, alg));
        });

        group.bench_with_input(BenchmarkId::new("decode", alg), &token, |b, token| {
            b.iter(|| jwt.decode(black_box(token), &keys, &policy, 0));
        });
    }

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let token = Jwt::new()
        .encode(
            &helpers::claims(),
            &Key::symmetric(b"secret".to_vec()),
            AlgorithmId::HS256,
            Some("key-1".to_string()),
            None,
        )
        .unwrap();

    c.bench_function("parse_token", |b| {
        b.iter(|| ParsedToken::from_string(black_box(&token)));
    });
}

criterion_group!(benches, bench_hmac, bench_rsa, bench_parsing);
criterion_main!(benches);
