use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decaf_crypto::curves::Ed25519Decaf;
use decaf_crypto::{derive_private_key, sign, verify, SymmetricSeed};

pub fn bench_sign_and_verify(c: &mut Criterion) {
    let priv_key = derive_private_key::<Ed25519Decaf>(SymmetricSeed::new([0x11u8; 32]));
    let pub_key = priv_key.to_public();
    let message = b"benchmark message";

    c.bench_function("sign", |b| {
        b.iter(|| sign(black_box(&priv_key), black_box(message)))
    });

    let sig = sign(&priv_key, message);
    c.bench_function("verify", |b| {
        b.iter(|| verify(black_box(&sig), black_box(&pub_key), black_box(message)))
    });
}

criterion_group!(benches, bench_sign_and_verify);
criterion_main!(benches);
