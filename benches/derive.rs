use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decaf_crypto::curves::Ed25519Decaf;
use decaf_crypto::{derive_private_key, SymmetricSeed};

pub fn bench_derive_private_key(c: &mut Criterion) {
    let seed = SymmetricSeed::new([0x42u8; 32]);
    c.bench_function("derive_private_key", |b| {
        b.iter(|| derive_private_key::<Ed25519Decaf>(black_box(seed.clone())))
    });
}

criterion_group!(benches, bench_derive_private_key);
criterion_main!(benches);
