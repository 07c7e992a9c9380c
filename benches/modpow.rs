use fixed_dh::keys::dh::{DiffieHellman, MODP_1536};
use fixed_dh::modular::BarrettReducer;
use fixed_dh::primitives::U1536;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_barrett(c: &mut Criterion) {
    let reducer = BarrettReducer::new(MODP_1536.modulus).unwrap();
    let a = MODP_1536.modulus - U1536::from(12345u64);
    let b = MODP_1536.modulus >> 3;

    c.bench_function("barrett mul_mod 1536", |bench| {
        bench.iter(|| reducer.mul_mod(black_box(&a), black_box(&b)))
    });

    c.bench_function("barrett new 1536", |bench| {
        bench.iter(|| BarrettReducer::new(black_box(MODP_1536.modulus)).unwrap())
    });
}

pub fn bench_pow_mod(c: &mut Criterion) {
    let reducer = BarrettReducer::new(MODP_1536.modulus).unwrap();
    let exponent = MODP_1536.modulus >> 1;

    c.bench_function("pow_mod 1536", |bench| {
        bench.iter(|| MODP_1536.generator.pow_mod(black_box(&exponent), &reducer))
    });
}

pub fn bench_key_agreement(c: &mut Criterion) {
    let peer = DiffieHellman::from_group(&MODP_1536).unwrap();
    let peer_public = *peer.public_key();

    c.bench_function("dh 1536 agreement", |bench| {
        bench.iter(|| {
            let mut dh = DiffieHellman::from_group(&MODP_1536).unwrap();
            *dh.set_their_public_key(black_box(&peer_public))
        })
    });
}

criterion_group!(benches, bench_barrett, bench_pow_mod, bench_key_agreement);
criterion_main!(benches);
