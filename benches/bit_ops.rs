use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lwe_crypt::lwe::Lwe;
use lwe_crypt::params::LweParams;
use lwe_crypt::text::{encrypt_text, encrypt_text_sequential};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bit_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit");

    for params in [LweParams::reference(), LweParams::with_dim_128()] {
        let lwe = Lwe::new(params).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let keys = lwe.generate_keys(&mut rng);
        let ct = lwe.encrypt_bit(&keys.public_key, 1, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("keygen", params.dim), &params, |b, _| {
            b.iter(|| lwe.generate_keys(&mut rng));
        });

        group.bench_with_input(BenchmarkId::new("encrypt", params.dim), &params, |b, _| {
            b.iter(|| lwe.encrypt_bit(&keys.public_key, 1, &mut rng).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("decrypt", params.dim), &params, |b, _| {
            b.iter(|| lwe.decrypt_bit(&keys.secret_key, &ct).unwrap());
        });
    }

    group.finish();
}

fn text_benchmark(c: &mut Criterion) {
    let lwe = Lwe::reference();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let keys = lwe.generate_keys(&mut rng);

    let mut group = c.benchmark_group("text");

    for len in [4, 32, 128] {
        let message: String = (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect();

        group.bench_with_input(BenchmarkId::new("parallel", len), &message, |b, msg| {
            b.iter(|| encrypt_text(&lwe, &keys.public_key, msg, &mut rng).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("sequential", len), &message, |b, msg| {
            b.iter(|| encrypt_text_sequential(&lwe, &keys.public_key, msg, &mut rng).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bit_benchmark, text_benchmark);
criterion_main!(benches);
