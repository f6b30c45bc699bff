use bench::apply_small_runtime_config;
use bench::default_rng;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use mod_int::{Mint, ModInt};
use rand::Rng;
use std::hint::black_box;

const DATASET_SIZE: usize = 1_024;

type Mint998 = ModInt<998_244_353>;

fn bench_mod_int(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("mod_int");
    apply_small_runtime_config(&mut group);

    let raw: Vec<i64> = (0..DATASET_SIZE)
        .map(|_| rng.random_range(1..1_000_000_000))
        .collect();
    let big: Vec<Mint> = raw.iter().map(|&v| Mint::new(v)).collect();
    let ntt: Vec<Mint998> = raw.iter().map(|&v| Mint998::new(v % 998_244_352 + 1)).collect();

    group.bench_function(BenchmarkId::new("mul_chain", "1e9+7"), |bencher| {
        bencher.iter(|| black_box(black_box(&big).iter().product::<Mint>()))
    });

    group.bench_function(BenchmarkId::new("inv", "1e9+7"), |bencher| {
        bencher.iter(|| {
            for &x in &big {
                black_box(black_box(x).inv());
            }
        })
    });

    group.bench_function(BenchmarkId::new("inv", "998244353"), |bencher| {
        bencher.iter(|| {
            for &x in &ntt {
                black_box(black_box(x).inv());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_mod_int);
criterion_main!(benches);
