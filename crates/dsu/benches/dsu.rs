use bench::apply_large_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use dsu::Dsu;
use rand::Rng;
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 16_384, 262_144, 1_048_576];

fn bench_dsu(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("dsu/merge_same");

    for &size in &SIZES {
        if size <= 16_384 {
            apply_small_runtime_config(&mut group);
        } else {
            apply_large_runtime_config(&mut group);
        }
        let pairs: Vec<(usize, usize)> = (0..2 * size)
            .map(|_| (rng.random_range(0..size), rng.random_range(0..size)))
            .collect();

        group.bench_function(BenchmarkId::new("union_by_size", size), |bencher| {
            bencher.iter(|| {
                let mut d = Dsu::new(black_box(size));
                let mut hits = 0_usize;
                for (i, &(u, v)) in pairs.iter().enumerate() {
                    if i % 2 == 0 {
                        d.merge(u, v);
                    } else if d.same(u, v) {
                        hits += 1;
                    }
                }
                black_box(hits);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dsu);
criterion_main!(benches);
