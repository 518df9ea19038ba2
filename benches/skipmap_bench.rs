use criterion::{Criterion, black_box, criterion_group, criterion_main};

use omap::SkipMap;

fn bench_skipmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipMap");

    // Benchmark insertion
    group.bench_function("insert", |b| {
        let mut map: SkipMap<u64> = SkipMap::with_config(16, 0.5);
        let mut i: i64 = 0;

        b.iter(|| {
            i = i.wrapping_add(1);
            map.insert(black_box(i), black_box(i as u64 * 10))
        });
    });

    // Benchmark lookup
    group.bench_function("search", |b| {
        let mut map: SkipMap<u64> = SkipMap::with_config(16, 0.5);

        // Populate the map first
        for i in 0..1000 {
            map.insert(i, i as u64 * 10);
        }

        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % 1000;
            map.search(black_box(i))
        });
    });

    // Benchmark removal
    group.bench_function("delete", |b| {
        b.iter_batched(
            // Setup for each iteration
            || {
                let mut map: SkipMap<u64> = SkipMap::with_config(16, 0.5);
                for i in 0..1000 {
                    map.insert(i, i as u64 * 10);
                }
                (map, 0i64)
            },
            // Actual benchmark
            |(mut map, mut i)| {
                i = (i + 1) % 1000;
                map.delete(black_box(i))
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_skipmap);
criterion_main!(benches);
