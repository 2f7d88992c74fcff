use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use lazyseq::{HashMap, Iterator as _, MutableMap, ReadMap, from_iter};

const N: u64 = 10_000;

fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");
    group.throughput(Throughput::Elements(N));

    group.bench_function("map_filter_limit", |b| {
        b.iter(|| {
            let total = from_iter(0..N)
                .map(|x| x.wrapping_mul(31))
                .filter(|x| x % 3 == 0)
                .limit(N as usize / 2)
                .fold(0u64, |acc, x| acc.wrapping_add(x));
            black_box(total)
        });
    });

    group.bench_function("skip_step_enumerate", |b| {
        b.iter(|| {
            let n = from_iter(0..N)
                .skip(100)
                .step(7)
                .unwrap()
                .enumerate()
                .count();
            black_box(n)
        });
    });

    group.bench_function("concat", |b| {
        b.iter(|| {
            let n = from_iter(0..N / 2).concat(from_iter(N / 2..N)).count();
            black_box(n)
        });
    });

    // Baseline: the same work through std adapters
    group.bench_function("std_map_filter_take", |b| {
        b.iter(|| {
            let total = (0..N)
                .map(|x| x.wrapping_mul(31))
                .filter(|x| x % 3 == 0)
                .take(N as usize / 2)
                .fold(0u64, |acc, x| acc.wrapping_add(x));
            black_box(total)
        });
    });

    group.finish();
}

fn bench_hash_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_map");
    group.throughput(Throughput::Elements(N));

    group.bench_function("put", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for i in 0..N {
                map.put(i, i);
            }
            black_box(map.count())
        });
    });

    group.bench_function("try_get", |b| {
        let mut map = HashMap::new();
        for i in 0..N {
            map.put(format!("key{i:010}"), i);
        }
        let keys: Vec<String> = (0..N).map(|i| format!("key{i:010}")).collect();
        b.iter(|| {
            let mut hits = 0;
            for key in &keys {
                if map.try_get(key).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_adapters, bench_hash_map);
criterion_main!(benches);
