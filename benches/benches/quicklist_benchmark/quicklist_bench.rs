use std::{collections::VecDeque, hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use zumic_quicklist::{config::QuickListConfig, QuickList};

const SIZES: [usize; 3] = [1_000usize, 10_000usize, 100_000usize];
const RANDOM_ACCESSES: usize = 1_000;

fn fill_vecdeque(n: usize) -> VecDeque<Vec<u8>> {
    (0..n as u32).map(|i| i.to_le_bytes().to_vec()).collect()
}

fn fill_quicklist(
    n: usize,
    max_listpack_size: usize,
) -> QuickList {
    let mut q = QuickList::with_config(QuickListConfig {
        max_listpack_size,
        ..Default::default()
    });
    for i in 0..n as u32 {
        q.push_back(&i.to_le_bytes());
    }
    q
}

fn bench_push_back(c: &mut Criterion) {
    let mut g = c.benchmark_group("push_back_bulk");
    g.measurement_time(Duration::from_secs(5));
    for &size in SIZES.iter() {
        g.throughput(Throughput::Elements(size as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter(|| {
                let mut q = QuickList::with_config(QuickListConfig {
                    max_listpack_size: 256,
                    ..Default::default()
                });
                for i in 0..n as u32 {
                    black_box(q.push_back(&i.to_le_bytes()));
                }
                black_box(q);
            })
        });
        g.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |b, &n| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..n as u32 {
                    black_box(d.push_back(i.to_le_bytes().to_vec()));
                }
                black_box(d);
            })
        });
    }
    g.finish();
}

fn bench_push_front(c: &mut Criterion) {
    let mut g = c.benchmark_group("push_front_bulk");
    g.measurement_time(Duration::from_secs(5));
    for &size in SIZES.iter() {
        g.throughput(Throughput::Elements(size as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter(|| {
                let mut q = QuickList::with_config(QuickListConfig {
                    max_listpack_size: 256,
                    ..Default::default()
                });
                for i in 0..n as u32 {
                    black_box(q.push_front(&i.to_le_bytes()));
                }
                black_box(q);
            })
        });

        g.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |b, &n| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..n as u32 {
                    black_box(d.push_front(i.to_le_bytes().to_vec()));
                }
                black_box(d);
            })
        });
    }
    g.finish();
}

fn bench_pop_drain(c: &mut Criterion) {
    let mut g = c.benchmark_group("pop_drain");
    g.measurement_time(Duration::from_secs(5));
    for &size in SIZES.iter() {
        g.throughput(Throughput::Elements(size as u64));
        g.bench_with_input(
            BenchmarkId::new("QuickList_pop_back", size),
            &size,
            |b, &n| {
                b.iter(|| {
                    let mut q = fill_quicklist(n, 256);
                    while q.pop_back().is_some() {}
                    black_box(q);
                })
            },
        );

        g.bench_with_input(
            BenchmarkId::new("VecDeque_pop_back", size),
            &size,
            |b, &n| {
                b.iter(|| {
                    let mut d = fill_vecdeque(n);
                    while d.pop_back().is_some() {}
                    black_box(d);
                })
            },
        );

        g.bench_with_input(
            BenchmarkId::new("QuickList_pop_front", size),
            &size,
            |b, &n| {
                b.iter(|| {
                    let mut q = fill_quicklist(n, 256);
                    while q.pop_front().is_some() {}
                    black_box(q);
                })
            },
        );

        g.bench_with_input(
            BenchmarkId::new("VecDeque_pop_front", size),
            &size,
            |b, &n| {
                b.iter(|| {
                    let mut d = fill_vecdeque(n);
                    while d.pop_front().is_some() {}
                    black_box(d);
                })
            },
        );
    }
    g.finish();
}

fn bench_random_get(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_get_1k");
    g.measurement_time(Duration::from_secs(5));
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    for &size in SIZES.iter() {
        let indices: Vec<usize> = (0..RANDOM_ACCESSES).map(|_| rng.gen_range(0..size)).collect();

        let d = fill_vecdeque(size);
        let q = fill_quicklist(size, 256);

        g.throughput(Throughput::Elements(RANDOM_ACCESSES as u64));

        g.bench_with_input(
            BenchmarkId::new("VecDeque_random_get", size),
            &indices,
            |b, idxs| {
                b.iter(|| {
                    for &i in idxs.iter() {
                        black_box(black_box(&d).get(i));
                    }
                })
            },
        );

        g.bench_with_input(
            BenchmarkId::new("QuickList_random_get", size),
            &indices,
            |b, idxs| {
                b.iter(|| {
                    for &i in idxs.iter() {
                        black_box(q.index(i));
                    }
                })
            },
        );
    }
    g.finish();
}

fn bench_sequential_range(c: &mut Criterion) {
    let mut g = c.benchmark_group("sequential_range");
    g.measurement_time(Duration::from_secs(5));

    for &size in SIZES.iter() {
        let d = fill_vecdeque(size);
        let q = fill_quicklist(size, 256);

        g.throughput(Throughput::Elements(size as u64));

        g.bench_with_input(BenchmarkId::new("VecDeque_iter", size), &d, |b, d| {
            b.iter(|| {
                for x in d.iter() {
                    black_box(x);
                }
            })
        });

        g.bench_with_input(BenchmarkId::new("QuickList_range", size), &q, |b, q| {
            b.iter(|| {
                q.range(0, None, |v| {
                    black_box(v);
                    false
                });
            })
        });
    }
    g.finish();
}

fn bench_marshal(c: &mut Criterion) {
    let mut g = c.benchmark_group("marshal_roundtrip");
    g.measurement_time(Duration::from_secs(5));

    for &size in SIZES.iter() {
        let q = fill_quicklist(size, 256);
        g.throughput(Throughput::Elements(size as u64));

        g.bench_with_input(BenchmarkId::new("QuickList_marshal", size), &q, |b, q| {
            b.iter(|| {
                black_box(zumic_quicklist::database::quicklist::serialize::marshal(q));
            })
        });
    }
    g.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_push_back(c);
    bench_push_front(c);
    bench_pop_drain(c);
    bench_random_get(c);
    bench_sequential_range(c);
    bench_marshal(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}
criterion_main!(benches);
