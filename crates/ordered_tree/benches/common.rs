use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{RuntimeProfile, distinct_keys, seed_base, seed_for_iter};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ordered_tree::{OrderedSet, OrderedTree, StdBTreeSet};

const SIZES: [usize; 4] = [1_000, 16_000, 64_000, 256_000];
const OPS_PER_ITER: usize = 200;
const HIT_RATE_PERCENT: u64 = 80;
const RANGE_WIDTH: u64 = 1 << 56;

#[derive(Clone)]
enum ReadOp {
    Contains { key: u64 },
    Range { low: u64, high: u64 },
}

#[derive(Clone)]
enum UpdateOp {
    Insert { key: u64 },
    Remove { key: u64 },
}

fn build<S: OrderedSet<Key = u64>>(keys: &[u64]) -> S {
    let mut set = S::new();
    for &k in keys {
        black_box(set.insert(k));
    }
    set
}

pub fn bench_read<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    S: OrderedSet<Key = u64>,
{
    for &size in &SIZES {
        RuntimeProfile::Small.apply(group);
        let base_seed = seed_base(1, size as u64);
        let keys = distinct_keys(size, base_seed);
        let set = build::<S>(&keys);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for iter in 0..iters {
                    let mut rng = StdRng::seed_from_u64(seed_for_iter(base_seed, iter));
                    let ops = generate_read_ops(&keys, &mut rng);
                    let start = Instant::now();
                    run_read_ops(&set, &ops);
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

pub fn bench_update<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    S: OrderedSet<Key = u64>,
{
    for &size in &SIZES {
        RuntimeProfile::Small.apply(group);
        let base_seed = seed_base(2, size as u64);
        let keys = distinct_keys(size, base_seed);
        let mut set = build::<S>(&keys);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for iter in 0..iters {
                    let mut rng = StdRng::seed_from_u64(seed_for_iter(base_seed, iter));
                    let ops = generate_update_ops(size, base_seed, iter, &mut rng);
                    let start = Instant::now();
                    run_update_ops(&mut set, &ops);
                    black_box(set.len());
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

/// Builds a full set and empties it from both ends.
pub fn bench_drain<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    S: OrderedSet<Key = u64>,
{
    for &size in &SIZES {
        RuntimeProfile::for_size(size).apply(group);
        let keys = distinct_keys(size, seed_base(3, size as u64));

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut set = build::<S>(&keys);
                    let start = Instant::now();
                    while !set.is_empty() {
                        black_box(set.pop_first());
                        black_box(set.pop_last());
                    }
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

fn generate_read_ops(keys: &[u64], rng: &mut StdRng) -> Vec<ReadOp> {
    let mut ops = Vec::with_capacity(OPS_PER_ITER);
    for _ in 0..OPS_PER_ITER {
        if rng.random::<u64>() & 1 == 0 {
            let hit = rng.random_range(0..100) < HIT_RATE_PERCENT;
            let key = if hit {
                keys[rng.random_range(0..keys.len())]
            } else {
                rng.random()
            };
            ops.push(ReadOp::Contains { key });
        } else {
            let low: u64 = rng.random();
            ops.push(ReadOp::Range {
                low,
                high: low.saturating_add(RANGE_WIDTH),
            });
        }
    }
    ops
}

fn generate_update_ops(size: usize, base_seed: u64, iter: u64, rng: &mut StdRng) -> Vec<UpdateOp> {
    let inserts = OPS_PER_ITER / 2;
    let mut inserted = Vec::with_capacity(inserts);
    let mut ops = Vec::with_capacity(OPS_PER_ITER);
    for i in 0..OPS_PER_ITER {
        if i % 2 == 0 {
            let id = (size as u64)
                .wrapping_add(iter.wrapping_mul(inserts as u64))
                .wrapping_add((i / 2) as u64);
            let key = bench::mix_seed(base_seed ^ id);
            inserted.push(key);
            ops.push(UpdateOp::Insert { key });
        } else {
            let idx = rng.random_range(0..inserted.len());
            let key = inserted.swap_remove(idx);
            ops.push(UpdateOp::Remove { key });
        }
    }
    debug_assert!(inserted.is_empty());
    ops
}

fn run_read_ops<S>(set: &S, ops: &[ReadOp])
where
    S: OrderedSet<Key = u64>,
{
    for op in ops {
        match *op {
            ReadOp::Contains { key } => {
                black_box(set.contains(&key));
            }
            ReadOp::Range { low, high } => {
                black_box(set.keys_in_range(&low, &high).len());
            }
        }
    }
}

fn run_update_ops<S>(set: &mut S, ops: &[UpdateOp])
where
    S: OrderedSet<Key = u64>,
{
    for op in ops {
        match *op {
            UpdateOp::Insert { key } => {
                black_box(set.insert(key));
            }
            UpdateOp::Remove { key } => {
                black_box(set.remove(&key));
            }
        }
    }
}

pub fn bench_all_read<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_read::<StdBTreeSet<u64>, _>(group, "std_btree");
    bench_read::<OrderedTree<u64>, _>(group, "llrb");
}

pub fn bench_all_update<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_update::<StdBTreeSet<u64>, _>(group, "std_btree");
    bench_update::<OrderedTree<u64>, _>(group, "llrb");
}

pub fn bench_all_drain<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_drain::<StdBTreeSet<u64>, _>(group, "std_btree");
    bench_drain::<OrderedTree<u64>, _>(group, "llrb");
}
