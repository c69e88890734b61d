//! 红黑树性能基准测试
//!
//! 当前测试规模：100,000 个键

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rbtree::RbTree;
use std::hint::black_box;

const BENCHMARK_SIZE: u64 = 100_000; // 当前基准测试大小

/// 性能测试配置
struct BenchConfig {
    size: u64,
    seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: BENCHMARK_SIZE,
            seed: 42,
        }
    }
}

/// 生成打乱顺序的测试键
fn generate_test_keys(count: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys: Vec<u64> = (0..count).collect();
    keys.shuffle(&mut rng);
    keys
}

fn build_tree(keys: &[u64]) -> RbTree<u64> {
    let mut tree = RbTree::new();
    for key in keys {
        let _ = tree.add(*key);
    }
    tree
}

/// 插入性能测试：随机顺序与升序
fn bench_insert(c: &mut Criterion) {
    let config = BenchConfig::default();
    let random_keys = generate_test_keys(config.size, config.seed);
    let sorted_keys: Vec<u64> = (0..config.size).collect();

    let mut group = c.benchmark_group("insert");
    group.sample_size(10);
    for (name, keys) in [("random", &random_keys), ("sequential", &sorted_keys)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), keys, |b, keys| {
            b.iter(|| build_tree(keys));
        });
    }
    group.finish();
}

/// 查找性能测试：命中与未命中
fn bench_contains(c: &mut Criterion) {
    let config = BenchConfig::default();
    let keys = generate_test_keys(config.size, config.seed);
    let tree = build_tree(&keys);

    c.bench_function("contains-hit", |b| {
        b.iter(|| {
            let mut found = 0;
            for key in keys.iter().take(1_000) {
                if tree.contains(black_box(key)) {
                    found += 1;
                }
            }
            found
        });
    });

    c.bench_function("contains-miss", |b| {
        b.iter(|| {
            let mut found = 0;
            for key in config.size..config.size + 1_000 {
                if tree.contains(black_box(&key)) {
                    found += 1;
                }
            }
            found
        });
    });
}

/// 删除性能测试：按另一随机顺序删除全部键
fn bench_remove(c: &mut Criterion) {
    let config = BenchConfig::default();
    let keys = generate_test_keys(config.size, config.seed);
    let removal_order = generate_test_keys(config.size, config.seed + 1000);
    let tree = build_tree(&keys);

    let mut group = c.benchmark_group("remove");
    group.sample_size(10);
    group.bench_function("all-random", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for key in &removal_order {
                    let _ = tree.remove(key);
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });
    group.finish();
}

/// 遍历性能测试
fn bench_traversal(c: &mut Criterion) {
    let config = BenchConfig::default();
    let tree = build_tree(&generate_test_keys(config.size, config.seed));

    c.bench_function("in-order", |b| {
        b.iter(|| tree.in_order().copied().sum::<u64>());
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_contains,
    bench_remove,
    bench_traversal
);
criterion_main!(benches);
