// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_kdtree::KdTree;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Point::new(rng.next_f64(), rng.next_f64()))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let (cx, cy) = (rng.next_f64(), rng.next_f64());
        for _ in 0..per_cluster {
            let x = (cx + (rng.next_f64() - 0.5) * spread).clamp(0.0, 1.0);
            let y = (cy + (rng.next_f64() - 0.5) * spread).clamp(0.0, 1.0);
            out.push(Point::new(x, y));
        }
    }
    out
}

fn build(points: &[Point]) -> KdTree {
    let mut tree = KdTree::new();
    tree.insert_all(points.iter().copied()).expect("generated points lie in the unit square");
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_insert");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter_batched(
                KdTree::new,
                |mut tree| {
                    for p in &points {
                        tree.insert(*p).expect("generated points lie in the unit square");
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    // Sorted input degenerates into a chain; keep it small.
    let sorted: Vec<_> = (0..2_000)
        .map(|i| {
            let t = f64::from(i) / 2_000.0;
            Point::new(t, t)
        })
        .collect();
    group.bench_function("sorted_chain_n2000", |b| {
        b.iter_batched(
            KdTree::new,
            |mut tree| {
                for p in &sorted {
                    tree.insert(*p).expect("generated points lie in the unit square");
                }
                black_box(tree.height());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_range");
    let query = Rect::new(0.4, 0.4, 0.6, 0.6);
    for &n in &[10_000usize, 100_000] {
        let points = gen_uniform_points(n, 0xBADC_F00D_1234_5678);
        let tree = build(&points);
        group.bench_function(format!("kdtree_n{}", n), |b| {
            b.iter(|| black_box(tree.range(black_box(query)).map(|v| v.len())))
        });
        group.bench_function(format!("linear_scan_n{}", n), |b| {
            b.iter(|| {
                let q = black_box(query);
                let hits = points
                    .iter()
                    .filter(|p| q.x0 <= p.x && p.x <= q.x1 && q.y0 <= p.y && p.y <= q.y1)
                    .count();
                black_box(hits)
            })
        });
    }
    let clustered = build(&gen_clustered_points(64, 256, 0.05));
    group.bench_function("kdtree_clustered", |b| {
        b.iter(|| black_box(clustered.range(black_box(query)).map(|v| v.len())))
    });
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_nearest");
    let queries = gen_uniform_points(256, 0xFACE_FEED_CAFE_BABE);
    group.throughput(Throughput::Elements(queries.len() as u64));
    for &n in &[10_000usize, 100_000] {
        let points = gen_uniform_points(n, 0x0DDB_A11C_0FFE_E000);
        let tree = build(&points);
        group.bench_function(format!("kdtree_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.nearest(*q).ok().flatten());
                }
            })
        });
        group.bench_function(format!("linear_scan_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    let best = points
                        .iter()
                        .min_by(|a, b| (**a - *q).hypot2().total_cmp(&(**b - *q).hypot2()));
                    black_box(best);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_range, bench_nearest);
criterion_main!(benches);
