// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_kdtree::KdTree;

use rstar::{AABB, RTree};

fn gen_points(count: usize) -> Vec<Point> {
    let mut x = 0x9E37_79B9_7F4A_7C15_u64;
    let mut next = move || {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        ((x >> 11) as f64) / ((1u64 << 53) as f64)
    };
    (0..count).map(|_| Point::new(next(), next())).collect()
}

fn to_rstar_points(v: &[Point]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rstar_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_rstar_compare");
    let query = Rect::new(0.25, 0.25, 0.5, 0.5);
    let query_point = Point::new(0.33, 0.71);
    for &n in &[10_000usize, 50_000] {
        let points = gen_points(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                KdTree::new,
                |mut tree| {
                    for p in &points {
                        tree.insert(*p).expect("generated points lie in the unit square");
                    }
                    let hits = tree.range(query).map(|v| v.len()).unwrap_or(0);
                    black_box(hits);
                    black_box(tree.nearest(query_point).ok().flatten());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let aabb = AABB::from_corners([query.x0, query.y0], [query.x1, query.y1]);
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                    black_box(tree.nearest_neighbor(&[query_point.x, query_point.y]));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare);
criterion_main!(benches);
