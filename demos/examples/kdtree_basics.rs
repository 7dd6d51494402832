// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kd-tree basics.
//!
//! Insert a handful of points, then run membership, range, and nearest queries.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example kdtree_basics`

use kurbo::{Point, Rect};
use understory_kdtree::{Error, KdTree};

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut tree = KdTree::new();
    for (x, y) in [(0.7, 0.2), (0.5, 0.4), (0.2, 0.3), (0.4, 0.7), (0.9, 0.6)] {
        tree.insert(Point::new(x, y))?;
    }
    println!("{tree:?}");

    // Duplicates are ignored
    let added = tree.insert(Point::new(0.7, 0.2))?;
    println!("re-insert (0.7, 0.2): added = {added}, len = {}", tree.len());

    println!("contains (0.5, 0.4): {}", tree.contains(Point::new(0.5, 0.4))?);
    println!("contains (0.5, 0.5): {}", tree.contains(Point::new(0.5, 0.5))?);

    let hits = tree.range(Rect::new(0.0, 0.0, 0.5, 0.5))?;
    println!("range [0, 0.5] x [0, 0.5]: {hits:?}");

    let near = tree.nearest(Point::new(0.45, 0.45))?;
    println!("nearest to (0.45, 0.45): {near:?}");
    assert_eq!(near, Some(Point::new(0.5, 0.4)), "closest stored point");

    // Arguments outside the bounds are rejected, not clamped
    if let Err(e) = tree.insert(Point::new(1.5, 0.5)) {
        log::warn!("rejected: {e}");
    }
    Ok(())
}
