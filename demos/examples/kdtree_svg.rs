// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render the partition of a kd-tree as SVG.
//!
//! Points are black dots; nodes splitting on x draw a red vertical segment and
//! nodes splitting on y a blue horizontal one, each clipped to the node's region.
//!
//! Run:
//! - `cargo run -p understory_demos --example kdtree_svg > kdtree.svg`
//! - `cargo run -p understory_demos --example kdtree_svg -- 500` for 500 random points

use std::fmt::{self, Write as _};

use kurbo::{Affine, Point, Rect};
use understory_kdtree::{Axis, KdTree, NodeView};

const SIZE: f64 = 512.0;

fn main() {
    env_logger::init();

    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let mut tree = KdTree::new();
    let points: Vec<Point> = if count == 0 {
        [(0.7, 0.2), (0.5, 0.4), (0.2, 0.3), (0.4, 0.7), (0.9, 0.6)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect()
    } else {
        halton_points(count)
    };
    match tree.insert_all(points) {
        Ok(n) => log::info!("inserted {n} points, height {}", tree.height()),
        Err(e) => {
            log::error!("insert failed: {e}");
            return;
        }
    }

    let mut svg = String::new();
    match render_svg(&tree, &mut svg) {
        Ok(()) => print!("{svg}"),
        Err(e) => log::error!("rendering failed: {e}"),
    }
}

/// Low-discrepancy points inside the unit square.
fn halton_points(count: usize) -> Vec<Point> {
    fn halton(mut i: usize, base: usize) -> f64 {
        let mut f = 1.0;
        let mut r = 0.0;
        while i > 0 {
            f /= base as f64;
            r += f * (i % base) as f64;
            i /= base;
        }
        r
    }
    (1..=count).map(|i| Point::new(halton(i, 2), halton(i, 3))).collect()
}

/// Draw sink: consumes the node walk and emits SVG markup.
fn render_svg(tree: &KdTree, out: &mut String) -> fmt::Result {
    // Unit square to SVG pixels, with y pointing up.
    let to_px = Affine::new([SIZE, 0.0, 0.0, -SIZE, 0.0, SIZE]);
    let frame = to_px.transform_rect_bbox(tree.bounds());

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SIZE}" height="{SIZE}" viewBox="0 0 {SIZE} {SIZE}">"#
    )?;
    push_rect(out, frame)?;
    for node in tree.nodes() {
        push_split(out, to_px, &node)?;
    }
    for node in tree.nodes() {
        let c = to_px * node.point;
        writeln!(out, r#"  <circle cx="{:.2}" cy="{:.2}" r="3" fill="black"/>"#, c.x, c.y)?;
    }
    out.push_str("</svg>\n");
    Ok(())
}

fn push_rect(out: &mut String, r: Rect) -> fmt::Result {
    writeln!(
        out,
        r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="gray"/>"#,
        r.x0,
        r.y0,
        r.width(),
        r.height()
    )
}

fn push_split(out: &mut String, to_px: Affine, node: &NodeView) -> fmt::Result {
    let line = to_px * node.split_line();
    let color = match node.axis {
        Axis::X => "red",
        Axis::Y => "blue",
    };
    writeln!(
        out,
        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{color}"/>"#,
        line.p0.x, line.p0.y, line.p1.x, line.p1.y
    )
}
