// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-rectangle predicates and squared distances over Kurbo primitives.
//!
//! Kurbo's [`Rect::contains`] is half-open, while every query here treats the
//! boundary as inside, so the tree uses these helpers instead.

use kurbo::{Point, Rect};

/// Whether both coordinates of `p` are finite.
#[inline]
pub(crate) fn point_is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Whether `r` is finite and not inverted. Degenerate (zero-area) rectangles are valid.
#[inline]
pub(crate) fn rect_is_valid(r: Rect) -> bool {
    r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite()
        && r.x0 <= r.x1
        && r.y0 <= r.y1
}

/// Whether `p` lies inside `r` or on its boundary.
#[inline]
pub(crate) fn rect_contains_closed(r: Rect, p: Point) -> bool {
    r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1
}

/// Whether two closed rectangles share at least one point.
#[inline]
pub(crate) fn rects_intersect_closed(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Squared Euclidean distance between two points.
#[inline]
pub(crate) fn distance_squared(a: Point, b: Point) -> f64 {
    (a - b).hypot2()
}

/// Squared distance from `p` to the nearest point of `r`; zero when `p` is inside.
#[inline]
pub(crate) fn rect_distance_squared(r: Rect, p: Point) -> f64 {
    let dx = if p.x < r.x0 {
        r.x0 - p.x
    } else if p.x > r.x1 {
        p.x - r.x1
    } else {
        0.0
    };
    let dy = if p.y < r.y0 {
        r.y0 - p.y
    } else if p.y > r.y1 {
        p.y - r.y1
    } else {
        0.0
    };
    dx * dx + dy * dy
}
