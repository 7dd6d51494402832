// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argument errors reported by [`KdTree`](crate::KdTree).

use kurbo::Rect;

/// An argument that cannot denote a location or region in the tree.
///
/// Every variant is an invalid-argument condition: it is reported before the
/// tree is traversed or mutated, so a failed call never changes the tree.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A point coordinate is NaN or infinite.
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinitePoint {
        /// Offending x coordinate.
        x: f64,
        /// Offending y coordinate.
        y: f64,
    },
    /// A point lies outside the bounds the tree partitions.
    #[error("point ({x}, {y}) lies outside the tree bounds {bounds:?}")]
    PointOutOfBounds {
        /// Offending x coordinate.
        x: f64,
        /// Offending y coordinate.
        y: f64,
        /// Bounds of the tree that rejected the point.
        bounds: Rect,
    },
    /// A rectangle is non-finite or has `x0 > x1` or `y0 > y1`.
    #[error("rectangle {0:?} is non-finite or inverted")]
    InvalidRect(Rect),
}
