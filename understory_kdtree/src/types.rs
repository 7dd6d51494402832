// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree: splitting axes and node descriptors.

use kurbo::{Line, Point, Rect};

/// Coordinate axis a node partitions its region on.
///
/// Even depths (the root is depth 0) split on [`Axis::X`], odd depths on [`Axis::Y`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Split by the vertical line `x = point.x`.
    X,
    /// Split by the horizontal line `y = point.y`.
    Y,
}

impl Axis {
    /// Axis used by nodes at `depth`.
    pub const fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::X } else { Self::Y }
    }

    /// Axis used one level further down.
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Coordinate of `p` on this axis.
    #[inline]
    pub const fn coord(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }
}

/// Which child of a node a point is routed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Strictly smaller coordinate on the node's axis.
    LeftBottom,
    /// Equal or larger coordinate on the node's axis.
    RightTop,
}

impl Side {
    /// Route `p` against a node holding `at` that splits on `axis`.
    ///
    /// Ties go right/top; insertion and lookup must agree on this.
    #[inline]
    pub(crate) fn route(axis: Axis, at: Point, p: Point) -> Self {
        if axis.coord(p) < axis.coord(at) {
            Self::LeftBottom
        } else {
            Self::RightTop
        }
    }

    /// Clip `region` by the splitting line through `at` and keep this side.
    pub(crate) fn clip(self, axis: Axis, region: Rect, at: Point) -> Rect {
        match (axis, self) {
            (Axis::X, Self::LeftBottom) => Rect::new(region.x0, region.y0, at.x, region.y1),
            (Axis::X, Self::RightTop) => Rect::new(at.x, region.y0, region.x1, region.y1),
            (Axis::Y, Self::LeftBottom) => Rect::new(region.x0, region.y0, region.x1, at.y),
            (Axis::Y, Self::RightTop) => Rect::new(region.x0, at.y, region.x1, region.y1),
        }
    }
}

/// Read-only description of one stored node, as yielded by [`KdTree::nodes`](crate::KdTree::nodes).
///
/// This carries everything a renderer needs to plot the point and the splitting
/// segment of the node; the tree itself never draws.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeView {
    /// The stored point.
    pub point: Point,
    /// Region of the plane routed to this node.
    pub region: Rect,
    /// Axis this node splits its region on.
    pub axis: Axis,
    /// Distance from the root (root is 0).
    pub depth: usize,
}

impl NodeView {
    /// The splitting line through [`point`](Self::point), clipped to [`region`](Self::region).
    ///
    /// Vertical for [`Axis::X`], horizontal for [`Axis::Y`].
    pub fn split_line(&self) -> Line {
        match self.axis {
            Axis::X => Line::new(
                Point::new(self.point.x, self.region.y0),
                Point::new(self.point.x, self.region.y1),
            ),
            Axis::Y => Line::new(
                Point::new(self.region.x0, self.point.y),
                Point::new(self.region.x1, self.point.y),
            ),
        }
    }
}
