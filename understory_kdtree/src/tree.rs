// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, insertion, queries, traversal.

use alloc::vec;
use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::error::Error;
use crate::geom::{
    distance_squared, point_is_finite, rect_contains_closed, rect_distance_squared, rect_is_valid,
    rects_intersect_closed,
};
use crate::types::{Axis, NodeView, Side};

/// Default bounds: the unit square.
pub const UNIT_SQUARE: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

/// A 2-d tree of distinct points over a bounded region.
///
/// Nodes alternate between splitting on x (even depths) and y (odd depths).
/// There is no rebalancing: the shape depends only on insertion order, so the
/// height, and with it the cost of every operation, is O(n) in the worst case
/// (for example when points arrive sorted). See [`KdTree::height`].
/// Walks use loops and explicit stacks, so a degenerate tree is slow but never
/// exhausts the call stack.
#[derive(Clone)]
pub struct KdTree {
    bounds: Rect,
    root: Option<NodeIdx>,
    arena: Vec<Node>,
}

#[derive(Clone, Debug)]
struct Node {
    point: Point,
    region: Rect,
    lb: Option<NodeIdx>,
    rt: Option<NodeIdx>,
}

impl Node {
    fn child(&self, side: Side) -> Option<NodeIdx> {
        match side {
            Side::LeftBottom => self.lb,
            Side::RightTop => self.rt,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeIdx> {
        match side {
            Side::LeftBottom => &mut self.lb,
            Side::RightTop => &mut self.rt,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn get(self) -> usize {
        self.0
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for KdTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len())
            .field("height", &self.height())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl KdTree {
    /// Create an empty tree over the unit square.
    pub const fn new() -> Self {
        Self {
            bounds: UNIT_SQUARE,
            root: None,
            arena: Vec::new(),
        }
    }

    /// Create an empty tree over `bounds`.
    ///
    /// The root's region is always `bounds`, and points outside it are rejected.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRect`] if `bounds` is non-finite or inverted.
    pub fn with_bounds(bounds: Rect) -> Result<Self, Error> {
        if !rect_is_valid(bounds) {
            return Err(Error::InvalidRect(bounds));
        }
        log::debug!("kdtree: new tree with bounds {bounds:?}");
        Ok(Self {
            bounds,
            root: None,
            arena: Vec::new(),
        })
    }

    /// Region partitioned by this tree.
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct points stored.
    pub fn len(&self) -> usize {
        // Nodes are never removed and each holds a distinct point.
        self.arena.len()
    }

    /// Drop every point, keeping the bounds.
    pub fn clear(&mut self) {
        log::debug!("kdtree: clearing {} points", self.arena.len());
        self.root = None;
        self.arena.clear();
    }

    fn check_finite(p: Point) -> Result<(), Error> {
        if point_is_finite(p) {
            Ok(())
        } else {
            Err(Error::NonFinitePoint { x: p.x, y: p.y })
        }
    }

    fn check_point(&self, p: Point) -> Result<(), Error> {
        Self::check_finite(p)?;
        if !rect_contains_closed(self.bounds, p) {
            return Err(Error::PointOutOfBounds {
                x: p.x,
                y: p.y,
                bounds: self.bounds,
            });
        }
        Ok(())
    }

    fn push_node(&mut self, point: Point, region: Rect) -> NodeIdx {
        let idx = NodeIdx(self.arena.len());
        self.arena.push(Node {
            point,
            region,
            lb: None,
            rt: None,
        });
        idx
    }

    fn node(&self, idx: NodeIdx) -> &Node {
        &self.arena[idx.get()]
    }

    /// Insert `p` unless an equal point is already stored.
    ///
    /// Returns `Ok(true)` if `p` was added and `Ok(false)` if it was a duplicate,
    /// in which case the tree is unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePoint`] or [`Error::PointOutOfBounds`]; the tree is left untouched.
    pub fn insert(&mut self, p: Point) -> Result<bool, Error> {
        self.check_point(p)?;
        let Some(mut cur) = self.root else {
            self.root = Some(self.push_node(p, self.bounds));
            log::trace!("kdtree: ({}, {}) is the root", p.x, p.y);
            return Ok(true);
        };
        let mut axis = Axis::X;
        let mut depth = 0_usize;
        loop {
            let node = self.node(cur);
            if node.point == p {
                log::trace!("kdtree: ({}, {}) already stored", p.x, p.y);
                return Ok(false);
            }
            let side = Side::route(axis, node.point, p);
            if let Some(next) = node.child(side) {
                cur = next;
                axis = axis.next();
                depth += 1;
                continue;
            }
            let region = side.clip(axis, node.region, node.point);
            let idx = self.push_node(p, region);
            *self.arena[cur.get()].child_mut(side) = Some(idx);
            log::trace!("kdtree: inserted ({}, {}) at depth {}", p.x, p.y, depth + 1);
            return Ok(true);
        }
    }

    /// Insert every point of `points`, returning how many were newly stored.
    ///
    /// # Errors
    ///
    /// Stops at the first invalid point; points before it remain inserted.
    pub fn insert_all<I>(&mut self, points: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut added = 0;
        for p in points {
            if self.insert(p)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Whether a point equal to `p` is stored.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePoint`] or [`Error::PointOutOfBounds`].
    pub fn contains(&self, p: Point) -> Result<bool, Error> {
        self.check_point(p)?;
        let mut cur = self.root;
        let mut axis = Axis::X;
        while let Some(idx) = cur {
            let node = self.node(idx);
            if node.point == p {
                return Ok(true);
            }
            cur = node.child(Side::route(axis, node.point, p));
            axis = axis.next();
        }
        Ok(false)
    }

    /// All stored points inside `rect` or on its boundary, each once.
    ///
    /// Subtrees whose region misses `rect` are skipped. Points come out in
    /// pre-order (node, then left/bottom, then right/top); callers should not
    /// depend on that order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRect`] if `rect` is non-finite or inverted.
    pub fn range(&self, rect: Rect) -> Result<Vec<Point>, Error> {
        if !rect_is_valid(rect) {
            return Err(Error::InvalidRect(rect));
        }
        Ok(self.range_walk(rect, &mut 0))
    }

    /// Pruned pre-order walk behind [`KdTree::range`]; `visits` counts popped nodes.
    pub(crate) fn range_walk(&self, rect: Rect, visits: &mut usize) -> Vec<Point> {
        let mut out = Vec::new();
        let Some(root) = self.root else {
            return out;
        };
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            *visits += 1;
            let node = self.node(idx);
            if !rects_intersect_closed(node.region, rect) {
                continue;
            }
            if rect_contains_closed(rect, node.point) {
                out.push(node.point);
            }
            // Right/top first so left/bottom pops first.
            stack.extend(node.rt);
            stack.extend(node.lb);
        }
        out
    }

    /// A stored point closest to `p`, or `None` if the tree is empty.
    ///
    /// Among equally close points, the one met first in the search wins.
    /// The child whose region is nearer to `p` is searched first, so the
    /// second child is usually pruned. `p` may lie outside the bounds; only
    /// stored points are confined to them.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePoint`] if a coordinate of `p` is NaN or infinite.
    pub fn nearest(&self, p: Point) -> Result<Option<Point>, Error> {
        Self::check_finite(p)?;
        Ok(self.nearest_walk(p, true, &mut 0))
    }

    /// Branch-and-bound search behind [`KdTree::nearest`].
    ///
    /// With `nearer_first` unset the children are searched in the opposite
    /// order; the answer is the same but fewer subtrees get pruned.
    /// `visits` counts popped nodes.
    pub(crate) fn nearest_walk(
        &self,
        p: Point,
        nearer_first: bool,
        visits: &mut usize,
    ) -> Option<Point> {
        let root = self.root?;
        let mut best = self.node(root).point;
        let mut best_d2 = distance_squared(p, best);
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            *visits += 1;
            let node = self.node(idx);
            if best_d2 < rect_distance_squared(node.region, p) {
                continue;
            }
            let d2 = distance_squared(p, node.point);
            if d2 < best_d2 {
                best = node.point;
                best_d2 = d2;
            }
            match (node.lb, node.rt) {
                (Some(lb), Some(rt)) => {
                    let lb_d2 = rect_distance_squared(self.node(lb).region, p);
                    let rt_d2 = rect_distance_squared(self.node(rt).region, p);
                    let rt_is_nearer = rt_d2 < lb_d2;
                    let (first, second) = if rt_is_nearer == nearer_first {
                        (rt, lb)
                    } else {
                        (lb, rt)
                    };
                    // The whole `first` subtree is searched before `second` pops.
                    stack.push(second);
                    stack.push(first);
                }
                (Some(only), None) | (None, Some(only)) => stack.push(only),
                (None, None) => {}
            }
        }
        Some(best)
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        self.nodes().map(|n| n.depth + 1).max().unwrap_or(0)
    }

    /// Pre-order walk over every node with its region and splitting axis.
    ///
    /// This is the hook for renderers: each [`NodeView`] carries the point and
    /// its [splitting segment](NodeView::split_line).
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            tree: self,
            stack: self.root.map(|r| (r, 0)).into_iter().collect(),
        }
    }

    /// All stored points, in the same order as [`KdTree::nodes`].
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes().map(|n| n.point)
    }
}

/// Pre-order iterator over the nodes of a [`KdTree`].
///
/// Created by [`KdTree::nodes`].
#[derive(Debug)]
pub struct Nodes<'a> {
    tree: &'a KdTree,
    stack: Vec<(NodeIdx, usize)>,
}

impl Iterator for Nodes<'_> {
    type Item = NodeView;

    fn next(&mut self) -> Option<NodeView> {
        let (idx, depth) = self.stack.pop()?;
        let node = self.tree.node(idx);
        if let Some(rt) = node.rt {
            self.stack.push((rt, depth + 1));
        }
        if let Some(lb) = node.lb {
            self.stack.push((lb, depth + 1));
        }
        Some(NodeView {
            point: node.point,
            region: node.region,
            axis: Axis::at_depth(depth),
            depth,
        })
    }
}
