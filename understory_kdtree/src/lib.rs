// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kdtree --heading-base-level=0

//! Understory Kd-Tree: a Kurbo-native 2-d tree of points.
//!
//! Understory Kd-Tree is a small point index for picking, snapping, and proximity queries.
//!
//! - Insert points; duplicates are ignored.
//! - Test membership, enumerate points inside a rectangle, and find a nearest neighbor.
//! - Walk the partition for debugging overlays via [`KdTree::nodes`].
//!
//! Every node owns the rectangle of the plane routed to it: the root owns the tree's
//! bounds (the unit square by default) and each child owns its parent's region clipped
//! by the parent's splitting line. Range and nearest-neighbor queries skip whole
//! subtrees whose region cannot hold an answer.
//!
//! ## Partitioning
//!
//! Nodes at even depth split on x, nodes at odd depth split on y. A point whose
//! coordinate is strictly smaller than the node's goes left/bottom; equal or larger
//! goes right/top. The tree is never rebalanced, so its shape is a function of the
//! insertion order. Inserting sorted points yields a chain whose height equals the
//! number of points; shuffle bulk input if that matters.
//!
//! ## Arguments
//!
//! Stored and looked-up points must be finite and lie inside the bounds (boundary
//! included); [`KdTree::nearest`] only requires a finite query point. Query rectangles
//! must be finite and not inverted. Anything else is rejected with an [`Error`]
//! before the tree is touched. Querying an empty tree is not an error.
//!
//! # Example
//!
//! ```rust
//! use understory_kdtree::KdTree;
//! use kurbo::{Point, Rect};
//!
//! let mut tree = KdTree::new();
//! for (x, y) in [(0.7, 0.2), (0.5, 0.4), (0.2, 0.3), (0.4, 0.7), (0.9, 0.6)] {
//!     tree.insert(Point::new(x, y)).unwrap();
//! }
//! assert_eq!(tree.len(), 5);
//!
//! // Re-inserting a stored point is a no-op.
//! assert_eq!(tree.insert(Point::new(0.7, 0.2)), Ok(false));
//! assert_eq!(tree.len(), 5);
//!
//! assert_eq!(tree.contains(Point::new(0.5, 0.4)), Ok(true));
//!
//! // Points on the rectangle's edge are included.
//! let hits = tree.range(Rect::new(0.0, 0.0, 0.5, 0.5)).unwrap();
//! assert_eq!(hits.len(), 2);
//!
//! let near = tree.nearest(Point::new(0.45, 0.45)).unwrap();
//! assert_eq!(near, Some(Point::new(0.5, 0.4)));
//! ```
//!
//! ### Drawing the partition
//!
//! ```rust
//! use understory_kdtree::{Axis, KdTree};
//! use kurbo::Point;
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.5, 0.5)).unwrap();
//! tree.insert(Point::new(0.2, 0.8)).unwrap();
//!
//! for node in tree.nodes() {
//!     let line = node.split_line();
//!     match node.axis {
//!         Axis::X => assert_eq!(line.p0.x, line.p1.x),
//!         Axis::Y => assert_eq!(line.p0.y, line.p1.y),
//!     }
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`. It logs through the [`log`] facade.

#![no_std]

extern crate alloc;

mod error;
mod geom;
mod tree;
mod types;


pub use error::Error;
pub use tree::{KdTree, Nodes, UNIT_SQUARE};
pub use types::{Axis, NodeView};
