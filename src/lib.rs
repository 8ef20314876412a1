//! # kdbalance
//!
//! `kdbalance` builds balanced k-d trees in Rust, usable natively as well as compiled to
//! WebAssembly (WASM). Every level of the tree splits on the true median along one axis, with
//! the axis cycling by depth, so lookups built on top of it can prune in `O(log N)` levels.
//!
//! ## Features
//!
//! - **Presorted construction**: each axis is sorted once, after which splits keep all orderings
//!   aligned in linear time per level, for `O(N·D·log N)` total work.
//! - **Static or dynamic dimensionality**: `[T; D]` points fix the axis count at compile time,
//!   `Vec<T>` points have it inferred from the first point.
//! - **Stack-safe linking**: trees are assembled with an explicit work-stack by default.
//! - **Growable**: [`KdTree::grow`] appends points and rebuilds while keeping every [`NodeId`].
//! - **Parallel presort**: the per-axis sorts run concurrently on the rayon pool.
//!
//! ## Example
//!
//! ```
//! use kdbalance::KdTree;
//!
//! let points = vec![[1, 1], [2, 2], [3, 3], [4, 4], [5, 5], [6, 6], [7, 7]];
//! let tree = KdTree::build(points).unwrap();
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.data(), &[4, 4]);
//! assert_eq!(root.left().unwrap().data(), &[2, 2]);
//! assert_eq!(tree.depth(), 3);
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`KdTree`] struct; walk it through [`NodeRef`] handles.

mod dimension;
mod error;
mod link;
mod node;
mod options;
mod point;
mod presort;
mod tree;
mod wasm;

pub use dimension::Dimensionality;
pub use error::Error;
pub use error::Result;
pub use node::NodeId;
pub use node::NodeRef;
pub use options::BuildOptions;
pub use options::LinkStrategy;
pub use point::KdPoint;
pub use point::Scalar;
pub use point::compare_axis;
pub use tree::KdTree;
pub use wasm::KdTreeWASM;
