// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for JavaScript AST traversal.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order** for `enter`
//! - **Post-order** for `exit`
//! - Children are visited in the fixed order given by [`Node::children`],
//!   which is not source order
//!
//! Every node reached gets exactly one `enter` and one `exit`, and the events
//! nest properly. This holds even when a visitor panics or returns an error.
//!
//! # Visitor Pattern
//!
//! [`Visitor`] is the plain read-only visitor used with [`walk`].
//! [`TryVisitor`] lets callbacks abort the walk with an error and is used with
//! [`try_walk`] and [`walk_with_options`]. For one-off walks, [`from_fns`]
//! builds a visitor from two closures.
//!
//! [`Node::children`]: crate::Node::children

mod dispatch;
mod traits;
mod walk;

pub use traits::{from_fns, FnVisitor, TryVisitor, Visitor};
pub use walk::{try_walk, walk, walk_with_options};
