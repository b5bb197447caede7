// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Depth-first traversal of JavaScript ASTs.
//!
//! This crate walks trees built from [`tugtool_js_ast`] (re-exported as
//! [`ast`]) and reports every node to a visitor twice: on the way down
//! ([`Visitor::enter`]) and on the way back up ([`Visitor::exit`]). Each
//! callback also receives the node's immediate parent.
//!
//! # Overview
//!
//! - **Walking**: [`walk`] for infallible visitors, [`try_walk`] for visitors
//!   that can abort, [`walk_with_options`] to bound nesting depth.
//! - **Nodes**: [`Node`] is a borrowed handle to any node in the tree and
//!   [`NodeKind`] names its type.
//! - **Order**: children are visited in a fixed per-type order, documented on
//!   [`Node::children`].
//!
//! # Quick Start
//!
//! ```
//! use tugtool_js_walk::{walk, Node, Visitor};
//! use tugtool_js_walk::ast::{Ast, BinaryOp, Expr, Stmt};
//!
//! struct Names(Vec<String>);
//!
//! impl<'a> Visitor<'a> for Names {
//!     fn enter(&mut self, node: Node<'a>, _parent: Option<Node<'a>>) {
//!         if let Node::Var(var) = node {
//!             self.0.push(var.name.clone());
//!         }
//!     }
//! }
//!
//! // a + b;
//! let ast = Ast::new(vec![Stmt::expr(Expr::binary(
//!     BinaryOp::Add,
//!     Expr::var("a"),
//!     Expr::var("b"),
//! ))]);
//!
//! let mut names = Names(Vec::new());
//! walk(&mut names, &ast);
//! assert_eq!(names.0, vec!["a", "b"]);
//! ```
//!
//! # Logging
//!
//! The walker emits [`tracing`] events under a `walk` span: `trace` level on
//! completion with node counts, `debug` level when a depth limit trips or
//! when open nodes are unwound after a failure. Nothing is printed unless
//! the application installs a subscriber.

pub use tugtool_js_ast as ast;

mod error;
mod node;
mod options;

/// Visitor traits and walk entry points.
pub mod visitor;

pub use error::WalkError;
pub use node::{Node, NodeKind};
pub use options::WalkOptions;
pub use visitor::{from_fns, try_walk, walk, walk_with_options, FnVisitor, TryVisitor, Visitor};
