// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! JavaScript abstract syntax tree.
//!
//! These are the node types a JavaScript parser hands to tugtool's analysis
//! passes. The crate only defines shape: every node is a plain owned value
//! with public fields, and the tree owns its children outright (no parent
//! pointers, no sharing). Traversal lives in `tugtool-js-walk`.
//!
//! # Layout
//!
//! - [`Ast`] is the program root and holds a single [`BlockStmt`].
//! - [`Stmt`], [`Expr`] and [`Binding`] are the wrapper enums used in child
//!   slots that accept more than one node type.
//! - Optional child slots are `Option`, ordered child slots are `Vec` in
//!   source order.
//!
//! All nodes implement serde's `Serialize` and `Deserialize`, which is how
//! trees cross the boundary from an out-of-process parser.
//!
//! ```
//! use tugtool_js_ast::{Ast, Expr, Stmt};
//!
//! // f(a, b);
//! let ast = Ast::new(vec![Stmt::expr(Expr::call(
//!     Expr::var("f"),
//!     vec![Expr::var("a"), Expr::var("b")],
//! ))]);
//! assert_eq!(ast.block.list.len(), 1);
//! ```

pub mod binding;
pub mod expression;
pub mod function;
pub mod op;
pub mod statement;

pub use binding::*;
pub use expression::*;
pub use function::*;
pub use op::*;
pub use statement::*;
