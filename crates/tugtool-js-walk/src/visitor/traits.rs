// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definitions.

use crate::node::Node;

/// Read-only visitor over a JavaScript AST.
///
/// The walker calls [`enter`](Visitor::enter) once per node before any of
/// its children and [`exit`](Visitor::exit) once per node after all of them.
/// Both receive the node's immediate parent, which is `None` only for the
/// node the walk started from.
///
/// `exit` is also called while a panic unwinds through the walk, for every
/// node whose `enter` already returned. An `exit` that panics during that
/// unwinding aborts the process.
///
/// # Example
///
/// ```
/// use tugtool_js_walk::{walk, Node, Visitor};
/// use tugtool_js_walk::ast::{Ast, Expr, Stmt};
///
/// #[derive(Default)]
/// struct Depth {
///     current: usize,
///     max: usize,
/// }
///
/// impl<'a> Visitor<'a> for Depth {
///     fn enter(&mut self, _node: Node<'a>, _parent: Option<Node<'a>>) {
///         self.current += 1;
///         self.max = self.max.max(self.current);
///     }
///
///     fn exit(&mut self, _node: Node<'a>, _parent: Option<Node<'a>>) {
///         self.current -= 1;
///     }
/// }
///
/// let ast = Ast::new(vec![Stmt::expr(Expr::var("x"))]);
/// let mut depth = Depth::default();
/// walk(&mut depth, &ast);
/// assert_eq!(depth.max, 4); // Ast > BlockStmt > ExprStmt > Var
/// assert_eq!(depth.current, 0);
/// ```
pub trait Visitor<'a> {
    /// Called before the node's children are visited.
    #[allow(unused_variables)]
    fn enter(&mut self, node: Node<'a>, parent: Option<Node<'a>>) {}

    /// Called after the node's children are visited.
    #[allow(unused_variables)]
    fn exit(&mut self, node: Node<'a>, parent: Option<Node<'a>>) {}
}

impl<'a, V: Visitor<'a> + ?Sized> Visitor<'a> for &mut V {
    fn enter(&mut self, node: Node<'a>, parent: Option<Node<'a>>) {
        (**self).enter(node, parent);
    }

    fn exit(&mut self, node: Node<'a>, parent: Option<Node<'a>>) {
        (**self).exit(node, parent);
    }
}

/// Visitor whose callbacks can abort the walk with an error.
///
/// Returning `Err` from either callback stops the walk. Nodes whose `enter`
/// succeeded still get their `exit`, innermost first; errors returned by
/// those unwinding exits are dropped and the first error wins. A node whose
/// own `enter` failed gets no `exit`.
pub trait TryVisitor<'a> {
    /// Error returned to the caller of [`try_walk`](crate::try_walk).
    type Error;

    /// Called before the node's children are visited.
    #[allow(unused_variables)]
    fn enter(&mut self, node: Node<'a>, parent: Option<Node<'a>>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the node's children are visited.
    #[allow(unused_variables)]
    fn exit(&mut self, node: Node<'a>, parent: Option<Node<'a>>) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<'a, V: TryVisitor<'a> + ?Sized> TryVisitor<'a> for &mut V {
    type Error = V::Error;

    fn enter(&mut self, node: Node<'a>, parent: Option<Node<'a>>) -> Result<(), Self::Error> {
        (**self).enter(node, parent)
    }

    fn exit(&mut self, node: Node<'a>, parent: Option<Node<'a>>) -> Result<(), Self::Error> {
        (**self).exit(node, parent)
    }
}

/// Runs an infallible [`Visitor`] through the fallible engine.
pub(crate) struct Infallibly<'v, V: ?Sized>(pub(crate) &'v mut V);

impl<'a, V: Visitor<'a> + ?Sized> TryVisitor<'a> for Infallibly<'_, V> {
    type Error = std::convert::Infallible;

    fn enter(&mut self, node: Node<'a>, parent: Option<Node<'a>>) -> Result<(), Self::Error> {
        self.0.enter(node, parent);
        Ok(())
    }

    fn exit(&mut self, node: Node<'a>, parent: Option<Node<'a>>) -> Result<(), Self::Error> {
        self.0.exit(node, parent);
        Ok(())
    }
}

/// A [`Visitor`] built from two closures. See [`from_fns`].
pub struct FnVisitor<E, X> {
    enter: E,
    exit: X,
}

/// Builds a [`Visitor`] from an enter closure and an exit closure.
///
/// ```
/// use std::cell::Cell;
/// use tugtool_js_walk::{from_fns, walk};
/// use tugtool_js_walk::ast::{Ast, Stmt, EmptyStmt};
///
/// let ast = Ast::new(vec![Stmt::Empty(EmptyStmt)]);
/// let entered = Cell::new(0);
/// let exited = Cell::new(0);
/// let mut visitor = from_fns(
///     |_, _| entered.set(entered.get() + 1),
///     |_, _| exited.set(exited.get() + 1),
/// );
/// walk(&mut visitor, &ast);
/// assert_eq!((entered.get(), exited.get()), (3, 3));
/// ```
pub fn from_fns<'a, E, X>(enter: E, exit: X) -> FnVisitor<E, X>
where
    E: FnMut(Node<'a>, Option<Node<'a>>),
    X: FnMut(Node<'a>, Option<Node<'a>>),
{
    FnVisitor { enter, exit }
}

impl<'a, E, X> Visitor<'a> for FnVisitor<E, X>
where
    E: FnMut(Node<'a>, Option<Node<'a>>),
    X: FnMut(Node<'a>, Option<Node<'a>>),
{
    fn enter(&mut self, node: Node<'a>, parent: Option<Node<'a>>) {
        (self.enter)(node, parent);
    }

    fn exit(&mut self, node: Node<'a>, parent: Option<Node<'a>>) {
        (self.exit)(node, parent);
    }
}
