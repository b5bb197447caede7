// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk entry points and the traversal engine.
//!
//! The engine is depth-first and parent-first: `enter` for a node, then its
//! whole subtree in [`Node::children`] order, then `exit`. Instead of
//! recursing, it keeps the open nodes on an explicit stack, so nesting depth
//! costs heap rather than call stack. The event sequence is exactly what the
//! recursive definition produces.
//!
//! The stack lives in a guard whose `Drop` exits every node still open.
//! That is what keeps `enter`/`exit` paired when a visitor panics or
//! returns an error partway through.

use std::convert::Infallible;

use tracing::{debug, trace, trace_span};

use super::traits::{Infallibly, TryVisitor, Visitor};
use crate::error::WalkError;
use crate::node::Node;
use crate::options::WalkOptions;

/// Walks the tree under `root`, calling `visitor` for every node.
///
/// `root` may be any node: an [`Ast`](crate::ast::Ast), a statement, an
/// expression, or a [`Node`] handle. Its parent is reported as `None`.
///
/// # Example
///
/// ```
/// use tugtool_js_walk::{walk, Node, NodeKind, Visitor};
/// use tugtool_js_walk::ast::{Expr, Stmt};
///
/// struct Kinds(Vec<NodeKind>);
///
/// impl<'a> Visitor<'a> for Kinds {
///     fn enter(&mut self, node: Node<'a>, _parent: Option<Node<'a>>) {
///         self.0.push(node.kind());
///     }
/// }
///
/// // f(a)
/// let stmt = Stmt::expr(Expr::call(Expr::var("f"), vec![Expr::var("a")]));
/// let mut kinds = Kinds(Vec::new());
/// walk(&mut kinds, &stmt);
/// assert_eq!(
///     kinds.0,
///     vec![
///         NodeKind::ExprStmt,
///         NodeKind::CallExpr,
///         NodeKind::Args,
///         NodeKind::Arg,
///         NodeKind::Var, // a
///         NodeKind::Var, // f
///     ]
/// );
/// ```
pub fn walk<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, root: impl Into<Node<'a>>) {
    if let Err(never) = try_walk(&mut Infallibly(visitor), root) {
        match never {}
    }
}

/// Walks the tree under `root` with a visitor that may fail.
///
/// The first error returned by `enter` or `exit` stops the walk and is
/// returned unchanged, after every node still open has been exited.
pub fn try_walk<'a, V: TryVisitor<'a> + ?Sized>(
    visitor: &mut V,
    root: impl Into<Node<'a>>,
) -> Result<(), V::Error> {
    drive(visitor, root.into(), Unbounded).map_err(|halt| match halt {
        Halt::Visitor(err) => err,
        Halt::Depth(never) => match never {},
    })
}

/// Walks the tree under `root` under the given [`WalkOptions`].
///
/// # Errors
///
/// - [`WalkError::DepthLimitExceeded`] if a node would be entered deeper than
///   `options.max_depth`. That node is not entered.
/// - [`WalkError::Visitor`] if a callback fails.
///
/// Either way, every node already entered has been exited when this returns.
pub fn walk_with_options<'a, V: TryVisitor<'a> + ?Sized>(
    visitor: &mut V,
    root: impl Into<Node<'a>>,
    options: &WalkOptions,
) -> Result<(), WalkError<V::Error>> {
    let bound = MaxDepth(options.max_depth);
    drive(visitor, root.into(), bound).map_err(|halt| match halt {
        Halt::Visitor(err) => WalkError::Visitor(err),
        Halt::Depth(limit) => WalkError::DepthLimitExceeded { limit },
    })
}

/// Decides whether a node may be entered at a given depth.
trait DepthBound: Copy {
    /// What a refused node reports. `Infallible` when nothing is refused.
    type Exceeded;

    fn check(self, depth: usize) -> Result<(), Self::Exceeded>;
}

#[derive(Clone, Copy)]
struct Unbounded;

impl DepthBound for Unbounded {
    type Exceeded = Infallible;

    fn check(self, _depth: usize) -> Result<(), Infallible> {
        Ok(())
    }
}

#[derive(Clone, Copy)]
struct MaxDepth(Option<usize>);

impl DepthBound for MaxDepth {
    type Exceeded = usize;

    fn check(self, depth: usize) -> Result<(), usize> {
        match self.0 {
            Some(limit) if depth > limit => Err(limit),
            _ => Ok(()),
        }
    }
}

/// Why the engine stopped early.
enum Halt<E, D> {
    Visitor(E),
    Depth(D),
}

type Stop<'a, V, B> = Halt<<V as TryVisitor<'a>>::Error, <B as DepthBound>::Exceeded>;

fn drive<'a, V: TryVisitor<'a> + ?Sized, B: DepthBound>(
    visitor: &mut V,
    root: Node<'a>,
    bound: B,
) -> Result<(), Stop<'a, V, B>> {
    let span = trace_span!("walk", root = %root.kind());
    let _entered = span.enter();

    let mut walker = Walker::new(visitor, bound);
    walker.run(root)?;
    trace!(
        visited = walker.visited,
        deepest = walker.deepest,
        "walk complete"
    );
    Ok(())
}

/// A node whose `enter` has run and whose `exit` has not.
struct Frame<'a> {
    node: Node<'a>,
    parent: Option<Node<'a>>,
    children: std::vec::IntoIter<Node<'a>>,
}

struct Walker<'v, 'a, V: TryVisitor<'a> + ?Sized, B> {
    visitor: &'v mut V,
    bound: B,
    stack: Vec<Frame<'a>>,
    visited: usize,
    deepest: usize,
}

impl<'v, 'a, V: TryVisitor<'a> + ?Sized, B: DepthBound> Walker<'v, 'a, V, B> {
    fn new(visitor: &'v mut V, bound: B) -> Self {
        Self {
            visitor,
            bound,
            stack: Vec::new(),
            visited: 0,
            deepest: 0,
        }
    }

    fn run(&mut self, root: Node<'a>) -> Result<(), Stop<'a, V, B>> {
        self.open(root, None)?;
        while let Some(frame) = self.stack.last_mut() {
            let parent = frame.node;
            let next = frame.children.next();
            match next {
                Some(child) => self.open(child, Some(parent))?,
                None => self.close()?,
            }
        }
        Ok(())
    }

    fn open(&mut self, node: Node<'a>, parent: Option<Node<'a>>) -> Result<(), Stop<'a, V, B>> {
        let depth = self.stack.len() + 1;
        if let Err(exceeded) = self.bound.check(depth) {
            debug!(depth, kind = %node.kind(), "walk depth limit exceeded");
            return Err(Halt::Depth(exceeded));
        }

        self.visitor.enter(node, parent).map_err(Halt::Visitor)?;
        self.stack.push(Frame {
            node,
            parent,
            children: node.children().into_iter(),
        });
        self.visited += 1;
        self.deepest = self.deepest.max(depth);
        Ok(())
    }

    fn close(&mut self) -> Result<(), Stop<'a, V, B>> {
        if let Some(frame) = self.stack.pop() {
            self.visitor
                .exit(frame.node, frame.parent)
                .map_err(Halt::Visitor)?;
        }
        Ok(())
    }
}

impl<'a, V: TryVisitor<'a> + ?Sized, B> Drop for Walker<'_, 'a, V, B> {
    fn drop(&mut self) {
        if self.stack.is_empty() {
            return;
        }
        debug!(
            open = self.stack.len(),
            panicking = std::thread::panicking(),
            "unwinding open nodes"
        );
        while let Some(frame) = self.stack.pop() {
            if self.visitor.exit(frame.node, frame.parent).is_err() {
                debug!(kind = %frame.node.kind(), "discarding exit error raised while unwinding");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use tugtool_js_ast::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Enter(NodeKind),
        Exit(NodeKind),
    }

    use Event::{Enter, Exit};

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl<'a> Visitor<'a> for Recorder {
        fn enter(&mut self, node: Node<'a>, _parent: Option<Node<'a>>) {
            self.events.push(Enter(node.kind()));
        }

        fn exit(&mut self, node: Node<'a>, _parent: Option<Node<'a>>) {
            self.events.push(Exit(node.kind()));
        }
    }

    impl<'a> TryVisitor<'a> for Recorder {
        type Error = String;

        fn enter(&mut self, node: Node<'a>, _parent: Option<Node<'a>>) -> Result<(), String> {
            self.events.push(Enter(node.kind()));
            Ok(())
        }

        fn exit(&mut self, node: Node<'a>, _parent: Option<Node<'a>>) -> Result<(), String> {
            self.events.push(Exit(node.kind()));
            Ok(())
        }
    }

    /// Fails (or panics) when it meets the variable with the given name.
    struct Tripwire {
        name: &'static str,
        on_exit: bool,
        events: Vec<Event>,
    }

    impl Tripwire {
        fn on_enter(name: &'static str) -> Self {
            Self {
                name,
                on_exit: false,
                events: Vec::new(),
            }
        }

        fn on_exit(name: &'static str) -> Self {
            Self {
                name,
                on_exit: true,
                events: Vec::new(),
            }
        }

        fn is_target(&self, node: Node<'_>) -> bool {
            matches!(node, Node::Var(var) if var.name == self.name)
        }
    }

    impl<'a> TryVisitor<'a> for Tripwire {
        type Error = String;

        fn enter(&mut self, node: Node<'a>, _parent: Option<Node<'a>>) -> Result<(), String> {
            if !self.on_exit && self.is_target(node) {
                return Err(format!("enter {}", self.name));
            }
            self.events.push(Enter(node.kind()));
            Ok(())
        }

        fn exit(&mut self, node: Node<'a>, _parent: Option<Node<'a>>) -> Result<(), String> {
            self.events.push(Exit(node.kind()));
            if self.on_exit && self.is_target(node) {
                return Err(format!("exit {}", self.name));
            }
            Ok(())
        }
    }

    impl<'a> Visitor<'a> for Tripwire {
        fn enter(&mut self, node: Node<'a>, _parent: Option<Node<'a>>) {
            if self.is_target(node) {
                panic!("tripped on {}", self.name);
            }
            self.events.push(Enter(node.kind()));
        }

        fn exit(&mut self, node: Node<'a>, _parent: Option<Node<'a>>) {
            self.events.push(Exit(node.kind()));
        }
    }

    /// `a + b;`
    fn sum_program() -> Ast {
        Ast::new(vec![Stmt::expr(Expr::binary(
            BinaryOp::Add,
            Expr::var("a"),
            Expr::var("b"),
        ))])
    }

    #[test]
    fn test_empty_statement_block() {
        let ast = Ast::new(vec![Stmt::Empty(EmptyStmt)]);
        let mut recorder = Recorder::default();
        walk(&mut recorder, &ast);
        assert_eq!(
            recorder.events,
            vec![
                Enter(NodeKind::Ast),
                Enter(NodeKind::BlockStmt),
                Enter(NodeKind::EmptyStmt),
                Exit(NodeKind::EmptyStmt),
                Exit(NodeKind::BlockStmt),
                Exit(NodeKind::Ast),
            ]
        );
    }

    #[test]
    fn test_if_body_before_condition() {
        // if (x) { y; }
        let stmt = Stmt::If(IfStmt {
            cond: Expr::var("x"),
            body: Box::new(Stmt::block(vec![Stmt::expr(Expr::var("y"))])),
            else_body: None,
        });
        let mut recorder = Recorder::default();
        walk(&mut recorder, &stmt);
        assert_eq!(
            recorder.events,
            vec![
                Enter(NodeKind::IfStmt),
                Enter(NodeKind::BlockStmt),
                Enter(NodeKind::ExprStmt),
                Enter(NodeKind::Var),
                Exit(NodeKind::Var),
                Exit(NodeKind::ExprStmt),
                Exit(NodeKind::BlockStmt),
                Enter(NodeKind::Var),
                Exit(NodeKind::Var),
                Exit(NodeKind::IfStmt),
            ]
        );
    }

    #[test]
    fn test_call_arguments_before_callee() {
        let expr = Expr::call(Expr::var("f"), vec![Expr::var("a"), Expr::var("b")]);
        let mut names = Vec::new();
        let mut visitor = crate::from_fns(
            |node, _| {
                if let Node::Var(var) = node {
                    names.push(var.name.clone());
                }
            },
            |_, _| {},
        );
        walk(&mut visitor, &expr);
        assert_eq!(names, vec!["a", "b", "f"]);
    }

    #[test]
    fn test_array_hole_produces_no_events() {
        let expr = Expr::array(vec![Some(Expr::number("1")), None, Some(Expr::number("3"))]);
        let mut literals = Vec::new();
        let mut elements = 0;
        let mut visitor = crate::from_fns(
            |node, _| match node {
                Node::LiteralExpr(lit) => literals.push(lit.value.clone()),
                Node::Element(_) => elements += 1,
                _ => {}
            },
            |_, _| {},
        );
        walk(&mut visitor, &expr);
        assert_eq!(literals, vec!["1", "3"]);
        assert_eq!(elements, 2);
    }

    #[test]
    fn test_class_members_in_order() {
        let class = Expr::Class(ClassDecl {
            name: Some(Var::new("C")),
            extends: Some(Box::new(Expr::var("Base"))),
            list: vec![
                ClassElement::Field(Field {
                    is_static: false,
                    name: PropertyName::Literal(LiteralExpr::identifier("x")),
                    init: None,
                }),
                ClassElement::Method(MethodDecl {
                    is_static: false,
                    is_async: false,
                    generator: false,
                    get: false,
                    set: false,
                    name: PropertyName::Literal(LiteralExpr::identifier("m")),
                    params: Params::default(),
                    body: BlockStmt::default(),
                }),
            ],
        });
        let mut recorder = Recorder::default();
        walk(&mut recorder, &class);
        let entered: Vec<NodeKind> = recorder
            .events
            .iter()
            .filter_map(|event| match event {
                Enter(kind) => Some(*kind),
                Exit(_) => None,
            })
            .collect();
        assert_eq!(
            entered,
            vec![
                NodeKind::ClassDecl,
                NodeKind::Var,
                NodeKind::Var,
                NodeKind::Field,
                NodeKind::PropertyName,
                NodeKind::LiteralExpr,
                NodeKind::MethodDecl,
                NodeKind::BlockStmt,
                NodeKind::Params,
                NodeKind::PropertyName,
                NodeKind::LiteralExpr,
            ]
        );
        assert_eq!(recorder.events.last(), Some(&Exit(NodeKind::ClassDecl)));
    }

    #[test]
    fn test_parent_is_reported() {
        let ast = sum_program();
        let mut pairs = Vec::new();
        let mut visitor = crate::from_fns(
            |node, parent| pairs.push((node.kind(), parent.map(|p| p.kind()))),
            |_, _| {},
        );
        walk(&mut visitor, &ast);
        assert_eq!(
            pairs,
            vec![
                (NodeKind::Ast, None),
                (NodeKind::BlockStmt, Some(NodeKind::Ast)),
                (NodeKind::ExprStmt, Some(NodeKind::BlockStmt)),
                (NodeKind::BinaryExpr, Some(NodeKind::ExprStmt)),
                (NodeKind::Var, Some(NodeKind::BinaryExpr)),
                (NodeKind::Var, Some(NodeKind::BinaryExpr)),
            ]
        );
    }

    #[test]
    fn test_exit_receives_same_parent_as_enter() {
        let ast = sum_program();
        let mut entered = Vec::new();
        let mut exited = Vec::new();
        let mut visitor = crate::from_fns(
            |node, parent| entered.push((node, parent)),
            |node, parent| exited.push((node, parent)),
        );
        walk(&mut visitor, &ast);
        assert_eq!(entered.len(), exited.len());
        for (node, parent) in &exited {
            let (_, enter_parent) = entered
                .iter()
                .find(|(n, _)| n.ptr_eq(node))
                .expect("exit without enter");
            match (parent, enter_parent) {
                (Some(a), Some(b)) => assert!(a.ptr_eq(b)),
                (None, None) => {}
                _ => panic!("parent mismatch for {}", node.kind()),
            }
        }
    }

    #[test]
    fn test_panic_still_exits_open_nodes() {
        let ast = sum_program();
        let mut visitor = Tripwire::on_enter("b");
        let result = catch_unwind(AssertUnwindSafe(|| walk(&mut visitor, &ast)));
        assert!(result.is_err());
        assert_eq!(
            visitor.events,
            vec![
                Enter(NodeKind::Ast),
                Enter(NodeKind::BlockStmt),
                Enter(NodeKind::ExprStmt),
                Enter(NodeKind::BinaryExpr),
                Enter(NodeKind::Var),
                Exit(NodeKind::Var),
                Exit(NodeKind::BinaryExpr),
                Exit(NodeKind::ExprStmt),
                Exit(NodeKind::BlockStmt),
                Exit(NodeKind::Ast),
            ]
        );
    }

    #[test]
    fn test_enter_error_unwinds_ancestors_only() {
        let ast = sum_program();
        let mut visitor = Tripwire::on_enter("b");
        let result = try_walk(&mut visitor, &ast);
        assert_eq!(result, Err("enter b".to_string()));
        assert_eq!(
            visitor.events,
            vec![
                Enter(NodeKind::Ast),
                Enter(NodeKind::BlockStmt),
                Enter(NodeKind::ExprStmt),
                Enter(NodeKind::BinaryExpr),
                Enter(NodeKind::Var),
                Exit(NodeKind::Var),
                Exit(NodeKind::BinaryExpr),
                Exit(NodeKind::ExprStmt),
                Exit(NodeKind::BlockStmt),
                Exit(NodeKind::Ast),
            ]
        );
    }

    #[test]
    fn test_exit_error_skips_siblings() {
        let ast = sum_program();
        let mut visitor = Tripwire::on_exit("a");
        let result = try_walk(&mut visitor, &ast);
        assert_eq!(result, Err("exit a".to_string()));
        assert_eq!(
            visitor.events,
            vec![
                Enter(NodeKind::Ast),
                Enter(NodeKind::BlockStmt),
                Enter(NodeKind::ExprStmt),
                Enter(NodeKind::BinaryExpr),
                Enter(NodeKind::Var),
                Exit(NodeKind::Var),
                Exit(NodeKind::BinaryExpr),
                Exit(NodeKind::ExprStmt),
                Exit(NodeKind::BlockStmt),
                Exit(NodeKind::Ast),
            ]
        );
    }

    #[test]
    fn test_depth_limit() {
        let ast = sum_program();
        let mut recorder = Recorder::default();
        let options = WalkOptions::new().with_max_depth(3);
        let err = walk_with_options(&mut recorder, &ast, &options).unwrap_err();
        assert_eq!(err, WalkError::DepthLimitExceeded { limit: 3 });
        assert_eq!(err.into_visitor_error(), None);
        assert_eq!(
            recorder.events,
            vec![
                Enter(NodeKind::Ast),
                Enter(NodeKind::BlockStmt),
                Enter(NodeKind::ExprStmt),
                Exit(NodeKind::ExprStmt),
                Exit(NodeKind::BlockStmt),
                Exit(NodeKind::Ast),
            ]
        );
    }

    #[test]
    fn test_visitor_error_under_options() {
        let ast = sum_program();
        let mut visitor = Tripwire::on_enter("b");
        let options = WalkOptions::new().with_max_depth(10);
        let err = walk_with_options(&mut visitor, &ast, &options).unwrap_err();
        assert_eq!(err.to_string(), "visitor aborted walk: enter b");
        assert_eq!(err.into_visitor_error(), Some("enter b".to_string()));
        assert_eq!(visitor.events.len(), 10);
    }

    #[test]
    fn test_depth_limit_not_reached() {
        let ast = sum_program();
        let mut recorder = Recorder::default();
        let options = WalkOptions::new().with_max_depth(5);
        let result = walk_with_options(&mut recorder, &ast, &options);
        assert_eq!(result, Ok(()));
        assert_eq!(recorder.events.len(), 12);
    }

    #[test]
    fn test_deep_nesting() {
        const DEPTH: usize = 2_000;
        let mut expr = Expr::var("x");
        for _ in 0..DEPTH {
            expr = Expr::Group(GroupExpr { x: Box::new(expr) });
        }

        let depth = Cell::new(0usize);
        let deepest = Cell::new(0usize);
        let mut visitor = crate::from_fns(
            |_, _| {
                depth.set(depth.get() + 1);
                deepest.set(deepest.get().max(depth.get()));
            },
            |_, _| depth.set(depth.get() - 1),
        );
        walk(&mut visitor, &expr);
        assert_eq!(deepest.get(), DEPTH + 1);
        assert_eq!(depth.get(), 0);

        let options = WalkOptions::new().with_max_depth(100);
        let result = walk_with_options(&mut Recorder::default(), &expr, &options);
        assert_eq!(result, Err(WalkError::DepthLimitExceeded { limit: 100 }));
    }

    #[test]
    fn test_try_walk_has_no_depth_limit() {
        const DEPTH: usize = 2_000;
        let mut expr = Expr::var("x");
        for _ in 0..DEPTH {
            expr = Expr::Group(GroupExpr { x: Box::new(expr) });
        }

        let mut recorder = Recorder::default();
        assert_eq!(try_walk(&mut recorder, &expr), Ok(()));
        assert_eq!(recorder.events.len(), 2 * (DEPTH + 1));
        assert_eq!(recorder.events.last(), Some(&Exit(NodeKind::GroupExpr)));
    }

    #[test]
    fn test_throw_statement() {
        let stmt = Stmt::Throw(ThrowStmt {
            value: Expr::var("e"),
        });
        let mut recorder = Recorder::default();
        walk(&mut recorder, &stmt);
        assert_eq!(
            recorder.events,
            vec![
                Enter(NodeKind::ThrowStmt),
                Enter(NodeKind::Var),
                Exit(NodeKind::Var),
                Exit(NodeKind::ThrowStmt),
            ]
        );
    }

    #[test]
    fn test_walk_from_node_handle() {
        let ast = sum_program();
        let mut recorder = Recorder::default();
        walk(&mut recorder, Node::from(&ast.block.list[0]));
        assert_eq!(recorder.events.first(), Some(&Enter(NodeKind::ExprStmt)));
        assert_eq!(recorder.events.len(), 8);
    }
}
