// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Borrowed, type-erased view of a tree node.
//!
//! [`Node`] is what visitors receive: a `Copy` handle holding a shared
//! reference to one node struct of the caller-owned tree. Wrapper enums
//! ([`Stmt`](ast::Stmt), [`Expr`](ast::Expr), [`Binding`](ast::Binding),
//! [`ClassElement`](ast::ClassElement)) are never nodes themselves; converting
//! one into a `Node` resolves to the variant it holds.
//!
//! [`NodeKind`] is the fieldless tag of a `Node`, handy for logging, matching
//! and serialized traces.

use serde::{Deserialize, Serialize};
use tugtool_js_ast as ast;

/// Generates [`Node`], [`NodeKind`] and the `From<&T>` conversions from a
/// single list of node struct names.
macro_rules! node_types {
    (
        $(
            $(#[$meta:meta])*
            $name:ident
        ),* $(,)?
    ) => {
        /// A borrowed reference to any node of the tree.
        #[derive(Debug, Clone, Copy)]
        pub enum Node<'a> {
            $(
                $(#[$meta])*
                $name(&'a ast::$name),
            )*
        }

        /// The variant tag of a [`Node`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum NodeKind {
            $(
                $(#[$meta])*
                $name,
            )*
        }

        impl NodeKind {
            /// Returns the node type name, e.g. `"IfStmt"`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(NodeKind::$name => stringify!($name),)*
                }
            }
        }

        impl Node<'_> {
            /// Returns the variant tag.
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$name(_) => NodeKind::$name,)*
                }
            }

            fn addr(&self) -> *const () {
                match self {
                    $(Node::$name(n) => *n as *const ast::$name as *const (),)*
                }
            }
        }

        $(
            impl<'a> From<&'a ast::$name> for Node<'a> {
                fn from(node: &'a ast::$name) -> Self {
                    Node::$name(node)
                }
            }
        )*
    };
}

node_types! {
    /// Program root.
    Ast,
    Var,
    BlockStmt,
    EmptyStmt,
    ExprStmt,
    IfStmt,
    DoWhileStmt,
    WhileStmt,
    ForStmt,
    ForInStmt,
    ForOfStmt,
    CaseClause,
    SwitchStmt,
    BranchStmt,
    ReturnStmt,
    WithStmt,
    LabelledStmt,
    ThrowStmt,
    TryStmt,
    DebuggerStmt,
    /// Import or export binding.
    Alias,
    ImportStmt,
    ExportStmt,
    DirectivePrologueStmt,
    PropertyName,
    BindingArray,
    BindingObjectItem,
    BindingObject,
    BindingElement,
    VarDecl,
    Params,
    FuncDecl,
    MethodDecl,
    Field,
    ClassDecl,
    LiteralExpr,
    /// Array literal slot. Holes never become nodes.
    Element,
    ArrayExpr,
    Property,
    ObjectExpr,
    TemplatePart,
    TemplateExpr,
    GroupExpr,
    IndexExpr,
    DotExpr,
    NewTargetExpr,
    ImportMetaExpr,
    Arg,
    Args,
    NewExpr,
    CallExpr,
    UnaryExpr,
    BinaryExpr,
    CondExpr,
    YieldExpr,
    ArrowFunc,
    CommaExpr,
}

impl NodeKind {
    /// Returns true for node types that have no child slots.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Var
                | NodeKind::EmptyStmt
                | NodeKind::BranchStmt
                | NodeKind::DebuggerStmt
                | NodeKind::Alias
                | NodeKind::DirectivePrologueStmt
                | NodeKind::LiteralExpr
                | NodeKind::NewTargetExpr
                | NodeKind::ImportMetaExpr
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Node<'_> {
    /// Returns true if both handles refer to the same node of the same tree.
    ///
    /// Identity is the pair (kind, address): a struct and its first inline
    /// field may share an address but never a kind.
    pub fn ptr_eq(&self, other: &Node<'_>) -> bool {
        self.kind() == other.kind() && std::ptr::eq(self.addr(), other.addr())
    }
}

impl<'a> From<&'a ast::Stmt> for Node<'a> {
    fn from(stmt: &'a ast::Stmt) -> Self {
        use ast::Stmt;
        match stmt {
            Stmt::Block(n) => n.into(),
            Stmt::Empty(n) => n.into(),
            Stmt::Expr(n) => n.into(),
            Stmt::If(n) => n.into(),
            Stmt::DoWhile(n) => n.into(),
            Stmt::While(n) => n.into(),
            Stmt::For(n) => n.into(),
            Stmt::ForIn(n) => n.into(),
            Stmt::ForOf(n) => n.into(),
            Stmt::Switch(n) => n.into(),
            Stmt::Branch(n) => n.into(),
            Stmt::Return(n) => n.into(),
            Stmt::With(n) => n.into(),
            Stmt::Labelled(n) => n.into(),
            Stmt::Throw(n) => n.into(),
            Stmt::Try(n) => n.into(),
            Stmt::Debugger(n) => n.into(),
            Stmt::Import(n) => n.into(),
            Stmt::Export(n) => n.into(),
            Stmt::DirectivePrologue(n) => n.into(),
            Stmt::VarDecl(n) => n.into(),
            Stmt::Func(n) => n.into(),
            Stmt::Class(n) => n.into(),
        }
    }
}

impl<'a> From<&'a ast::Expr> for Node<'a> {
    fn from(expr: &'a ast::Expr) -> Self {
        use ast::Expr;
        match expr {
            Expr::Var(n) => n.into(),
            Expr::Literal(n) => n.into(),
            Expr::Array(n) => n.into(),
            Expr::Object(n) => n.into(),
            Expr::Template(n) => n.into(),
            Expr::Group(n) => n.into(),
            Expr::Index(n) => n.into(),
            Expr::Dot(n) => n.into(),
            Expr::NewTarget(n) => n.into(),
            Expr::ImportMeta(n) => n.into(),
            Expr::New(n) => n.into(),
            Expr::Call(n) => n.into(),
            Expr::Unary(n) => n.into(),
            Expr::Binary(n) => n.into(),
            Expr::Cond(n) => n.into(),
            Expr::Yield(n) => n.into(),
            Expr::Arrow(n) => n.into(),
            Expr::Comma(n) => n.into(),
            Expr::Func(n) => n.into(),
            Expr::Class(n) => n.into(),
            Expr::VarDecl(n) => n.into(),
        }
    }
}

impl<'a> From<&'a ast::Binding> for Node<'a> {
    fn from(binding: &'a ast::Binding) -> Self {
        match binding {
            ast::Binding::Var(n) => n.into(),
            ast::Binding::Array(n) => n.into(),
            ast::Binding::Object(n) => n.into(),
        }
    }
}

impl<'a> From<&'a ast::ClassElement> for Node<'a> {
    fn from(element: &'a ast::ClassElement) -> Self {
        match element {
            ast::ClassElement::StaticBlock(n) => n.into(),
            ast::ClassElement::Method(n) => n.into(),
            ast::ClassElement::Field(n) => n.into(),
        }
    }
}
