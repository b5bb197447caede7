// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Child order table.
//!
//! [`Node::children`] lists the children of a node in the order the walker
//! visits them. The order is fixed per node type and is **not** source order:
//!
//! - Bodies and branches come before the condition that governs them (`if`,
//!   loops, `with`, `case`), so scope-building passes see the bindings a body
//!   introduces before they look at the controlling expression.
//! - Argument lists come before the callee, and function bodies and
//!   parameters come before the function name, so call-site rewriting sees
//!   arguments before the thing being called.
//!
//! Passes downstream of the walker depend on this exact order; change it only
//! together with them.
//!
//! Absent optional slots contribute nothing. Array holes are absent slots:
//! a hole yields neither an [`Element`](ast::Element) nor a value.

use tugtool_js_ast as ast;

use crate::node::Node;

/// Accumulates children in visiting order, dropping absent slots.
struct ChildList<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> ChildList<'a> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn one(&mut self, node: impl Into<Node<'a>>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    fn opt<N: Into<Node<'a>>>(&mut self, node: Option<N>) -> &mut Self {
        if let Some(node) = node {
            self.nodes.push(node.into());
        }
        self
    }

    fn each<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Node<'a>>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }
}

impl<'a> Node<'a> {
    /// Returns this node's children in visiting order.
    ///
    /// Leaf nodes return an empty list.
    pub fn children(self) -> Vec<Node<'a>> {
        let mut c = ChildList::new();
        match self {
            Node::Ast(n) => {
                c.one(&n.block);
            }
            Node::BlockStmt(n) => {
                c.each(&n.list);
            }
            Node::ExprStmt(n) => {
                c.one(&n.value);
            }
            Node::IfStmt(n) => {
                c.one(&*n.body).opt(n.else_body.as_deref()).one(&n.cond);
            }
            Node::DoWhileStmt(n) => {
                c.one(&*n.body).one(&n.cond);
            }
            Node::WhileStmt(n) => {
                c.one(&*n.body).one(&n.cond);
            }
            Node::ForStmt(n) => {
                c.opt(n.body.as_ref())
                    .opt(n.init.as_ref())
                    .opt(n.cond.as_ref())
                    .opt(n.post.as_ref());
            }
            Node::ForInStmt(n) => {
                c.opt(n.body.as_ref()).one(&n.init).one(&n.value);
            }
            Node::ForOfStmt(n) => {
                c.opt(n.body.as_ref()).one(&n.init).one(&n.value);
            }
            Node::CaseClause(n) => {
                c.each(&n.list).opt(n.cond.as_ref());
            }
            Node::SwitchStmt(n) => {
                c.each(&n.list).one(&n.init);
            }
            Node::ReturnStmt(n) => {
                c.opt(n.value.as_ref());
            }
            Node::WithStmt(n) => {
                c.one(&*n.body).one(&n.cond);
            }
            Node::LabelledStmt(n) => {
                c.one(&*n.value);
            }
            Node::ThrowStmt(n) => {
                c.one(&n.value);
            }
            Node::TryStmt(n) => {
                c.opt(n.body.as_ref())
                    .opt(n.catch.as_ref())
                    .opt(n.finally.as_ref())
                    .opt(n.binding.as_ref());
            }
            Node::ImportStmt(n) => {
                c.each(&n.list);
            }
            Node::ExportStmt(n) => {
                c.each(&n.list).opt(n.decl.as_ref());
            }
            Node::PropertyName(n) => match n {
                ast::PropertyName::Literal(literal) => {
                    c.one(literal);
                }
                ast::PropertyName::Computed(expr) => {
                    c.one(&**expr);
                }
            },
            Node::BindingArray(n) => {
                c.each(&n.list).opt(n.rest.as_deref());
            }
            Node::BindingObjectItem(n) => {
                c.opt(n.key.as_ref()).one(&n.value);
            }
            Node::BindingObject(n) => {
                c.each(&n.list).opt(n.rest.as_ref());
            }
            Node::BindingElement(n) => {
                c.opt(n.binding.as_ref()).opt(n.default.as_ref());
            }
            Node::VarDecl(n) => {
                c.each(&n.list);
            }
            Node::Params(n) => {
                c.each(&n.list).opt(n.rest.as_deref());
            }
            Node::FuncDecl(n) => {
                c.one(&n.body).one(&n.params).opt(n.name.as_ref());
            }
            Node::MethodDecl(n) => {
                c.one(&n.body).one(&n.params).one(&n.name);
            }
            Node::Field(n) => {
                c.one(&n.name).opt(n.init.as_ref());
            }
            Node::ClassDecl(n) => {
                c.opt(n.name.as_ref())
                    .opt(n.extends.as_deref())
                    .each(&n.list);
            }
            Node::Element(n) => {
                c.opt(n.value.as_ref());
            }
            Node::ArrayExpr(n) => {
                c.each(n.list.iter().filter(|element| !element.is_hole()));
            }
            Node::Property(n) => {
                c.opt(n.name.as_ref()).one(&n.value).opt(n.init.as_ref());
            }
            Node::ObjectExpr(n) => {
                c.each(&n.list);
            }
            Node::TemplatePart(n) => {
                c.one(&n.expr);
            }
            Node::TemplateExpr(n) => {
                c.each(&n.list).opt(n.tag.as_deref());
            }
            Node::GroupExpr(n) => {
                c.one(&*n.x);
            }
            Node::IndexExpr(n) => {
                c.one(&*n.x).one(&*n.y);
            }
            Node::DotExpr(n) => {
                c.one(&*n.x).one(&n.y);
            }
            Node::Arg(n) => {
                c.one(&n.value);
            }
            Node::Args(n) => {
                c.each(&n.list);
            }
            Node::NewExpr(n) => {
                c.opt(n.args.as_ref()).one(&*n.x);
            }
            Node::CallExpr(n) => {
                c.one(&n.args).one(&*n.x);
            }
            Node::UnaryExpr(n) => {
                c.one(&*n.x);
            }
            Node::BinaryExpr(n) => {
                c.one(&*n.x).one(&*n.y);
            }
            Node::CondExpr(n) => {
                c.one(&*n.cond).one(&*n.x).one(&*n.y);
            }
            Node::YieldExpr(n) => {
                c.opt(n.x.as_deref());
            }
            Node::ArrowFunc(n) => {
                c.one(&n.body).one(&n.params);
            }
            Node::CommaExpr(n) => {
                c.each(&n.list);
            }
            Node::Var(_)
            | Node::EmptyStmt(_)
            | Node::BranchStmt(_)
            | Node::DebuggerStmt(_)
            | Node::Alias(_)
            | Node::DirectivePrologueStmt(_)
            | Node::LiteralExpr(_)
            | Node::NewTargetExpr(_)
            | Node::ImportMetaExpr(_) => {}
        }
        c.nodes
    }
}
