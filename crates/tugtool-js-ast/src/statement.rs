// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statement nodes and the program root.

use serde::{Deserialize, Serialize};

use crate::binding::{Binding, VarDecl};
use crate::expression::Expr;
use crate::function::{ClassDecl, FuncDecl};
use crate::op::BranchKind;

/// A parsed program.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ast {
    #[serde(default)]
    pub block: BlockStmt,
}

impl Ast {
    pub fn new(list: Vec<Stmt>) -> Self {
        Self {
            block: BlockStmt { list },
        }
    }
}

/// Any JavaScript statement or declaration.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Block(BlockStmt),
    Empty(EmptyStmt),
    Expr(ExprStmt),
    If(IfStmt),
    DoWhile(DoWhileStmt),
    While(WhileStmt),
    For(ForStmt),
    ForIn(ForInStmt),
    ForOf(ForOfStmt),
    Switch(SwitchStmt),
    Branch(BranchStmt),
    Return(ReturnStmt),
    With(WithStmt),
    Labelled(LabelledStmt),
    Throw(ThrowStmt),
    Try(TryStmt),
    Debugger(DebuggerStmt),
    Import(ImportStmt),
    Export(ExportStmt),
    DirectivePrologue(DirectivePrologueStmt),
    VarDecl(VarDecl),
    Func(FuncDecl),
    Class(ClassDecl),
}

impl Stmt {
    /// An expression statement.
    pub fn expr(value: Expr) -> Self {
        Stmt::Expr(ExprStmt { value })
    }

    /// A block of statements.
    pub fn block(list: Vec<Stmt>) -> Self {
        Stmt::Block(BlockStmt { list })
    }
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockStmt {
    #[serde(default)]
    pub list: Vec<Stmt>,
}

/// `;`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyStmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub value: Expr,
}

/// `if (cond) body else else_body`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub cond: Expr,
    pub body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStmt {
    pub cond: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Box<Stmt>,
}

/// `for (init; cond; post) body`. Every clause may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    pub init: Option<Expr>,
    pub cond: Option<Expr>,
    pub post: Option<Expr>,
    pub body: Option<BlockStmt>,
}

/// `for (init in value) body`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForInStmt {
    pub init: Expr,
    pub value: Expr,
    pub body: Option<BlockStmt>,
}

/// `for (init of value) body` or `for await (...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForOfStmt {
    #[serde(default)]
    pub is_await: bool,
    pub init: Expr,
    pub value: Expr,
    pub body: Option<BlockStmt>,
}

/// `case cond: list` or, without a condition, `default: list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseClause {
    pub cond: Option<Expr>,
    #[serde(default)]
    pub list: Vec<Stmt>,
}

impl CaseClause {
    pub fn is_default(&self) -> bool {
        self.cond.is_none()
    }
}

/// `switch (init) { list }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStmt {
    pub init: Expr,
    #[serde(default)]
    pub list: Vec<CaseClause>,
}

/// `break label;` or `continue label;`. The label is a name, not a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchStmt {
    pub kind: BranchKind,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

/// `with (cond) body`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithStmt {
    pub cond: Expr,
    pub body: Box<Stmt>,
}

/// `label: value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledStmt {
    pub label: String,
    pub value: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowStmt {
    pub value: Expr,
}

/// `try body catch (binding) catch finally finally`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryStmt {
    pub body: Option<BlockStmt>,
    pub binding: Option<Binding>,
    pub catch: Option<BlockStmt>,
    pub finally: Option<BlockStmt>,
}

/// `debugger;`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DebuggerStmt;

/// A named import or export binding: `name as binding`.
///
/// `name` is absent when no `as` clause is present; `*` is a valid name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub name: Option<String>,
    pub binding: String,
}

/// `import default, { list } from "module"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStmt {
    #[serde(default)]
    pub list: Vec<Alias>,
    pub default: Option<String>,
    pub module: String,
}

/// `export { list } from "module"`, `export default decl`, `export decl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportStmt {
    #[serde(default)]
    pub list: Vec<Alias>,
    pub module: Option<String>,
    #[serde(default)]
    pub default: bool,
    pub decl: Option<Expr>,
}

/// A directive such as `"use strict"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectivePrologueStmt {
    pub value: String,
}
