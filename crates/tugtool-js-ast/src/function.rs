// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Functions, methods and classes.

use serde::{Deserialize, Serialize};

use crate::binding::{Binding, BindingElement};
use crate::expression::{Expr, PropertyName, Var};
use crate::statement::BlockStmt;

/// A formal parameter list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Params {
    #[serde(default)]
    pub list: Vec<BindingElement>,
    pub rest: Option<Box<Binding>>,
}

/// A function declaration or function expression. Expressions may be
/// anonymous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub generator: bool,
    pub name: Option<Var>,
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub body: BlockStmt,
}

/// A class method, getter or setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub generator: bool,
    #[serde(default)]
    pub get: bool,
    #[serde(default)]
    pub set: bool,
    pub name: PropertyName,
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub body: BlockStmt,
}

/// A class field, `static x = 1;` or `y;`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub is_static: bool,
    pub name: PropertyName,
    pub init: Option<Expr>,
}

/// One member of a class body.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassElement {
    /// `static { ... }`
    StaticBlock(BlockStmt),
    Method(MethodDecl),
    Field(Field),
}

/// A class declaration or class expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: Option<Var>,
    pub extends: Option<Box<Expr>>,
    #[serde(default)]
    pub list: Vec<ClassElement>,
}

/// `(params) => body`. Expression bodies are wrapped by the producer in a
/// block holding a single `return`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowFunc {
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub body: BlockStmt,
}
