// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression nodes.

use serde::{Deserialize, Serialize};

use crate::binding::VarDecl;
use crate::function::{ArrowFunc, ClassDecl, FuncDecl};
use crate::op::{BinaryOp, LiteralKind, UnaryOp};

/// Any JavaScript expression.
///
/// `VarDecl` appears here because the producer reuses it for the
/// initializer and binding target of `for` loops.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Var(Var),
    Literal(LiteralExpr),
    Array(ArrayExpr),
    Object(ObjectExpr),
    Template(TemplateExpr),
    Group(GroupExpr),
    Index(IndexExpr),
    Dot(DotExpr),
    NewTarget(NewTargetExpr),
    ImportMeta(ImportMetaExpr),
    New(NewExpr),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Cond(CondExpr),
    Yield(YieldExpr),
    Arrow(ArrowFunc),
    Comma(CommaExpr),
    Func(FuncDecl),
    Class(ClassDecl),
    VarDecl(VarDecl),
}

impl Expr {
    /// A reference to the variable `name`.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(Var::new(name))
    }

    /// A numeric literal with the given source text.
    pub fn number(value: impl Into<String>) -> Self {
        Expr::Literal(LiteralExpr::new(LiteralKind::Numeric, value))
    }

    /// A string literal with the given source text, quotes included.
    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(LiteralExpr::new(LiteralKind::String, value))
    }

    /// `callee(args...)`.
    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            x: Box::new(callee),
            args: Args::from_exprs(args),
            optional: false,
        })
    }

    /// `x op y`.
    pub fn binary(op: BinaryOp, x: Expr, y: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op,
            x: Box::new(x),
            y: Box::new(y),
        })
    }

    /// `[elements...]`, where `None` is a hole.
    pub fn array(elements: Vec<Option<Expr>>) -> Self {
        Expr::Array(ArrayExpr {
            list: elements
                .into_iter()
                .map(|value| Element {
                    value,
                    spread: false,
                })
                .collect(),
        })
    }
}

/// A variable reference or binding identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Var {
    pub name: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A literal token: number, string, regexp, keyword literal, or a bare
/// identifier used as a property key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiteralExpr {
    pub kind: LiteralKind,
    pub value: String,
}

impl LiteralExpr {
    pub fn new(kind: LiteralKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// An identifier-like key such as the `y` in `x.y` or `{ y: 1 }`.
    pub fn identifier(value: impl Into<String>) -> Self {
        Self::new(LiteralKind::Identifier, value)
    }
}

/// The key of an object property, class member, or destructuring item.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyName {
    /// `a`, `"a"`, `1`.
    Literal(LiteralExpr),
    /// `[expr]`.
    Computed(Box<Expr>),
}

impl PropertyName {
    pub fn is_computed(&self) -> bool {
        matches!(self, PropertyName::Computed(_))
    }
}

/// One slot of an array literal. A hole has no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub value: Option<Expr>,
    #[serde(default)]
    pub spread: bool,
}

impl Element {
    pub fn is_hole(&self) -> bool {
        self.value.is_none()
    }
}

/// `[a, , ...b]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpr {
    #[serde(default)]
    pub list: Vec<Element>,
}

/// One entry of an object literal.
///
/// Shorthand `{ a }` has no name and the variable as value; `{ a = 1 }` (only
/// valid as a destructuring target) additionally carries `init`. Spread
/// entries have no name and `spread` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: Option<PropertyName>,
    #[serde(default)]
    pub spread: bool,
    pub value: Expr,
    pub init: Option<Expr>,
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpr {
    #[serde(default)]
    pub list: Vec<Property>,
}

/// A `text${expr}` chunk of a template literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatePart {
    pub value: String,
    pub expr: Expr,
}

/// `` tag`a${b}c` ``
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExpr {
    pub tag: Option<Box<Expr>>,
    #[serde(default)]
    pub list: Vec<TemplatePart>,
    #[serde(default)]
    pub tail: String,
    #[serde(default)]
    pub optional: bool,
}

/// `(x)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupExpr {
    pub x: Box<Expr>,
}

/// `x[y]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub x: Box<Expr>,
    pub y: Box<Expr>,
    #[serde(default)]
    pub optional: bool,
}

/// `x.y`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotExpr {
    pub x: Box<Expr>,
    pub y: LiteralExpr,
    #[serde(default)]
    pub optional: bool,
}

/// `new.target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewTargetExpr;

/// `import.meta`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportMetaExpr;

/// A call or `new` argument, optionally spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    pub value: Expr,
    #[serde(default)]
    pub rest: bool,
}

/// A parenthesized argument list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Args {
    #[serde(default)]
    pub list: Vec<Arg>,
}

impl Args {
    pub fn from_exprs(exprs: Vec<Expr>) -> Self {
        Self {
            list: exprs
                .into_iter()
                .map(|value| Arg { value, rest: false })
                .collect(),
        }
    }
}

/// `new X` or `new X(args)`. The parenthesized list is absent for `new X`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpr {
    pub x: Box<Expr>,
    pub args: Option<Args>,
}

/// `x(args)` or `x?.(args)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub x: Box<Expr>,
    #[serde(default)]
    pub args: Args,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub x: Box<Expr>,
}

/// Arithmetic, comparison, logical and assignment expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub x: Box<Expr>,
    pub y: Box<Expr>,
}

/// `cond ? x : y`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CondExpr {
    pub cond: Box<Expr>,
    pub x: Box<Expr>,
    pub y: Box<Expr>,
}

/// `yield`, `yield x`, `yield* x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldExpr {
    #[serde(default)]
    pub generator: bool,
    pub x: Option<Box<Expr>>,
}

/// `a, b, c`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommaExpr {
    #[serde(default)]
    pub list: Vec<Expr>,
}
