// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Binding patterns and variable declarations.

use serde::{Deserialize, Serialize};

use crate::expression::{Expr, PropertyName, Var};
use crate::op::DeclKind;

/// A binding target: a plain identifier or a destructuring pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Binding {
    Var(Var),
    Array(BindingArray),
    Object(BindingObject),
}

impl Binding {
    pub fn var(name: impl Into<String>) -> Self {
        Binding::Var(Var::new(name))
    }
}

/// A binding with an optional default, e.g. `a = 1` in a parameter list.
///
/// The binding is absent for elisions in array patterns (`[, b] = xs`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingElement {
    pub binding: Option<Binding>,
    pub default: Option<Expr>,
}

impl BindingElement {
    pub fn new(binding: Binding) -> Self {
        Self {
            binding: Some(binding),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Expr) -> Self {
        self.default = Some(default);
        self
    }
}

/// `[a, b = 1, ...rest]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingArray {
    #[serde(default)]
    pub list: Vec<BindingElement>,
    pub rest: Option<Box<Binding>>,
}

/// One `key: value` entry of an object pattern. Shorthand entries have no key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingObjectItem {
    pub key: Option<PropertyName>,
    pub value: BindingElement,
}

/// `{ a, b: c, ...rest }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingObject {
    #[serde(default)]
    pub list: Vec<BindingObjectItem>,
    pub rest: Option<Var>,
}

/// `var`, `let` or `const` declaration list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    #[serde(default)]
    pub kind: DeclKind,
    #[serde(default)]
    pub list: Vec<BindingElement>,
}
