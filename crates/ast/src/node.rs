// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use itertools::Itertools;
use strum::{EnumString, IntoStaticStr};

use crate::errors::ShapeError;

/// Every node type the unparser knows about, spelled the way the `parser` gem spells them.
///
/// The argument kinds are rendered by the argument core; the rest exist so that argument
/// lists can be embedded in (and carry default values from) the surrounding code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumString, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    /// A method, block or lambda parameter list.
    Args,
    /// Required positional parameter.
    Arg,
    /// Optional positional parameter with a default value.
    Optarg,
    /// Positional splat, possibly anonymous.
    Restarg,
    /// Required keyword parameter.
    Kwarg,
    /// Optional keyword parameter with a default value.
    Kwoptarg,
    /// Keyword double-splat, possibly anonymous.
    Kwrestarg,
    /// `**nil`, declaring that no keywords are accepted.
    Kwnilarg,
    /// `...` argument forwarding.
    ForwardArg,
    /// `&blk` block parameter.
    Blockarg,
    /// Block-local variable declared after `;`.
    Shadowarg,
    /// `&expr` in a call's argument list.
    BlockPass,
    /// Parenthesized expression used as a parameter.
    ArgExpr,
    /// The sole, possibly destructured, parameter of a block.
    #[strum(serialize = "procarg0")]
    Procarg0,
    /// Nested destructuring pattern.
    Mlhs,

    Block,
    Lambda,
    Def,
    Send,
    Lvar,
    Ivar,
    Int,
    Float,
    Str,
    Sym,
    Array,
    Nil,
    True,
    False,
    #[strum(serialize = "self")]
    SelfRef,
}

impl NodeKind {
    /// True for the kinds that are rendered by the argument core rather than the host.
    pub fn is_argument(self) -> bool {
        match self {
            NodeKind::Args
            | NodeKind::Arg
            | NodeKind::Optarg
            | NodeKind::Restarg
            | NodeKind::Kwarg
            | NodeKind::Kwoptarg
            | NodeKind::Kwrestarg
            | NodeKind::Kwnilarg
            | NodeKind::ForwardArg
            | NodeKind::Blockarg
            | NodeKind::Shadowarg
            | NodeKind::BlockPass
            | NodeKind::ArgExpr
            | NodeKind::Procarg0
            | NodeKind::Mlhs => true,
            NodeKind::Block
            | NodeKind::Lambda
            | NodeKind::Def
            | NodeKind::Send
            | NodeKind::Lvar
            | NodeKind::Ivar
            | NodeKind::Int
            | NodeKind::Float
            | NodeKind::Str
            | NodeKind::Sym
            | NodeKind::Array
            | NodeKind::Nil
            | NodeKind::True
            | NodeKind::False
            | NodeKind::SelfRef => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A single child of a node: either a nested node or a leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Symbol(String),
    Int(i64),
    Float(f64),
    Str(String),
    Nil,
}

impl Child {
    pub fn sym(name: impl Into<String>) -> Self {
        Child::Symbol(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Child::Str(value.into())
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Child::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Child::Nil)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

/// An immutable syntax tree node. Nodes hold no link to their parent; whatever context a
/// renderer needs is passed down to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Child>,
}

impl Node {
    pub fn new(kind: NodeKind, children: impl IntoIterator<Item = Child>) -> Self {
        Self {
            kind,
            children: children.into_iter().collect(),
        }
    }

    /// A node with no children, e.g. `(nil)` or an anonymous `(restarg)`.
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            children: vec![],
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Child> {
        self.children.get(index)
    }

    /// The first child, if it is a node.
    pub fn first_node(&self) -> Option<&Node> {
        self.children.first().and_then(Child::as_node)
    }

    /// Fails unless the number of children is within `count`; `expected` is the
    /// human-readable form of the range used in the error.
    pub fn expect_arity(
        &self,
        count: RangeInclusive<usize>,
        expected: &'static str,
    ) -> Result<(), ShapeError> {
        if !count.contains(&self.children.len()) {
            return Err(ShapeError::Arity {
                kind: self.kind,
                expected,
                found: self.children.len(),
            });
        }
        Ok(())
    }

    pub fn symbol_at(&self, index: usize) -> Result<&str, ShapeError> {
        self.child(index)
            .and_then(Child::as_symbol)
            .ok_or(ShapeError::ChildType {
                kind: self.kind,
                index,
                expected: "a symbol",
            })
    }

    pub fn node_at(&self, index: usize) -> Result<&Node, ShapeError> {
        self.child(index)
            .and_then(Child::as_node)
            .ok_or(ShapeError::ChildType {
                kind: self.kind,
                index,
                expected: "a node",
            })
    }

    /// All children, each of which must be a node.
    pub fn child_nodes(&self) -> Result<Vec<&Node>, ShapeError> {
        (0..self.children.len())
            .map(|index| self.node_at(index))
            .collect()
    }
}

/// True when `name` can be written as a bare `:name` symbol literal: an identifier with an
/// optional `?`, `!` or `=` suffix, or an instance, class or global variable name.
pub fn is_plain_symbol(name: &str) -> bool {
    let unprefixed = name
        .strip_prefix("@@")
        .or_else(|| name.strip_prefix(['@', '$']));
    let body = match unprefixed {
        Some(body) => body,
        None => name.strip_suffix(['?', '!', '=']).unwrap_or(name),
    };
    let mut chars = body.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Escape a string for the double-quoted s-expression form.
pub(crate) fn escape_sexp_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

impl Display for Child {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Child::Node(node) => write!(f, "{node}"),
            Child::Symbol(name) if is_plain_symbol(name) => write!(f, ":{name}"),
            Child::Symbol(name) => write!(f, ":\"{}\"", escape_sexp_str(name)),
            Child::Int(i) => write!(f, "{i}"),
            Child::Float(v) => write!(f, "{v:?}"),
            Child::Str(s) => write!(f, "\"{}\"", escape_sexp_str(s)),
            Child::Nil => write!(f, "nil"),
        }
    }
}

/// Prints the `parser` gem s-expression form, on one line: `(optarg :a (int 1))`.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.children.is_empty() {
            return write!(f, "({})", self.kind);
        }
        write!(f, "({} {})", self.kind, self.children.iter().join(" "))
    }
}
