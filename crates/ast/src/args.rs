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

//! Typed, borrowed views over the argument node kinds. Decoding checks each node's
//! children against what its kind requires, so renderers only ever see well-formed input.

use crate::errors::ShapeError;
use crate::node::{Child, Node, NodeKind};

/// A decoded argument node.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgNode<'a> {
    Args(ArgList<'a>),
    Arg(&'a str),
    Shadowarg(&'a str),
    Optarg { name: &'a str, default: &'a Node },
    Kwarg(&'a str),
    Kwoptarg { name: &'a str, default: &'a Node },
    Restarg(Option<&'a str>),
    Kwrestarg(Option<&'a str>),
    Kwnilarg,
    ForwardArg,
    Blockarg(Option<&'a str>),
    BlockPass(Option<&'a Node>),
    ArgExpr(&'a Node),
    Procarg0(Procarg<'a>),
    Mlhs(Vec<&'a Node>),
}

/// The contents of a `procarg0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Procarg<'a> {
    /// Older `parser` releases put the bare parameter name directly under `procarg0`.
    Name(&'a str),
    /// One or more sub-patterns.
    Patterns(Vec<&'a Node>),
}

/// The children of an `args` node, split into ordinary parameters and shadow (block-local)
/// variables. Both halves keep their relative order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgList<'a> {
    pub normal: Vec<&'a Node>,
    pub shadow: Vec<&'a Node>,
}

impl<'a> ArgList<'a> {
    pub fn partition(nodes: impl IntoIterator<Item = &'a Node>) -> Self {
        let (shadow, normal): (Vec<_>, Vec<_>) = nodes
            .into_iter()
            .partition(|node| node.is(NodeKind::Shadowarg));
        Self { normal, shadow }
    }

    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.shadow.is_empty()
    }
}

impl<'a> ArgNode<'a> {
    pub fn from_node(node: &'a Node) -> Result<Self, ShapeError> {
        let view = match node.kind() {
            NodeKind::Args => ArgNode::Args(ArgList::partition(node.child_nodes()?)),
            NodeKind::Arg => ArgNode::Arg(sole_symbol(node)?),
            NodeKind::Shadowarg => ArgNode::Shadowarg(sole_symbol(node)?),
            NodeKind::Kwarg => ArgNode::Kwarg(sole_symbol(node)?),
            NodeKind::Optarg => {
                let (name, default) = name_and_default(node)?;
                ArgNode::Optarg { name, default }
            }
            NodeKind::Kwoptarg => {
                let (name, default) = name_and_default(node)?;
                ArgNode::Kwoptarg { name, default }
            }
            NodeKind::Restarg => ArgNode::Restarg(optional_symbol(node)?),
            NodeKind::Kwrestarg => ArgNode::Kwrestarg(optional_symbol(node)?),
            NodeKind::Blockarg => ArgNode::Blockarg(optional_symbol(node)?),
            NodeKind::Kwnilarg => {
                arity(node, 0, "0")?;
                ArgNode::Kwnilarg
            }
            NodeKind::ForwardArg => {
                arity(node, 0, "0")?;
                ArgNode::ForwardArg
            }
            NodeKind::BlockPass => match node.children() {
                [] => ArgNode::BlockPass(None),
                [child] if child.is_nil() => ArgNode::BlockPass(None),
                [_] => ArgNode::BlockPass(Some(node.node_at(0)?)),
                _ => return Err(arity_error(node, "0 or 1")),
            },
            NodeKind::ArgExpr => {
                arity(node, 1, "1")?;
                ArgNode::ArgExpr(node.node_at(0)?)
            }
            NodeKind::Procarg0 => match node.children() {
                [Child::Symbol(name)] => ArgNode::Procarg0(Procarg::Name(name)),
                _ => ArgNode::Procarg0(Procarg::Patterns(non_empty_nodes(node)?)),
            },
            NodeKind::Mlhs => ArgNode::Mlhs(non_empty_nodes(node)?),
            kind => return Err(ShapeError::NotAnArgument(kind)),
        };
        Ok(view)
    }
}

fn arity_error(node: &Node, expected: &'static str) -> ShapeError {
    ShapeError::Arity {
        kind: node.kind(),
        expected,
        found: node.children().len(),
    }
}

fn arity(node: &Node, count: usize, expected: &'static str) -> Result<(), ShapeError> {
    node.expect_arity(count..=count, expected)
}

fn sole_symbol(node: &Node) -> Result<&str, ShapeError> {
    arity(node, 1, "1")?;
    node.symbol_at(0)
}

fn name_and_default(node: &Node) -> Result<(&str, &Node), ShapeError> {
    arity(node, 2, "2")?;
    Ok((node.symbol_at(0)?, node.node_at(1)?))
}

/// `(restarg)`, `(restarg nil)` and `(restarg :name)` are all valid.
fn optional_symbol(node: &Node) -> Result<Option<&str>, ShapeError> {
    match node.children() {
        [] => Ok(None),
        [child] if child.is_nil() => Ok(None),
        [_] => node.symbol_at(0).map(Some),
        _ => Err(arity_error(node, "0 or 1")),
    }
}

fn non_empty_nodes(node: &Node) -> Result<Vec<&Node>, ShapeError> {
    node.expect_arity(1..=usize::MAX, "at least 1")?;
    node.child_nodes()
}
