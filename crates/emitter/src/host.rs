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

//! The host side of the emitter: renderers for everything that is not an argument node.

use unparser_ast::{Child, Node, NodeKind, ShapeError, is_plain_symbol};

use crate::emitter::Emitter;
use crate::errors::EmitError;

const INDENT_LEVEL: usize = 2;

/// Renders the node kinds the argument core does not own. The emitter calls `emit` for
/// every such node; implementations write through the emitter and recurse with
/// `Emitter::visit`.
pub trait Host: Sync {
    fn emit(&self, node: &Node, emitter: &mut Emitter<'_>) -> Result<(), EmitError>;
}

/// A small Ruby host: literals, variables, simple calls, blocks, lambdas and method
/// definitions. Enough to embed parameter lists and their default values.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicHost;

impl Host for BasicHost {
    fn emit(&self, node: &Node, emitter: &mut Emitter<'_>) -> Result<(), EmitError> {
        match node.kind() {
            NodeKind::Int => match node.children() {
                [Child::Int(i)] => emitter.write(&i.to_string()),
                _ => return Err(leaf_error(node, "an integer")),
            },
            NodeKind::Float => match node.children() {
                [Child::Float(f)] => emitter.write(&format!("{f:?}")),
                _ => return Err(leaf_error(node, "a float")),
            },
            NodeKind::Str => match node.children() {
                [Child::Str(s)] => emitter.write(&quote_str(s)),
                _ => return Err(leaf_error(node, "a string")),
            },
            NodeKind::Sym => {
                node.expect_arity(1..=1, "1")?;
                emitter.write(&quote_sym(node.symbol_at(0)?));
            }
            NodeKind::Lvar | NodeKind::Ivar => {
                node.expect_arity(1..=1, "1")?;
                emitter.write(node.symbol_at(0)?);
            }
            NodeKind::Nil | NodeKind::True | NodeKind::False | NodeKind::SelfRef => {
                node.expect_arity(0..=0, "0")?;
                emitter.write(node.kind().as_str());
            }
            NodeKind::Array => {
                let items = node.child_nodes()?;
                emitter.write("[");
                emitter.delimited(items)?;
                emitter.write("]");
            }
            NodeKind::Send => self.emit_send(node, emitter)?,
            NodeKind::Block => self.emit_block(node, emitter)?,
            NodeKind::Def => self.emit_def(node, emitter)?,
            kind => return Err(EmitError::UnsupportedNode(kind)),
        }
        Ok(())
    }
}

impl BasicHost {
    /// `(send receiver :method args...)`, receiver `nil` for a self call.
    fn emit_send(&self, node: &Node, emitter: &mut Emitter<'_>) -> Result<(), EmitError> {
        node.expect_arity(2..=usize::MAX, "at least 2")?;
        let receiver = optional_node(node, 0)?;
        let method = node.symbol_at(1)?;
        let args = (2..node.children().len())
            .map(|index| node.node_at(index))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(receiver) = receiver {
            emitter.visit(receiver)?;
            emitter.write(".");
        }
        emitter.write(method);
        if !args.is_empty() {
            emitter.parentheses(|e| e.delimited(args))?;
        }
        Ok(())
    }

    /// `(block call args body)`. The parameter list is visited from inside the block, so it
    /// sees a block or lambda literal as its enclosing construct.
    fn emit_block(&self, node: &Node, emitter: &mut Emitter<'_>) -> Result<(), EmitError> {
        node.expect_arity(3..=3, "3")?;
        let call = node.node_at(0)?;
        let args = node.node_at(1)?;
        let body = optional_node(node, 2)?;
        let has_params = !args.children().is_empty();

        if call.is(NodeKind::Lambda) {
            emitter.write("->");
            if has_params {
                emitter.parentheses(|e| e.visit(args))?;
            }
            emitter.write(" {");
        } else {
            emitter.visit(call)?;
            emitter.write(" {");
            if has_params {
                emitter.write(" |");
                emitter.visit(args)?;
                emitter.write("|");
            }
        }
        if let Some(body) = body {
            emitter.write(" ");
            emitter.visit(body)?;
        }
        emitter.write(" }");
        Ok(())
    }

    /// `(def :name args body)`.
    fn emit_def(&self, node: &Node, emitter: &mut Emitter<'_>) -> Result<(), EmitError> {
        node.expect_arity(3..=3, "3")?;
        let name = node.symbol_at(0)?;
        let args = node.node_at(1)?;
        let body = optional_node(node, 2)?;

        emitter.write_all(&["def ", name]);
        if !args.children().is_empty() {
            emitter.parentheses(|e| e.visit(args))?;
        }
        if let Some(body) = body {
            emitter.write("\n");
            emitter.write(&" ".repeat(INDENT_LEVEL));
            emitter.visit(body)?;
        }
        emitter.write("\nend");
        Ok(())
    }
}

fn leaf_error(node: &Node, expected: &'static str) -> EmitError {
    let error = match node.children() {
        [_] => ShapeError::ChildType {
            kind: node.kind(),
            index: 0,
            expected,
        },
        children => ShapeError::Arity {
            kind: node.kind(),
            expected: "1",
            found: children.len(),
        },
    };
    error.into()
}

/// A child that is either a node or `nil`.
fn optional_node(node: &Node, index: usize) -> Result<Option<&Node>, ShapeError> {
    match node.child(index) {
        Some(child) if child.is_nil() => Ok(None),
        _ => node.node_at(index).map(Some),
    }
}

fn quote_sym(name: &str) -> String {
    if is_plain_symbol(name) {
        format!(":{name}")
    } else {
        format!(":{}", quote_str(name))
    }
}

/// Double-quoted Ruby string literal. `#` is escaped where it would start interpolation.
fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{1b}' => out.push_str("\\e"),
            '#' if matches!(chars.peek(), Some('{' | '@' | '$')) => out.push_str("\\#"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
