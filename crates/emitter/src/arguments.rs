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

//! Renderers for the argument node kinds.

use itertools::Itertools;
use tracing::{debug, trace};
use unparser_ast::{ArgList, ArgNode, Node, NodeKind, Procarg};

use crate::context::Enclosing;
use crate::emitter::Emitter;
use crate::errors::EmitError;

impl Emitter<'_> {
    pub(crate) fn emit_argument(
        &mut self,
        view: ArgNode<'_>,
        enclosing: Enclosing,
    ) -> Result<(), EmitError> {
        match view {
            ArgNode::Args(list) => self.emit_args(&list, enclosing)?,
            ArgNode::Arg(name) | ArgNode::Shadowarg(name) => self.write(name),
            ArgNode::Optarg { name, default } => {
                self.write_all(&[name, " = "]);
                self.visit(default)?;
            }
            ArgNode::Kwarg(name) => self.write_all(&[name, ":"]),
            ArgNode::Kwoptarg { name, default } => {
                self.write_all(&[name, ": "]);
                self.visit(default)?;
            }
            ArgNode::Restarg(name) => self.write_all(&["*", name.unwrap_or_default()]),
            ArgNode::Kwrestarg(name) => self.write_all(&["**", name.unwrap_or_default()]),
            ArgNode::Kwnilarg => self.write("**nil"),
            ArgNode::ForwardArg => self.write("..."),
            ArgNode::Blockarg(name) => self.write_all(&["&", name.unwrap_or_default()]),
            ArgNode::BlockPass(expr) => {
                self.write("&");
                if let Some(expr) = expr {
                    self.visit(expr)?;
                }
            }
            ArgNode::ArgExpr(body) => self.parentheses(|this| this.visit(body))?,
            ArgNode::Procarg0(procarg) => self.emit_procarg(procarg)?,
            ArgNode::Mlhs(patterns) => self.parentheses(|this| this.delimited(patterns))?,
        }
        Ok(())
    }

    /// Ordinary parameters in source order, then `; ` and the block-locals.
    fn emit_args(&mut self, list: &ArgList<'_>, enclosing: Enclosing) -> Result<(), EmitError> {
        trace!(
            normal = list.normal.len(),
            shadow = list.shadow.len(),
            ?enclosing,
            "args"
        );
        if enclosing != Enclosing::Other
            && list.normal.iter().any(|node| node.is(NodeKind::ForwardArg))
        {
            return Err(EmitError::MisplacedArgument {
                kind: NodeKind::ForwardArg,
                enclosing,
            });
        }
        self.delimited(list.normal.iter().copied())?;

        if needs_disambiguator(list, enclosing) {
            debug!("lone plain block parameter, writing trailing separator");
            self.write(", ");
        }

        if list.shadow.is_empty() {
            return Ok(());
        }
        self.write("; ");
        self.delimited(list.shadow.iter().copied())
    }

    fn emit_procarg(&mut self, procarg: Procarg<'_>) -> Result<(), EmitError> {
        match procarg {
            Procarg::Name(name) => {
                self.write(name);
                Ok(())
            }
            Procarg::Patterns(patterns) if needs_parens(&patterns) => {
                self.parentheses(|this| this.delimited(patterns))
            }
            Procarg::Patterns(patterns) => self.delimited(patterns),
        }
    }
}

/// In a block, `|a|` parses to a `procarg0` while `|a,|` parses to a plain `arg`. So a
/// lone plain `arg` must be written with the trailing comma to come back the same.
fn needs_disambiguator(list: &ArgList<'_>, enclosing: Enclosing) -> bool {
    enclosing.is_block_literal()
        && list
            .normal
            .iter()
            .exactly_one()
            .is_ok_and(|node| node.is(NodeKind::Arg))
}

/// `|(a, b)|`, `|(*a)|` and `|((a, b))|` need their parentheses; `|a|` must not have them.
fn needs_parens(patterns: &[&Node]) -> bool {
    patterns.len() > 1
        || patterns
            .iter()
            .any(|node| matches!(node.kind(), NodeKind::Restarg | NodeKind::Mlhs))
}
