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

use tracing::{trace, warn};
use unparser_ast::{ArgNode, Node, NodeKind};

use crate::buffer::TokenBuffer;
use crate::context::Enclosing;
use crate::errors::EmitError;
use crate::host::{BasicHost, Host};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EmitOptions {
    /// How deeply nested a tree may be before the pass is aborted. Rendering recurses once
    /// per level, so this bounds stack use on corrupt or hostile input.
    pub max_depth: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// One render pass. Argument kinds are rendered here; every other kind is handed to the
/// host, which calls back into `visit` for its children.
pub struct Emitter<'h> {
    host: &'h dyn Host,
    options: EmitOptions,
    buffer: TokenBuffer,
    depth: usize,
    /// What the node currently being visited sits inside of.
    enclosing: Enclosing,
    /// The first error any visit returned. Once set, the buffered text is never handed out.
    failure: Option<EmitError>,
}

impl<'h> Emitter<'h> {
    pub fn new(host: &'h dyn Host, options: EmitOptions) -> Self {
        Self {
            host,
            options,
            buffer: TokenBuffer::new(),
            depth: 0,
            enclosing: Enclosing::default(),
            failure: None,
        }
    }

    pub fn write(&mut self, token: &str) {
        self.buffer.write(token);
    }

    pub fn write_all(&mut self, tokens: &[&str]) {
        self.buffer.write_all(tokens);
    }

    pub fn enclosing(&self) -> Enclosing {
        self.enclosing
    }

    /// Render `node` and everything under it.
    pub fn visit(&mut self, node: &Node) -> Result<(), EmitError> {
        let enclosing = self.enclosing;
        let result = self.descend(node, |this| {
            if node.kind().is_argument() {
                let view = ArgNode::from_node(node)?;
                this.emit_argument(view, enclosing)
            } else {
                let host = this.host;
                host.emit(node, this)
            }
        });
        if let Err(e) = &result {
            self.failure.get_or_insert_with(|| e.clone());
        }
        result
    }

    /// Render an `args` node as if it sat directly inside `enclosing`, regardless of where
    /// the emitter currently is.
    pub fn visit_args(&mut self, node: &Node, enclosing: Enclosing) -> Result<(), EmitError> {
        if !node.is(NodeKind::Args) {
            return Err(EmitError::UnexpectedNode {
                expected: NodeKind::Args,
                found: node.kind(),
            });
        }
        let saved = std::mem::replace(&mut self.enclosing, enclosing);
        let result = self.visit(node);
        self.enclosing = saved;
        result
    }

    /// Visit each node, separating them with `", "`.
    pub fn delimited<'n>(
        &mut self,
        nodes: impl IntoIterator<Item = &'n Node>,
    ) -> Result<(), EmitError> {
        for (i, node) in nodes.into_iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.visit(node)?;
        }
        Ok(())
    }

    /// Wrap whatever `f` writes in parentheses.
    pub fn parentheses(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<(), EmitError>,
    ) -> Result<(), EmitError> {
        self.write("(");
        f(self)?;
        self.write(")");
        Ok(())
    }

    /// The rendered text, or the first error the pass hit. A failed pass never yields its
    /// partial output, even if the caller ignored the error from `visit`.
    pub fn finish(self) -> Result<String, EmitError> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(self.buffer.into_string()),
        }
    }

    fn descend(
        &mut self,
        node: &Node,
        f: impl FnOnce(&mut Self) -> Result<(), EmitError>,
    ) -> Result<(), EmitError> {
        if self.depth >= self.options.max_depth {
            warn!(
                max_depth = self.options.max_depth,
                kind = %node.kind(),
                "Aborting render: node nesting too deep"
            );
            return Err(EmitError::DepthExceeded(self.options.max_depth));
        }
        trace!(kind = %node.kind(), depth = self.depth, "visit");

        let saved = std::mem::replace(&mut self.enclosing, Enclosing::of_parent(node));
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        self.enclosing = saved;
        result
    }
}

/// Render a tree with the built-in host and default options.
pub fn unparse(node: &Node) -> Result<String, EmitError> {
    unparse_with(node, &BasicHost, EmitOptions::default())
}

pub fn unparse_with(
    node: &Node,
    host: &dyn Host,
    options: EmitOptions,
) -> Result<String, EmitError> {
    let mut emitter = Emitter::new(host, options);
    emitter.visit(node)?;
    emitter.finish()
}

/// Render just a parameter list, for the given enclosing construct. The result excludes
/// the surrounding `|...|` or `(...)`.
pub fn unparse_args(node: &Node, enclosing: Enclosing) -> Result<String, EmitError> {
    let mut emitter = Emitter::new(&BasicHost, EmitOptions::default());
    emitter.visit_args(node, enclosing)?;
    emitter.finish()
}
