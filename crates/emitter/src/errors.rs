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

use thiserror::Error;
use unparser_ast::{NodeKind, ShapeError};

use crate::context::Enclosing;

/// Why a render pass was aborted. None of these are transient: each one means the tree
/// handed to the emitter is malformed, or outside what the host can render.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmitError {
    #[error("Malformed node: {0}")]
    Shape(#[from] ShapeError),
    #[error("Expected a {expected} node, found {found}")]
    UnexpectedNode { expected: NodeKind, found: NodeKind },
    #[error("{kind} cannot appear in a {enclosing:?} parameter list")]
    MisplacedArgument { kind: NodeKind, enclosing: Enclosing },
    #[error("No renderer for node type: {0}")]
    UnsupportedNode(NodeKind),
    #[error("Node nesting exceeds the maximum depth of {0}")]
    DepthExceeded(usize),
}
