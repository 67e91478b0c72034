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

use crate::node::NodeKind;

/// Failure to read a node from its s-expression form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SexpError {
    #[error("Failure to parse s-expression @ {line}/{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("Unknown node type: {0}")]
    UnknownNodeKind(String),
    #[error("Invalid integer literal: {0}")]
    InvalidInteger(String),
    #[error("Invalid float literal: {0}")]
    InvalidFloat(String),
}

/// A node of a known kind whose children do not have the shape that kind requires.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("{kind} expects {expected} children, found {found}")]
    Arity {
        kind: NodeKind,
        expected: &'static str,
        found: usize,
    },
    #[error("{kind} child {index} must be {expected}")]
    ChildType {
        kind: NodeKind,
        index: usize,
        expected: &'static str,
    },
    #[error("{0} is not an argument node")]
    NotAnArgument(NodeKind),
}
