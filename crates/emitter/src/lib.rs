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

//! Renders parameter and argument-list nodes back into source text whose re-parse yields
//! the same tree. The hard cases are the ones where the tree carries information the
//! obvious spelling loses: `|a|` versus `|a,|`, the parenthesization of a lone
//! destructured block parameter, and block-local variables that must come last.

mod arguments;
mod buffer;
mod context;
mod emitter;
mod errors;
mod host;

pub use crate::buffer::TokenBuffer;
pub use crate::context::Enclosing;
pub use crate::emitter::{EmitOptions, Emitter, unparse, unparse_args, unparse_with};
pub use crate::errors::EmitError;
pub use crate::host::{BasicHost, Host};
pub use unparser_ast::{Child, Node, NodeKind, parse_sexp};

#[cfg(test)]
mod tests;
