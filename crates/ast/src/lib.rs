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

//! The tree consumed by the argument unparser: an immutable node model in the shape the
//! Ruby `parser` gem produces, a reader for its s-expression notation, and typed views
//! over the argument node kinds.

#[macro_use]
extern crate pest_derive;

mod args;
mod errors;
mod node;
mod sexp;

pub use crate::args::{ArgList, ArgNode, Procarg};
pub use crate::errors::{SexpError, ShapeError};
pub use crate::node::{Child, Node, NodeKind, is_plain_symbol};
pub use crate::sexp::parse_sexp;
