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

use unparser_ast::{Node, NodeKind};

/// The construct a parameter list belongs to. This is the only context the argument
/// renderers need, and it is passed down rather than looked up through the tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Enclosing {
    /// `foo { |...| }` and `foo do |...| end`.
    Block,
    /// `->(...) { }`.
    Lambda,
    /// Method definitions, or no parameter-owning construct at all.
    #[default]
    Other,
}

impl Enclosing {
    /// Classify the construct whose direct child is being rendered. A `block` is a lambda
    /// literal when its call is a `lambda` node. Only the immediate parent is consulted.
    pub fn of_parent(parent: &Node) -> Self {
        if !parent.is(NodeKind::Block) {
            return Enclosing::Other;
        }
        match parent.first_node() {
            Some(call) if call.is(NodeKind::Lambda) => Enclosing::Lambda,
            _ => Enclosing::Block,
        }
    }

    pub fn is_block_literal(self) -> bool {
        self == Enclosing::Block
    }
}
