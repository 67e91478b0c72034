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

/// Append-only output for a single render pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenBuffer {
    content: String,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, token: &str) {
        self.content.push_str(token);
    }

    pub fn write_all(&mut self, tokens: &[&str]) {
        for token in tokens {
            self.content.push_str(token);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_string(self) -> String {
        self.content
    }
}
