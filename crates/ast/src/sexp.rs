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

//! Reader for the `parser` gem's s-expression notation. This is how trees are handed to
//! the unparser from outside Rust, and how the tests spell their fixtures.

use std::str::FromStr;

use pest::Parser as PestParser;
use pest::error::LineColLocation;
use pest::iterators::Pair;

use crate::errors::SexpError;
use crate::node::{Child, Node, NodeKind};
use crate::sexp::grammar::{Rule, SexpParser};

mod grammar {
    #[derive(Parser)]
    #[grammar = "src/sexp.pest"]
    pub struct SexpParser;
}

/// Parse a single node, e.g. `(args (arg :a) (restarg))`.
pub fn parse_sexp(source: &str) -> Result<Node, SexpError> {
    let pairs = match SexpParser::parse(Rule::program, source) {
        Ok(pairs) => pairs,
        Err(e) => {
            let (line, column) = match e.line_col {
                LineColLocation::Pos(lc) => lc,
                LineColLocation::Span(begin, _) => begin,
            };
            return Err(SexpError::Syntax {
                line,
                column,
                message: e.variant.message().to_string(),
            });
        }
    };

    for pair in pairs.flatten() {
        if pair.as_rule() == Rule::node {
            return build_node(pair);
        }
    }
    // The grammar cannot accept a program without a node.
    Err(SexpError::Syntax {
        line: 1,
        column: 1,
        message: "expected node".to_string(),
    })
}

impl FromStr for Node {
    type Err = SexpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sexp(s)
    }
}

fn build_node(pair: Pair<Rule>) -> Result<Node, SexpError> {
    let mut inner = pair.into_inner();
    let Some(kind_pair) = inner.next() else {
        unreachable!("node without a type")
    };
    let kind = NodeKind::from_str(kind_pair.as_str())
        .map_err(|_| SexpError::UnknownNodeKind(kind_pair.as_str().to_string()))?;
    let children = inner.map(build_child).collect::<Result<Vec<_>, _>>()?;
    Ok(Node::new(kind, children))
}

fn build_child(pair: Pair<Rule>) -> Result<Child, SexpError> {
    match pair.as_rule() {
        Rule::node => Ok(Child::Node(build_node(pair)?)),
        Rule::nil => Ok(Child::Nil),
        Rule::integer => pair
            .as_str()
            .parse::<i64>()
            .map(Child::Int)
            .map_err(|_| SexpError::InvalidInteger(pair.as_str().to_string())),
        Rule::float => pair
            .as_str()
            .parse::<f64>()
            .map(Child::Float)
            .map_err(|_| SexpError::InvalidFloat(pair.as_str().to_string())),
        Rule::string => Ok(Child::Str(quoted_contents(pair))),
        Rule::symbol => {
            let Some(name) = pair.into_inner().next() else {
                unreachable!("symbol without a name")
            };
            match name.as_rule() {
                Rule::quoted_symbol => Ok(Child::Symbol(quoted_contents(name))),
                _ => Ok(Child::Symbol(name.as_str().to_string())),
            }
        }
        rule => unreachable!("unexpected child rule: {rule:?}"),
    }
}

fn quoted_contents(pair: Pair<Rule>) -> String {
    pair.into_inner()
        .next()
        .map(|inner| unescape(inner.as_str()))
        .unwrap_or_default()
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
