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

//! Proptest strategies for generating parameter lists. Every list is one Ruby accepts:
//! parameters in signature order, distinct names, and `...` only in method definitions.

use proptest::prelude::*;
use unparser_ast::{Child, Node, NodeKind};

/// Parameter names, handed out in order by `with_unique_names`.
const NAMES: &[&str] = &["a", "b", "c", "foo", "bar", "item", "value", "_x"];

/// Methods called from default values. Disjoint from `NAMES` so a default never reads as a
/// parameter.
const CALLS: &[&str] = &["compute", "fetch", "default_value"];

/// Placeholder for parameter names; replaced by `with_unique_names`.
const UNNAMED: &str = "_";

fn named(kind: NodeKind, name: impl Into<String>) -> Node {
    Node::new(kind, [Child::sym(name)])
}

fn with_default(kind: NodeKind, default: Node) -> Node {
    Node::new(kind, [Child::sym(UNNAMED), Child::Node(default)])
}

fn placeholder(kind: NodeKind) -> Node {
    named(kind, UNNAMED)
}

fn optionally_named(kind: NodeKind, has_name: bool) -> Node {
    if has_name {
        placeholder(kind)
    } else {
        Node::leaf(kind)
    }
}

pub fn args(nodes: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::Args, nodes.into_iter().map(Child::Node))
}

fn fresh_name(next: &mut usize) -> String {
    let name = match NAMES.get(*next) {
        Some(name) => name.to_string(),
        None => format!("v{next}"),
    };
    *next += 1;
    name
}

fn rename(node: &Node, next: &mut usize) -> Node {
    match node.kind() {
        NodeKind::Mlhs | NodeKind::Procarg0 => Node::new(
            node.kind(),
            node.children().iter().map(|child| match child {
                Child::Node(inner) => Child::Node(rename(inner, next)),
                leaf => leaf.clone(),
            }),
        ),
        kind if kind.is_argument() && node.child(0).and_then(Child::as_symbol).is_some() => {
            let rest = node.children()[1..].iter().cloned();
            Node::new(kind, std::iter::once(Child::sym(fresh_name(next))).chain(rest))
        }
        _ => node.clone(),
    }
}

/// Ruby rejects a parameter list that declares the same name twice.
pub fn with_unique_names(nodes: Vec<Node>) -> Vec<Node> {
    let mut next = 0;
    nodes.iter().map(|node| rename(node, &mut next)).collect()
}

/// Default values: literals and calls.
pub fn arb_default() -> impl Strategy<Value = Node> {
    prop_oneof![
        (-1000i64..1000).prop_map(|i| Node::new(NodeKind::Int, [Child::Int(i)])),
        "[a-z ]{0,8}".prop_map(|s| Node::new(NodeKind::Str, [Child::str(s)])),
        prop::sample::select(NAMES).prop_map(|name| named(NodeKind::Sym, name)),
        Just(Node::leaf(NodeKind::Nil)),
        Just(Node::leaf(NodeKind::True)),
        Just(Node::leaf(NodeKind::False)),
        prop::sample::select(CALLS)
            .prop_map(|name| Node::new(NodeKind::Send, [Child::Nil, Child::sym(name)])),
    ]
}

/// The contents of a destructuring pattern: names and nested patterns around at most one
/// splat.
fn arb_pattern_items(pattern: BoxedStrategy<Node>) -> impl Strategy<Value = Vec<Node>> {
    (
        prop::collection::vec(pattern.clone(), 0..3),
        prop::option::of(any::<bool>()),
        prop::collection::vec(pattern, 0..2),
    )
        .prop_filter_map("empty pattern", |(leading, splat, trailing)| {
            let splat = splat.map(|has_name| optionally_named(NodeKind::Restarg, has_name));
            let items: Vec<Node> = leading.into_iter().chain(splat).chain(trailing).collect();
            (!items.is_empty()).then_some(items)
        })
}

/// A required positional parameter: a name or a nested `mlhs`.
pub fn arb_pattern() -> impl Strategy<Value = Node> {
    Just(placeholder(NodeKind::Arg)).prop_recursive(3, 12, 3, |inner| {
        arb_pattern_items(inner).prop_map(|items| {
            Node::new(NodeKind::Mlhs, items.into_iter().map(Child::Node))
        })
    })
}

fn arb_required() -> impl Strategy<Value = Node> {
    prop_oneof![
        3 => Just(placeholder(NodeKind::Arg)),
        1 => arb_pattern(),
    ]
}

fn arb_keyword() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(placeholder(NodeKind::Kwarg)),
        arb_default().prop_map(|default| with_default(NodeKind::Kwoptarg, default)),
    ]
}

/// A signature in Ruby's order: leading required, optional, splat, trailing required,
/// keywords, keyword splat or `**nil`, block. Anonymous `**` and `&` only appear when
/// `anonymous_splats` is set, as method definitions allow them.
pub fn arb_signature(anonymous_splats: bool) -> impl Strategy<Value = Vec<Node>> {
    (
        prop::collection::vec(arb_required(), 0..3),
        prop::collection::vec(
            arb_default().prop_map(|default| with_default(NodeKind::Optarg, default)),
            0..2,
        ),
        prop::option::of(any::<bool>()),
        prop::collection::vec(arb_required(), 0..2),
        prop::collection::vec(arb_keyword(), 0..3),
        prop::option::of(0u8..3),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            move |(leading, optional, splat, trailing, keywords, keyword_splat, block)| {
                let splat = splat.map(|has_name| optionally_named(NodeKind::Restarg, has_name));
                let keyword_splat = match keyword_splat {
                    Some(0) if keywords.is_empty() => Some(Node::leaf(NodeKind::Kwnilarg)),
                    Some(1) if anonymous_splats => Some(Node::leaf(NodeKind::Kwrestarg)),
                    Some(_) => Some(placeholder(NodeKind::Kwrestarg)),
                    None => None,
                };
                let block = block.map(|has_name| {
                    optionally_named(NodeKind::Blockarg, has_name || !anonymous_splats)
                });
                leading
                    .into_iter()
                    .chain(optional)
                    .chain(splat)
                    .chain(trailing)
                    .chain(keywords)
                    .chain(keyword_splat)
                    .chain(block)
                    .collect::<Vec<_>>()
            },
        )
}

pub fn arb_shadows() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(Just(placeholder(NodeKind::Shadowarg)), 0..3)
}

/// Block parameter lists in their list form. A lone nested pattern is excluded: in a
/// block it is always written, and read back, as a `procarg0`.
pub fn arb_block_args() -> impl Strategy<Value = Node> {
    (arb_signature(false), arb_shadows())
        .prop_filter("lone nested pattern", |(params, _)| {
            !(params.len() == 1 && params[0].is(NodeKind::Mlhs))
        })
        .prop_map(|(params, shadows)| args(with_unique_names([params, shadows].concat())))
}

/// Block parameter lists whose sole parameter is a `procarg0`.
pub fn arb_procarg_args() -> impl Strategy<Value = Node> {
    (arb_pattern_items(arb_pattern().boxed()), arb_shadows()).prop_map(|(patterns, shadows)| {
        let procarg = Node::new(NodeKind::Procarg0, patterns.into_iter().map(Child::Node));
        args(with_unique_names([vec![procarg], shadows].concat()))
    })
}

pub fn arb_lambda_args() -> impl Strategy<Value = Node> {
    (arb_signature(false), arb_shadows())
        .prop_map(|(params, shadows)| args(with_unique_names([params, shadows].concat())))
}

/// Method definition parameter lists, including `...` after leading required parameters.
pub fn arb_def_args() -> impl Strategy<Value = Node> {
    prop_oneof![
        3 => arb_signature(true),
        1 => prop::collection::vec(arb_required(), 0..3).prop_map(|mut params| {
            params.push(Node::leaf(NodeKind::ForwardArg));
            params
        }),
    ]
    .prop_map(|params| args(with_unique_names(params)))
}

/// Normal and block-local parameters, plus an interleaving of the two that keeps each
/// group's own order.
pub fn arb_interleaved() -> impl Strategy<Value = (Vec<Node>, Vec<Node>, Vec<Node>)> {
    (arb_signature(true), arb_shadows()).prop_flat_map(|(normal, shadow)| {
        let split = normal.len();
        let mut normal = with_unique_names([normal, shadow].concat());
        let shadow = normal.split_off(split);
        let slots: Vec<bool> = std::iter::repeat_n(false, normal.len())
            .chain(std::iter::repeat_n(true, shadow.len()))
            .collect();
        Just(slots).prop_shuffle().prop_map(move |slots| {
            let mut normals = normal.iter();
            let mut shadows = shadow.iter();
            let interleaved: Vec<Node> = slots
                .iter()
                .filter_map(|&is_shadow| {
                    if is_shadow {
                        shadows.next()
                    } else {
                        normals.next()
                    }
                })
                .cloned()
                .collect();
            (normal.clone(), shadow.clone(), interleaved)
        })
    })
}
