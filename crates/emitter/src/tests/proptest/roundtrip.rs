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

//! Roundtrip tests: generate a parameter list -> render -> read back -> compare trees.

use proptest::prelude::*;
use unparser_ast::{Child, Node, NodeKind};

use super::generators::{
    args, arb_block_args, arb_def_args, arb_interleaved, arb_lambda_args, arb_procarg_args,
};
use crate::tests::params_parser::parse_params;
use crate::{EmitError, Enclosing, unparse, unparse_args};

fn render(node: &Node, enclosing: Enclosing) -> Result<String, TestCaseError> {
    unparse_args(node, enclosing)
        .map_err(|e| TestCaseError::fail(format!("Failed to render {node}: {e}")))
}

fn run_roundtrip(node: &Node, enclosing: Enclosing) -> Result<(), TestCaseError> {
    let rendered = render(node, enclosing)?;
    let reparsed = parse_params(&rendered, enclosing).map_err(|e| {
        TestCaseError::fail(format!(
            "Failed to read back rendered params:\nTree: {node}\nRendered: {rendered:?}\nError: {e}"
        ))
    })?;
    prop_assert_eq!(
        &reparsed,
        node,
        "Roundtrip changed the tree; rendered as {:?}",
        rendered
    );

    // Rendering the tree read back must give the same text.
    prop_assert_eq!(render(&reparsed, enclosing)?, rendered);
    Ok(())
}

fn block_of(params: &Node) -> Node {
    Node::new(
        NodeKind::Block,
        [
            Child::Node(Node::new(
                NodeKind::Send,
                [Child::Nil, Child::sym("each")],
            )),
            Child::Node(params.clone()),
            Child::Nil,
        ],
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn roundtrip_block_params(node in arb_block_args()) {
        run_roundtrip(&node, Enclosing::Block)?;
    }

    #[test]
    fn roundtrip_procarg_params(node in arb_procarg_args()) {
        run_roundtrip(&node, Enclosing::Block)?;
    }

    #[test]
    fn roundtrip_lambda_params(node in arb_lambda_args()) {
        run_roundtrip(&node, Enclosing::Lambda)?;
    }

    #[test]
    fn roundtrip_def_params(node in arb_def_args()) {
        run_roundtrip(&node, Enclosing::Other)?;
    }

    /// `...` is only valid in a method definition, so a block or lambda refuses it.
    #[test]
    fn forwarding_is_refused_in_literals(node in arb_def_args()) {
        let forwards = node.children().iter().any(|child| {
            child.as_node().is_some_and(|param| param.is(NodeKind::ForwardArg))
        });
        for enclosing in [Enclosing::Block, Enclosing::Lambda] {
            match unparse_args(&node, enclosing) {
                Err(EmitError::MisplacedArgument { kind, .. }) => {
                    prop_assert!(forwards);
                    prop_assert_eq!(kind, NodeKind::ForwardArg);
                }
                Ok(_) => prop_assert!(!forwards),
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }
    }

    /// A block renders its parameters exactly as `unparse_args` does for a block literal.
    #[test]
    fn block_params_inside_a_block(node in arb_block_args()) {
        let params = render(&node, Enclosing::Block)?;
        let expected = if node.children().is_empty() {
            "each { }".to_string()
        } else {
            format!("each {{ |{params}| }}")
        };
        let rendered = unparse(&block_of(&node))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(rendered, expected);
    }

    /// Block-locals always come last, with each group in its own order.
    #[test]
    fn shadow_args_are_moved_last((normal, shadow, interleaved) in arb_interleaved()) {
        let ordered = args(normal.into_iter().chain(shadow));
        prop_assert_eq!(
            render(&args(interleaved), Enclosing::Other)?,
            render(&ordered, Enclosing::Other)?
        );
    }

    #[test]
    fn rendering_is_deterministic(node in arb_lambda_args()) {
        let first = render(&node, Enclosing::Lambda)?;
        prop_assert_eq!(render(&node, Enclosing::Lambda)?, first);
    }
}

#[test]
fn concurrent_renders_agree() {
    let node = args([
        Node::new(NodeKind::Arg, [Child::sym("a")]),
        Node::new(NodeKind::Shadowarg, [Child::sym("s")]),
        Node::new(
            NodeKind::Optarg,
            [
                Child::sym("b"),
                Child::Node(Node::new(NodeKind::Str, [Child::str("x")])),
            ],
        ),
        Node::leaf(NodeKind::Restarg),
    ]);
    let expected = unparse_args(&node, Enclosing::Block).unwrap();
    assert_eq!(expected, "a, b = \"x\", *; s");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| unparse_args(&node, Enclosing::Block)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}
