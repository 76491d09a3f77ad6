//! Visitor over the Go syntax tree.
//!
//! `walk` visits every node in pre-order. Functions and return statements
//! are dispatched to their own hooks; every node, dispatched or not, is
//! then descended into, so nested function literals are visited too.

use tree_sitter::Node;

use super::{FunctionNode, NodeKind};

/// Per-kind hooks called by [`walk`].
pub trait Visitor<'tree> {
    /// Called for function declarations, method declarations and literals.
    fn visit_function(&mut self, _func: FunctionNode<'tree>) {}

    /// Called for every return statement, bare or not.
    fn visit_return(&mut self, _node: Node<'tree>) {}
}

/// Walk `node` and all of its descendants in source order.
pub fn walk<'tree, V: Visitor<'tree> + ?Sized>(visitor: &mut V, node: Node<'tree>) {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        match NodeKind::of(node) {
            NodeKind::ReturnStatement => visitor.visit_return(node),
            kind if kind.is_function() => {
                if let Some(func) = FunctionNode::from_node(node) {
                    visitor.visit_function(func);
                }
            }
            _ => {}
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
}
