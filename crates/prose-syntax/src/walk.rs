//! Breadth-first traversal of the AST.

use crate::AstNode;
use std::collections::VecDeque;

/// Group the nodes of the tree by depth: the root first, then its children,
/// then their children, each level left to right.
pub fn levels(root: &AstNode) -> Vec<Vec<&AstNode>> {
    let mut result = Vec::new();
    let mut queue = VecDeque::from([root]);

    while !queue.is_empty() {
        let width = queue.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            let Some(node) = queue.pop_front() else {
                break;
            };
            queue.extend(node.children.iter());
            level.push(node);
        }
        result.push(level);
    }

    result
}

/// One line per depth, labels separated by single spaces.
pub fn level_order_lines(root: &AstNode) -> Vec<String> {
    levels(root)
        .into_iter()
        .map(|level| {
            level
                .iter()
                .map(|node| node.label())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
