// src/math/structures/binary_tree.rs

//! # Binary Tree
//!
//! Arena-backed binary tree. Nodes live in a `Vec` and refer to their
//! children by [`NodeIndex`]; the root is always index 0. The tree only grows,
//! which is all the recursive space partitioning needs.

use std::collections::VecDeque;

/// Index eines Knotens im Arena-Vektor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub usize);

/// Traversierungsreihenfolge für [`BinaryTree::iter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Breadth-first, level by level.
    #[default]
    Floor,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, node, right subtree.
    Mid,
    /// Left subtree, right subtree, node.
    Post,
}

#[derive(Debug, Clone)]
struct TreeNode<T> {
    element: T,
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<TreeNode<T>>,
}

impl<T> BinaryTree<T> {
    pub const ROOT: NodeIndex = NodeIndex(0);

    pub fn new(root: T) -> Self {
        Self {
            nodes: vec![TreeNode {
                element: root,
                left: None,
                right: None,
            }],
        }
    }

    pub fn root(&self) -> NodeIndex {
        Self::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn element(&self, index: NodeIndex) -> &T {
        &self.nodes[index.0].element
    }

    pub fn left(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes[index.0].left
    }

    pub fn right(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes[index.0].right
    }

    pub fn is_leaf(&self, index: NodeIndex) -> bool {
        let node = &self.nodes[index.0];
        node.left.is_none() && node.right.is_none()
    }

    /// Hängt zwei Kinder an `parent` an und gibt deren Indizes zurück.
    /// Existing children of `parent` are replaced (the old subtrees stay in
    /// the arena but become unreachable).
    pub fn set_children(&mut self, parent: NodeIndex, left: T, right: T) -> (NodeIndex, NodeIndex) {
        let left_index = self.push(left);
        let right_index = self.push(right);
        let node = &mut self.nodes[parent.0];
        node.left = Some(left_index);
        node.right = Some(right_index);
        (left_index, right_index)
    }

    fn push(&mut self, element: T) -> NodeIndex {
        self.nodes.push(TreeNode {
            element,
            left: None,
            right: None,
        });
        NodeIndex(self.nodes.len() - 1)
    }

    /// Knotenindizes in der gewünschten Reihenfolge, ab der Wurzel.
    pub fn indices(&self, order: TraversalOrder) -> Vec<NodeIndex> {
        let mut result = Vec::with_capacity(self.nodes.len());
        match order {
            TraversalOrder::Floor => {
                let mut queue = VecDeque::from([Self::ROOT]);
                while let Some(index) = queue.pop_front() {
                    result.push(index);
                    queue.extend(self.left(index));
                    queue.extend(self.right(index));
                }
            }
            TraversalOrder::Pre => {
                let mut stack = vec![Self::ROOT];
                while let Some(index) = stack.pop() {
                    result.push(index);
                    stack.extend(self.right(index));
                    stack.extend(self.left(index));
                }
            }
            TraversalOrder::Mid => {
                let mut stack = Vec::new();
                let mut current = Some(Self::ROOT);
                while current.is_some() || !stack.is_empty() {
                    while let Some(index) = current {
                        stack.push(index);
                        current = self.left(index);
                    }
                    if let Some(index) = stack.pop() {
                        result.push(index);
                        current = self.right(index);
                    }
                }
            }
            TraversalOrder::Post => {
                // Umgekehrte Pre-Order (Knoten, rechts, links) ergibt Post-Order.
                let mut stack = vec![Self::ROOT];
                while let Some(index) = stack.pop() {
                    result.push(index);
                    stack.extend(self.left(index));
                    stack.extend(self.right(index));
                }
                result.reverse();
            }
        }
        result
    }

    pub fn iter(&self, order: TraversalOrder) -> impl Iterator<Item = &T> + '_ {
        self.indices(order).into_iter().map(move |i| self.element(i))
    }

    /// Leaf elements, found by a breadth-first scan.
    pub fn leaves(&self) -> Vec<&T> {
        self.indices(TraversalOrder::Floor)
            .into_iter()
            .filter(|&i| self.is_leaf(i))
            .map(|i| self.element(i))
            .collect()
    }

    /// Tiefe des Baums; ein einzelner Wurzelknoten hat Tiefe 0.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::from([(Self::ROOT, 0usize)]);
        while let Some((index, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for child in [self.left(index), self.right(index)].into_iter().flatten() {
                queue.push_back((child, depth + 1));
            }
        }
        max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //        1
    //      /   \
    //     2     3
    //    / \
    //   4   5
    fn sample_tree() -> BinaryTree<u32> {
        let mut tree = BinaryTree::new(1);
        let (two, _three) = tree.set_children(tree.root(), 2, 3);
        tree.set_children(two, 4, 5);
        tree
    }

    fn collect(tree: &BinaryTree<u32>, order: TraversalOrder) -> Vec<u32> {
        tree.iter(order).copied().collect()
    }

    #[test]
    fn test_traversal_orders() {
        let tree = sample_tree();
        assert_eq!(collect(&tree, TraversalOrder::Floor), vec![1, 2, 3, 4, 5]);
        assert_eq!(collect(&tree, TraversalOrder::Pre), vec![1, 2, 4, 5, 3]);
        assert_eq!(collect(&tree, TraversalOrder::Mid), vec![4, 2, 5, 1, 3]);
        assert_eq!(collect(&tree, TraversalOrder::Post), vec![4, 5, 2, 3, 1]);
    }

    #[test]
    fn test_leaves_in_breadth_first_order() {
        let tree = sample_tree();
        let leaves: Vec<u32> = tree.leaves().into_iter().copied().collect();
        assert_eq!(leaves, vec![3, 4, 5]);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_single_node_tree_is_its_own_leaf() {
        let tree = BinaryTree::new("root");
        assert!(tree.is_leaf(tree.root()));
        assert_eq!(tree.leaves(), vec![&"root"]);
        assert_eq!(tree.depth(), 0);
    }
}
