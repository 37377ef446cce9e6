//! Huffman tree construction for huffzip.
//!
//! The tree is built bottom-up from the frequency table: every live
//! symbol starts as a leaf, and the two lightest nodes are merged under
//! a new internal node until a single root remains. Rare symbols end up
//! deep in the tree with long codes, common symbols sit near the root.
//!
//! Ties in weight are broken by a rank that is unique per node, so the
//! same input always produces the same tree. That determinism is part of
//! the format contract: compressing a file twice must yield identical
//! bytes.

use std::cmp::Ordering;

use crate::{ALPHABET, EOF_SYMBOL};

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u16),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    /// Tie-break rank. Leaves use their symbol value, internal nodes take
    /// a counter starting past the last symbol, so no two ranks collide.
    pub seq: u16,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, seq: u16, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

impl Ord for Node {
    /// Sort Nodes by increasing weight, rank breaking ties.
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency table.
///
/// Only symbols with a nonzero count get a leaf. Since the frequency
/// pass forces the end-of-stream count to one, the worklist always has
/// at least that leaf in it. When it has only that leaf (empty input),
/// the lone leaf is wrapped under a placeholder sibling so that every
/// leaf sits below at least one branch and gets a code of length one or
/// more.
pub fn build_tree(freqs: &[u64; ALPHABET]) -> Node {
    // Seed the worklist with one leaf per live symbol, in symbol order.
    let mut nodes: Vec<Node> = freqs
        .iter()
        .enumerate()
        .filter(|(_, &weight)| weight > 0)
        .map(|(symbol, &weight)| Node::new(weight, symbol as u16, NodeData::Leaf(symbol as u16)))
        .collect();

    // Internal nodes take ranks past the last symbol, in creation order.
    let mut next_seq = ALPHABET as u16;

    // ...then pare the worklist down to a single root - keep it sorted so
    // the two lightest nodes are always at the tail.
    while nodes.len() > 1 {
        nodes.sort_unstable_by(|a, b| b.cmp(a));

        // Pull off the two lightest nodes and merge them. The lightest
        // becomes the right child.
        let right_child = nodes.pop().unwrap();
        let left_child = nodes.pop().unwrap();
        nodes.push(Node::new(
            left_child.weight + right_child.weight,
            next_seq,
            NodeData::Kids(Box::new(left_child), Box::new(right_child)),
        ));
        next_seq += 1;
    }

    let root = nodes
        .pop()
        .unwrap_or_else(|| Node::new(1, EOF_SYMBOL, NodeData::Leaf(EOF_SYMBOL)));

    // A lone leaf happens only for empty input, where the forced
    // end-of-stream symbol is the whole alphabet. Hang it on a branch
    // with a placeholder sibling that nothing ever encodes.
    if root.is_leaf() {
        debug_assert_eq!(root.node_data, NodeData::Leaf(EOF_SYMBOL));
        let placeholder = Node::new(0, 0, NodeData::Leaf(0));
        let weight = root.weight;
        return Node::new(
            weight,
            next_seq,
            NodeData::Kids(Box::new(root), Box::new(placeholder)),
        );
    }
    root
}
