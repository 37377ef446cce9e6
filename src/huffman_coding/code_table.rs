//! Code table generation: turning tree positions into bit codes.
//!
//! Each leaf's code is the path from the root down to it, one bit per
//! branch: 0 for left, 1 for right. Codes built this way are prefix
//! free, because no leaf sits on the path to another leaf. The encoder
//! looks codes up by symbol; the decoder never needs this table since it
//! walks the tree directly.

use rustc_hash::FxHashMap;

use super::huffman::{Node, NodeData};

/// One Huffman code: the low `len` bits of `bits`, written to the stream
/// most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

/// Walk the tree and collect the code for every leaf symbol.
pub fn code_table(root: &Node) -> FxHashMap<u16, Code> {
    let mut codes =
        FxHashMap::with_capacity_and_hasher(crate::ALPHABET, Default::default());
    descend(root, 0, 0, &mut codes);
    codes
}

/// Recursively walk the tree, extending the path bits on the way down
/// and recording them when a leaf is reached.
fn descend(node: &Node, bits: u64, len: u8, codes: &mut FxHashMap<u16, Code>) {
    match &node.node_data {
        NodeData::Kids(ref left_child, ref right_child) => {
            // Codes longer than 64 bits would need a Fibonacci-skewed
            // input in the tens of terabytes. The whole input sits in
            // memory, so the path always fits in the u64.
            debug_assert!(len < 64);
            descend(left_child, bits << 1, len + 1, codes);
            descend(right_child, bits << 1 | 1, len + 1, codes);
        }
        NodeData::Leaf(symbol) => {
            // build_tree hangs every leaf below at least one branch, so
            // a zero-length code cannot occur.
            debug_assert!(len > 0);
            codes.insert(*symbol, Code { bits, len });
        }
    };
}
