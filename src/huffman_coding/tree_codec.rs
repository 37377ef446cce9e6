//! Tree header serialization: the decoder's blueprint.
//!
//! The tree is written in pre-order, one flag bit per node. A 0 bit
//! opens an internal node and its two subtrees follow, left then right.
//! A 1 bit announces a leaf and is followed by the symbol in a fixed
//! nine-bit field, wide enough for every byte value plus the
//! end-of-stream symbol. Pre-order makes the reader trivial: the shape
//! of the bits rebuilds the shape of the tree with no counts or lengths
//! needed up front.

use std::io::Read;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{Error, Result};
use crate::huffman_coding::huffman::{Node, NodeData};
use crate::{EOF_SYMBOL, SYMBOL_BITS};

/// Deepest run of internal nodes a header may describe. A tree over the
/// 257-symbol alphabet can never chain more branches than it has leaves,
/// so anything past this is a crafted header, not a deep tree.
const MAX_DEPTH: usize = 256;

/// Serialize the tree onto the bitstream in pre-order.
pub fn write_tree(node: &Node, bw: &mut BitWriter) {
    match &node.node_data {
        NodeData::Kids(ref left_child, ref right_child) => {
            bw.out_bits(1, 0);
            write_tree(left_child, bw);
            write_tree(right_child, bw);
        }
        NodeData::Leaf(symbol) => {
            bw.out_bits(1, 1);
            bw.out_bits(SYMBOL_BITS, *symbol as u64);
        }
    };
}

/// Rebuild the tree from the header bits.
///
/// The result carries no weights - they went into choosing the shape on
/// the encode side and the shape is all the decoder needs. A root that
/// is itself a leaf is rejected: the body walk needs a first branch to
/// consume bits with.
pub fn read_tree<R: Read>(br: &mut BitReader<R>) -> Result<Node> {
    let root = read_node(br, 0)?;
    if root.is_leaf() {
        return Err(Error::InvalidHeader {
            reason: "tree is a single leaf",
        });
    }
    Ok(root)
}

fn read_node<R: Read>(br: &mut BitReader<R>, depth: usize) -> Result<Node> {
    // Bound the recursion before trusting the next flag bit.
    if depth > MAX_DEPTH {
        return Err(Error::InvalidHeader {
            reason: "tree nests deeper than the alphabet allows",
        });
    }
    match br.bool_bit() {
        None => Err(Error::TruncatedHeader),
        Some(false) => {
            let left_child = read_node(br, depth + 1)?;
            let right_child = read_node(br, depth + 1)?;
            Ok(Node::new(
                0,
                0,
                NodeData::Kids(Box::new(left_child), Box::new(right_child)),
            ))
        }
        Some(true) => {
            let symbol = br.bint(SYMBOL_BITS as usize).ok_or(Error::TruncatedHeader)?;
            if symbol > EOF_SYMBOL as usize {
                return Err(Error::InvalidHeader {
                    reason: "leaf symbol outside the alphabet",
                });
            }
            Ok(Node::new(0, 0, NodeData::Leaf(symbol as u16)))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::frequencies;

    /// Compare shape and leaf symbols, ignoring weights and ranks.
    fn same_shape(a: &Node, b: &Node) -> bool {
        match (&a.node_data, &b.node_data) {
            (NodeData::Leaf(x), NodeData::Leaf(y)) => x == y,
            (NodeData::Kids(al, ar), NodeData::Kids(bl, br)) => {
                same_shape(al, bl) && same_shape(ar, br)
            }
            _ => false,
        }
    }

    fn serialize(root: &Node) -> Vec<u8> {
        let mut bw = BitWriter::new(64);
        write_tree(root, &mut bw);
        bw.flush();
        bw.output
    }

    #[test]
    fn degenerate_tree_bit_pattern() {
        // Empty input: a branch holding the end-of-stream leaf and the
        // placeholder leaf. Preorder: 0, 1+100000000, 1+000000000.
        let root = build_tree(&frequencies(&[]));
        assert_eq!(serialize(&root), vec![0b0110_0000, 0b0001_0000, 0b0000_0000]);
    }

    #[test]
    fn tree_survives_the_round_trip() {
        let root = build_tree(&frequencies("header fidelity check".as_bytes()));
        let bytes = serialize(&root);
        let rebuilt = read_tree(&mut BitReader::new(bytes.as_slice())).unwrap();
        assert!(same_shape(&root, &rebuilt));
        // Writing the rebuilt tree reproduces the source bits exactly.
        assert_eq!(serialize(&rebuilt), bytes);
    }

    #[test]
    fn full_alphabet_tree_round_trips() {
        let data: Vec<u8> = (0..=255).collect();
        let root = build_tree(&frequencies(&data));
        let bytes = serialize(&root);
        let rebuilt = read_tree(&mut BitReader::new(bytes.as_slice())).unwrap();
        assert!(same_shape(&root, &rebuilt));
    }

    #[test]
    fn truncated_header_is_reported() {
        let root = build_tree(&frequencies("some sample data".as_bytes()));
        let mut bytes = serialize(&root);
        bytes.truncate(2);
        let err = read_tree(&mut BitReader::new(bytes.as_slice())).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader));
    }

    #[test]
    fn lone_leaf_root_is_rejected() {
        // A header that is just "leaf 65" with no branch above it.
        let mut bw = BitWriter::new(8);
        bw.out_bits(1, 1);
        bw.out_bits(SYMBOL_BITS, 65);
        bw.flush();
        let err = read_tree(&mut BitReader::new(bw.output.as_slice())).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));
    }

    #[test]
    fn out_of_range_symbol_is_rejected() {
        // A branch whose left leaf claims symbol 300.
        let mut bw = BitWriter::new(8);
        bw.out_bits(1, 0);
        bw.out_bits(1, 1);
        bw.out_bits(SYMBOL_BITS, 300);
        bw.flush();
        let err = read_tree(&mut BitReader::new(bw.output.as_slice())).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));
    }

    #[test]
    fn endless_branch_bits_are_rejected() {
        // 300 zero bits describe an impossibly deep chain of branches.
        let bytes = vec![0_u8; 38];
        let err = read_tree(&mut BitReader::new(bytes.as_slice())).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));
    }
}
