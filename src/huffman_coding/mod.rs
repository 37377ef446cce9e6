//! The huffman_coding module holds the code machinery for huffzip: tree
//! construction, code table generation, and the serialized tree header.
//!
//! One Huffman code covers the whole file. The alphabet is fixed at 257
//! symbols: every possible byte value plus a synthetic end-of-stream
//! symbol that is always counted once, so the decoder can recognize
//! where the real data ends without an up-front length field.
//!
//! The submodules are:
//! - huffman: Node types and bottom-up tree construction.
//! - code_table: per-symbol bit codes derived from tree positions.
//! - tree_codec: pre-order serialization of the tree into the header.
//!

pub mod code_table;
pub mod huffman;
pub mod tree_codec;
