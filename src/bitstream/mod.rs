//! The bitstream module forms the bit-level I/O subsystem for huffzip.
//!
//! A huffzip stream is a single run of bits with no internal byte
//! alignment: the magic word is followed directly by the serialized tree
//! and then by the variable-width body codes. Both directions of the
//! codec therefore work against these two primitives rather than the raw
//! byte stream.
//!
//! BitWriter packs bits into an in-memory buffer that the compression
//! driver writes out in one piece. BitReader pulls bits back off any
//! Read source and reports end of data as None, leaving it to the caller
//! to decide whether that means a clean finish or a truncated stream.
//!
pub mod bitreader;
pub mod bitwriter;
