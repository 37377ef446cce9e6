//! Huffman coding file compression with a self-describing header.
//!
//! huffzip compresses a file in two passes over the data. The first pass
//! tabulates how often every byte value occurs, the second replaces each
//! byte with the variable-width code its frequency earned. The tree that
//! defines those codes is serialized at the front of the output, so
//! decompression needs nothing but the file itself: check the magic word,
//! rebuild the tree from the header bits, then walk the tree bit by bit
//! until the end-of-stream symbol comes up.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffzip test.txt`
//!
//! This will compress the file and create the file test.txt.hf.
//! The original file will be deleted (pass -k to keep it). Restore it
//! with `huffzip -d test.txt.hf`.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

/// Bits in one uncompressed symbol word.
pub const BITS_PER_WORD: u8 = 8;
/// Number of literal byte symbols in the alphabet.
pub const ALPH_SIZE: usize = 1 << BITS_PER_WORD;
/// The synthetic end-of-stream symbol, one past the last byte value.
pub const EOF_SYMBOL: u16 = ALPH_SIZE as u16;
/// Alphabet size counting the end-of-stream symbol. Fixed for every file.
pub const ALPHABET: usize = ALPH_SIZE + 1;
/// Width of a serialized leaf symbol: nine bits covers 0..=256.
pub const SYMBOL_BITS: u8 = BITS_PER_WORD + 1;
/// Magic word that opens every compressed stream. The low bit marks the
/// self-describing (tree header) revision of the format.
pub const HUFF_MAGIC: u32 = 0xFACE_8201;
