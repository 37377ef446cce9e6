//! The compression module holds the two drivers of huffzip, one per
//! direction of the codec.
//!
//! Compression happens in the following steps:
//! - Frequency count: Tabulate every byte of the input, plus one forced
//!   count for the end-of-stream symbol.
//! - Tree construction: Merge the lightest nodes until one root remains.
//! - Encoding: Write the magic word, serialize the tree in pre-order,
//!   then replay the input through the code table, ending with a single
//!   end-of-stream code and zero padding to the next byte boundary.
//!
//! Decompression follows the inverse: verify the magic word, rebuild the
//! tree from the header, then walk the tree bit by bit emitting a byte
//! per leaf until the end-of-stream symbol appears.
//!
//! Both directions hold the whole file in memory. The code is chosen
//! from global frequencies, so the encoder cannot emit anything until it
//! has seen every input byte anyway.
//!

pub mod compress;
pub mod decompress;
