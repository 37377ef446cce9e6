use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};

use log::{debug, info, trace};

use crate::bitstream::bitwriter::BitWriter;
use crate::error::Result;
use crate::huffman_coding::code_table::code_table;
use crate::huffman_coding::huffman::build_tree;
use crate::huffman_coding::tree_codec::write_tree;
use crate::tools::cli::{HuffOpts, Output};
use crate::tools::freq_count::frequencies;
use crate::{EOF_SYMBOL, HUFF_MAGIC};

/*
    Compression is two passes over the input. Pass one tabulates symbol
    frequencies and turns them into one Huffman code for the whole file.
    Pass two streams the input back out through the code table.

    The output is a single self-describing stream: magic word, the
    serialized tree, the coded body, and one end-of-stream code telling
    the decoder where the real data stops and the byte padding begins.
*/

/// Encode data into a complete compressed stream, ready to write.
pub fn encode_stream(data: &[u8]) -> Vec<u8> {
    // Pass one: count symbols and build the code for this file.
    let freqs = frequencies(data);
    let root = build_tree(&freqs);
    let codes = code_table(&root);
    debug!("Built a code table for {} leaves.", codes.len());

    let mut bw = BitWriter::new(data.len() / 2 + 64);
    bw.out32(HUFF_MAGIC);
    write_tree(&root, &mut bw);
    trace!("Tree header written, body starts at {}.", bw.loc());

    // Pass two: replace every input byte with its code. Each byte was
    // counted in pass one, so the lookup cannot miss.
    for &byte in data {
        let code = codes[&(byte as u16)];
        bw.out_bits(code.len, code.bits);
    }

    // One end-of-stream code after the last symbol, then pad the final
    // byte out with zeros.
    let eof = codes[&EOF_SYMBOL];
    bw.out_bits(eof.len, eof.bits);
    bw.flush();
    trace!("Body ends at {}.", bw.loc());

    bw.output
}

/// Compress one named file per the options. FILE becomes FILE.hf.
pub fn compress(fname: &str, opts: &HuffOpts) -> Result<()> {
    // Read the whole input up front. The frequency pass has to see every
    // byte before the first code can be chosen, so there is nothing to
    // gain from streaming it.
    let mut data = Vec::new();
    File::open(fname)?.read_to_end(&mut data)?;
    info!("Compressing {} ({} bytes).", fname, data.len());

    let output = encode_stream(&data);
    debug!(
        "Compressed {} bytes to {} ({:.1}% of the input).",
        data.len(),
        output.len(),
        100.0 * output.len() as f64 / data.len().max(1) as f64
    );

    match opts.output {
        Output::Stdout => {
            io::stdout().write_all(&output)?;
        }
        Output::File => {
            let out_name = format!("{}.hf", fname);
            let mut f_out = open_output(&out_name, opts.force_overwrite)?;
            f_out.write_all(&output)?;
            info!("Wrote {}.", out_name);

            if !opts.keep_input_files {
                fs::remove_file(fname)?;
            }
        }
    }
    Ok(())
}

/// Open the output file, refusing to clobber an existing file unless the
/// user forced it.
pub(crate) fn open_output(fname: &str, force: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    Ok(options.open(fname)?)
}

#[cfg(test)]
mod test {
    use super::encode_stream;

    #[test]
    fn stream_opens_with_the_magic_word() {
        let out = encode_stream("anything".as_bytes());
        assert_eq!(&out[..4], &[0xfa, 0xce, 0x82, 0x01]);
    }

    #[test]
    fn empty_input_compresses_to_the_smallest_stream() {
        // Magic word, the three-node degenerate tree, and one one-bit
        // end-of-stream code, padded to a byte boundary.
        assert_eq!(
            encode_stream(&[]),
            vec![0xfa, 0xce, 0x82, 0x01, 0b0110_0000, 0b0001_0000, 0b0000_0000]
        );
    }

    #[test]
    fn four_symbol_stream_length() {
        // Four leaves make a 43 bit header; four two-bit codes (three
        // bytes plus the terminator) add one more byte: 32 + 43 + 8 bits
        // rounds up to 11 bytes.
        assert_eq!(encode_stream("abc".as_bytes()).len(), 11);
    }

    #[test]
    fn same_input_same_bytes() {
        let data = "determinism is part of the format contract".as_bytes();
        assert_eq!(encode_stream(data), encode_stream(data));
    }

    #[test]
    fn skewed_data_shrinks() {
        let data = vec![b'e'; 10_000];
        let out = encode_stream(&data);
        // Single-symbol data codes at a bit per byte plus the header.
        assert!(out.len() < data.len() / 4);
    }
}
