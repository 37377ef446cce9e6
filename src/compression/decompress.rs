use std::fs::{self, File};
use std::io::{self, Read, Write};

use log::{info, trace, warn};

use crate::bitstream::bitreader::BitReader;
use crate::error::{Error, Result};
use crate::huffman_coding::huffman::{Node, NodeData};
use crate::huffman_coding::tree_codec::read_tree;
use crate::tools::cli::{HuffOpts, Output};
use crate::{EOF_SYMBOL, HUFF_MAGIC};

use super::compress::open_output;

/*
    Decompression mirrors the encoder stage for stage: check the magic
    word, rebuild the tree from the header, then spend the rest of the
    stream walking that tree. There is no length field anywhere - the
    end-of-stream leaf is what separates real data from the padding bits
    in the final byte.
*/

/// Decode a complete compressed stream back into the original bytes.
pub fn decode_stream<R: Read>(source: R) -> Result<Vec<u8>> {
    let mut br = BitReader::new(source);

    // The magic word comes first. A short read here means the stream
    // broke off inside the fixed preamble.
    let magic = br.bint(32).ok_or(Error::TruncatedHeader)? as u32;
    if magic != HUFF_MAGIC {
        return Err(Error::BadMagic { found: magic });
    }

    let root = read_tree(&mut br)?;
    trace!("Tree rebuilt, body starts at {}.", br.loc());

    // Walk the tree one bit at a time: left on 0, right on 1. Every leaf
    // reached is one decoded byte, until the end-of-stream leaf stops
    // the walk and the padding bits after it are ignored.
    let mut out = Vec::new();
    let mut cursor = &root;
    loop {
        let bit = br.bit().ok_or(Error::TruncatedBody)?;
        if let NodeData::Kids(left_child, right_child) = &cursor.node_data {
            let branch: &Node = if bit == 0 { left_child } else { right_child };
            cursor = branch;
        }
        match cursor.node_data {
            NodeData::Leaf(EOF_SYMBOL) => break,
            NodeData::Leaf(symbol) => {
                out.push(symbol as u8);
                cursor = &root;
            }
            NodeData::Kids(..) => {}
        }
    }
    Ok(out)
}

/// Decompress one named file per the options. FILE.hf becomes FILE.
pub fn decompress(fname: &str, opts: &HuffOpts) -> Result<()> {
    let mut data = Vec::new();
    File::open(fname)?.read_to_end(&mut data)?;
    info!("Decompressing {} ({} bytes).", fname, data.len());

    // Decode fully in memory before touching the output path, so a bad
    // stream never leaves a partial file behind.
    let out = decode_stream(data.as_slice())?;

    match opts.output {
        Output::Stdout => {
            io::stdout().write_all(&out)?;
        }
        Output::File => {
            let out_name = output_name(fname);
            let mut f_out = open_output(&out_name, opts.force_overwrite)?;
            f_out.write_all(&out)?;
            info!("Wrote {} ({} bytes).", out_name, out.len());

            if !opts.keep_input_files {
                fs::remove_file(fname)?;
            }
        }
    }
    Ok(())
}

/// Decode a compressed file and throw the result away, reporting whether
/// the stream is intact.
pub fn test_integrity(fname: &str) -> Result<()> {
    let mut data = Vec::new();
    File::open(fname)?.read_to_end(&mut data)?;
    let out = decode_stream(data.as_slice())?;
    info!(
        "{} ok ({} bytes compressed, {} decoded).",
        fname,
        data.len(),
        out.len()
    );
    Ok(())
}

/// FILE.hf decompresses to FILE; any other name falls back to FILE.out.
fn output_name(fname: &str) -> String {
    match fname.strip_suffix(".hf") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => {
            warn!("{} does not end in .hf; writing to {}.out.", fname, fname);
            format!("{}.out", fname)
        }
    }
}

#[cfg(test)]
mod test {
    use super::{decode_stream, output_name};
    use crate::compression::compress::encode_stream;
    use crate::error::Error;

    fn round_trip(data: &[u8]) {
        let encoded = encode_stream(data);
        assert_eq!(decode_stream(encoded.as_slice()).unwrap(), data);
    }

    #[test]
    fn empty_round_trip() {
        round_trip(&[]);
    }

    #[test]
    fn single_byte_round_trip() {
        round_trip(b"x");
    }

    #[test]
    fn repeated_byte_round_trip() {
        round_trip(&[0_u8; 4096]);
    }

    #[test]
    fn text_round_trip() {
        round_trip("Peter Piper picked a peck of pickled peppers.".as_bytes());
    }

    #[test]
    fn all_byte_values_round_trip() {
        let data: Vec<u8> = (0..=255_u8)
            .flat_map(|b| std::iter::repeat(b).take(b as usize % 7 + 1))
            .collect();
        round_trip(&data);
    }

    #[test]
    fn pseudorandom_round_trip() {
        // xorshift noise; incompressible data still has to survive the
        // trip even though the output grows a little.
        let mut x = 0x2545_f491_4f6c_dd1d_u64;
        let mut data = Vec::with_capacity(8192);
        for _ in 0..8192 {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            data.push((x >> 24) as u8);
        }
        round_trip(&data);
    }

    #[test]
    fn wrong_magic_is_refused() {
        let mut encoded = encode_stream(b"hello");
        encoded[0] ^= 0x40;
        let err = decode_stream(encoded.as_slice()).unwrap_err();
        assert!(matches!(err, Error::BadMagic { found } if found != crate::HUFF_MAGIC));
    }

    #[test]
    fn short_magic_is_a_truncated_header() {
        let err = decode_stream([0xfa_u8, 0xce].as_slice()).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader));
    }

    #[test]
    fn cut_inside_the_tree_is_a_truncated_header() {
        let encoded = encode_stream(b"assorted sample bytes");
        let err = decode_stream(&encoded[..6]).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader));
    }

    #[test]
    fn cut_body_is_a_truncated_body() {
        let data = vec![b'q'; 300];
        let encoded = encode_stream(&data);
        // Drop the tail of the body, well past the header.
        let err = decode_stream(&encoded[..encoded.len() - 2]).unwrap_err();
        assert!(matches!(err, Error::TruncatedBody));
    }

    #[test]
    fn stream_without_terminator_is_a_truncated_body() {
        use crate::bitstream::bitwriter::BitWriter;
        use crate::huffman_coding::code_table::code_table;
        use crate::huffman_coding::huffman::build_tree;
        use crate::huffman_coding::tree_codec::write_tree;
        use crate::tools::freq_count::frequencies;

        // Hand-build a stream that never emits the end-of-stream code.
        let data = b"abab";
        let root = build_tree(&frequencies(data));
        let codes = code_table(&root);
        let mut bw = BitWriter::new(64);
        bw.out32(crate::HUFF_MAGIC);
        write_tree(&root, &mut bw);
        for &byte in data.iter() {
            let code = codes[&(byte as u16)];
            bw.out_bits(code.len, code.bits);
        }
        bw.flush();

        let err = decode_stream(bw.output.as_slice()).unwrap_err();
        assert!(matches!(err, Error::TruncatedBody));
    }

    #[test]
    fn trailing_padding_is_ignored() {
        // Seven pad bits is the worst case; they must never decode.
        for len in 0..16 {
            let data: Vec<u8> = "abcdefg".as_bytes().iter().cycle().take(len).cloned().collect();
            round_trip(&data);
        }
    }

    #[test]
    fn output_name_strips_the_suffix() {
        assert_eq!(output_name("report.txt.hf"), "report.txt");
    }

    #[test]
    fn output_name_without_suffix_falls_back() {
        assert_eq!(output_name("report.txt"), "report.txt.out");
        assert_eq!(output_name(".hf"), ".hf.out");
    }
}
