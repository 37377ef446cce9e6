//! BitReader: bit-level input for huffzip decoding.
//!
//! Huffman codes are not byte aligned, so the decoder pulls the stream
//! apart one bit at a time, most significant bit first. Running out of
//! data is reported as None rather than an error, because only the
//! caller knows which part of the stream it ran out of.
//!
//! NOTE: This module can read from any I/O source that supports the
//! read() call. Sources are expected to be infallible (in-memory
//! buffers); a read failure ends the stream.

const BUFFER_SIZE: usize = 64 * 1024;

/// Reads a binary huffzip stream bit by bit.
#[derive(Debug)]
pub struct BitReader<R> {
    source: R,
    buffer: Vec<u8>,
    /// Bytes of the buffer currently holding source data.
    filled: usize,
    /// Index of the byte holding the next unread bit.
    cursor: usize,
    /// Offset of the next unread bit within that byte, 0 = the high bit.
    bit_index: usize,
    /// Running count of bits handed out, for trace logging.
    consumed: u64,
}

impl<R: std::io::Read> BitReader<R> {
    /// Creates a new BitReader (with a 64k buffer).
    pub fn new(source: R) -> Self {
        Self {
            source,
            buffer: vec![0; BUFFER_SIZE],
            filled: 0,
            cursor: 0,
            bit_index: 0,
            consumed: 0,
        }
    }

    /// Check (and refill) the buffer. Returns true if we have data, false
    /// if there is no more.
    fn have_data(&mut self) -> bool {
        // Only read more data once the cursor has drained the buffer.
        if self.cursor == self.filled {
            let size = self.source.read(&mut self.buffer).unwrap_or(0);
            // If nothing came back from our read attempt, then we have no more data.
            if size == 0 {
                return false;
            }
            self.filled = size;
            self.cursor = 0;
        }
        true
    }

    /// Return the next bit as Option<u8> (1 or 0), or None if there is no
    /// more data to read.
    pub fn bit(&mut self) -> Option<u8> {
        if !self.have_data() {
            return None;
        }
        let bit = (self.buffer[self.cursor] >> (7 - self.bit_index)) & 1;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        self.consumed += 1;
        Some(bit)
    }

    /// Return Option<bool> *true* if the next bit is 1, *false* if 0,
    /// consuming the bit, or None if there is no more data to read.
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits (n <= 32), or None if the
    /// data runs out first.
    ///
    /// This is used for the fixed-width fields of the stream: the magic
    /// word and the nine-bit leaf symbols in the tree header.
    pub fn bint(&mut self, n: usize) -> Option<usize> {
        debug_assert!(n <= 32);
        let mut result = 0_usize;
        for _ in 0..n {
            result = result << 1 | self.bit()? as usize;
        }
        Some(result)
    }

    /// Debugging function. Report the position in the stream as bytes.bits.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.consumed / 8, self.consumed % 8)
    }
}
