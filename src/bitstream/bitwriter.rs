//! BitWriter: bit-level output for huffzip encoding.
//!
//! Packs variable-width codes into an in-memory byte buffer. Bits enter
//! a queue and leave it a byte at a time, most significant bit first, so
//! codes of any width land back to back with no padding between them.

/// Packs bits into a byte-aligned output buffer.
pub struct BitWriter {
    /// Output buffer holding the packed bytes.
    pub output: Vec<u8>,
    /// Queue of bits waiting to be drained as full bytes into the output.
    /// 128 bits deep: a maximum-width code plus a partial byte always fit.
    queue: u128,
    /// Count of valid bits in the queue.
    q_bits: u8,
}

impl BitWriter {
    /// Create a new BitWriter with the output buffer sized to the estimate.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal: drain all full bytes from the queue into the output.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
    }

    /// Put the low n bits of data (n <= 64) on the stream, most
    /// significant bit first.
    pub fn out_bits(&mut self, n: u8, data: u64) {
        debug_assert!(n <= 64);
        if n == 0 {
            return;
        }
        let mask = if n == 64 { u64::MAX } else { (1u64 << n) - 1 };
        self.queue = self.queue << n | (data & mask) as u128;
        self.q_bits += n;
        self.write_stream();
    }

    /// Put a u32 of data on the stream. Used for the magic word.
    pub fn out32(&mut self, data: u32) {
        self.out_bits(32, data as u64);
    }

    /// Flush the remaining bits (1-7) from the queue, padding with 0s in
    /// the least significant positions. MUST be called after the last
    /// write or trailing bits stay stuck in the queue.
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits;
            self.q_bits = 8;
            self.write_stream();
        }
        debug_assert_eq!(self.q_bits, 0);
    }

    /// Debugging function. Report the position in the stream as bytes.bits.
    pub fn loc(&self) -> String {
        format!(
            "[{}.{}]",
            self.output.len() + self.q_bits as usize / 8,
            self.q_bits % 8
        )
    }
}
