use crate::{ALPHABET, EOF_SYMBOL};

/// Returns a frequency count of the input data over the full alphabet.
///
/// The table always spans all 257 symbols: every byte value plus the
/// end-of-stream symbol, which is forced to a count of exactly one so it
/// earns a code no matter what the input holds. Counts are u64 because
/// the whole file is tabulated in one pass and nothing caps its size.
pub fn frequencies(data: &[u8]) -> [u64; ALPHABET] {
    let mut freqs = [0_u64; ALPHABET];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs[EOF_SYMBOL as usize] = 1;
    freqs
}
