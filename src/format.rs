//! On-disk layout.
//!
//! ```text
//! [u64 LE]  N, the number of distinct symbols
//! N x {
//!   [u8]     symbol
//!   [u64 LE] frequency
//! }
//! [..]      MSB-first packed codes, zero-padded to a whole byte
//! ```
//!
//! There is no magic number, version or checksum. Pairs are written in
//! ascending symbol order; the reader accepts them in any order.

use crate::error::{Error, Result};
use crate::frequency::{FrequencyTable, ALPHABET_SIZE};

/// Size of the leading symbol count.
pub const COUNT_BYTES: usize = 8;

/// Size of one `(symbol, frequency)` pair.
pub const PAIR_BYTES: usize = 1 + 8;

/// Header size for a table of `distinct` symbols.
pub fn header_len(distinct: usize) -> usize {
    COUNT_BYTES + distinct * PAIR_BYTES
}

/// Append the header for `table` to `out`.
pub fn write_header(table: &FrequencyTable, out: &mut Vec<u8>) {
    out.reserve(header_len(table.len()));
    out.extend_from_slice(&(table.len() as u64).to_le_bytes());
    for (symbol, count) in table.iter() {
        out.push(symbol);
        out.extend_from_slice(&count.to_le_bytes());
    }
}

/// Parse the header at the start of `data`.
///
/// Returns the frequency table and the payload that follows it.
///
/// # Errors
/// [`Error::TruncatedHeader`] if `data` is shorter than the declared pairs
/// need, [`Error::TooManySymbols`] if more than 256 pairs are declared, and
/// any error [`FrequencyTable::insert`] reports for a bad pair.
pub fn read_header(data: &[u8]) -> Result<(FrequencyTable, &[u8])> {
    let (count, rest) = data
        .split_first_chunk::<COUNT_BYTES>()
        .ok_or(Error::TruncatedHeader {
            expected: COUNT_BYTES,
            found: data.len(),
        })?;

    let declared = u64::from_le_bytes(*count);
    if declared > ALPHABET_SIZE as u64 {
        return Err(Error::TooManySymbols(declared));
    }

    let pairs_len = declared as usize * PAIR_BYTES;
    if rest.len() < pairs_len {
        return Err(Error::TruncatedHeader {
            expected: COUNT_BYTES + pairs_len,
            found: data.len(),
        });
    }
    let (pairs, payload) = rest.split_at(pairs_len);

    let mut table = FrequencyTable::new();
    for pair in pairs.chunks_exact(PAIR_BYTES) {
        let (&symbol, freq) = pair.split_first().ok_or(Error::Corrupt("empty pair"))?;
        let freq: [u8; 8] = freq.try_into().map_err(|_| Error::Corrupt("short pair"))?;
        table.insert(symbol, u64::from_le_bytes(freq))?;
    }

    tracing::trace!(
        symbols = table.len(),
        total = table.total(),
        payload = payload.len(),
        "parsed header"
    );
    Ok((table, payload))
}
