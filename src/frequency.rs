//! Symbol frequency tables.
//!
//! A [`FrequencyTable`] counts how often each byte value occurs. It is the only
//! model state the format persists: the decoder rebuilds the exact same tree
//! from it, so iteration is always in ascending symbol order and never depends
//! on the order pairs were inserted.

use crate::error::{Error, Result};

/// Number of distinct byte values.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence counts for each byte value.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
    distinct: usize,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
            distinct: 0,
            total: 0,
        }
    }

    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &b in data {
            counts[b as usize] += 1;
        }
        let distinct = counts.iter().filter(|&&c| c > 0).count();
        Self {
            counts,
            distinct,
            total: data.len() as u64,
        }
    }

    /// Record `count` occurrences of `symbol`.
    ///
    /// This is the decode-side constructor: every symbol may be inserted once,
    /// with a non-zero count, and the running total must fit in a `u64`.
    ///
    /// # Errors
    /// [`Error::DuplicateSymbol`], [`Error::ZeroFrequency`] or
    /// [`Error::FrequencyOverflow`].
    pub fn insert(&mut self, symbol: u8, count: u64) -> Result<()> {
        if count == 0 {
            return Err(Error::ZeroFrequency(symbol));
        }
        if self.counts[symbol as usize] != 0 {
            return Err(Error::DuplicateSymbol(symbol));
        }
        self.total = self
            .total
            .checked_add(count)
            .ok_or(Error::FrequencyOverflow)?;
        self.counts[symbol as usize] = count;
        self.distinct += 1;
        Ok(())
    }

    /// Count for `symbol` (zero if absent).
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.distinct
    }

    /// True if no symbol has been counted.
    pub fn is_empty(&self) -> bool {
        self.distinct == 0
    }

    /// Sum of all counts, i.e. the length of the original input.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(symbol, count)` pairs with non-zero counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
