//! MSB-first bit packing.
//!
//! Codes are appended most significant bit first and the final byte is padded
//! with zeros. Readers never infer length from the padding; callers stop by
//! symbol count.

use bitvec::prelude::*;

/// Growable MSB-first bit buffer.
#[derive(Debug, Default)]
pub struct BitPacker {
    bits: BitVec<u8, Msb0>,
}

impl BitPacker {
    /// Create an empty packer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a packer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bits),
        }
    }

    /// Append a code.
    pub fn push_code(&mut self, code: &BitSlice<u8, Msb0>) {
        self.bits.extend_from_bitslice(code);
    }

    /// Append a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Bits written so far, excluding padding.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Zero-pad to a byte boundary and return the packed bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.bits.set_uninitialized(false);
        self.bits.into_vec()
    }
}

/// MSB-first reader over packed bytes.
pub struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Read bits from `bytes`, starting at the MSB of the first byte.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bits: bytes.view_bits::<Msb0>(),
            pos: 0,
        }
    }

    /// Number of bits consumed.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bits left, padding included.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = *self.bits.get(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitReader<'_> {}
