//! Huffman encoder and decoder.
//!
//! Both sides are built from a [`FrequencyTable`] and rebuild the same tree
//! with [`HuffmanTree::build`]. The encoder emits a packed payload; the
//! decoder walks it bit by bit and stops after exactly
//! [`FrequencyTable::total`] symbols, ignoring whatever padding follows.
//!
//! # Degenerate alphabets
//!
//! A one-symbol tree has no branch to take, so its only code is empty and the
//! payload is empty too. The decoder reproduces such input from the count
//! alone. An empty table encodes and decodes to nothing.

use crate::bits::{BitPacker, BitReader};
use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};

/// Huffman encoder.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder {
    tree: HuffmanTree,
    codes: CodeTable,
}

impl HuffmanEncoder {
    /// Create a new Huffman encoder from symbol frequencies.
    pub fn new(table: &FrequencyTable) -> Self {
        let tree = HuffmanTree::build(table);
        let codes = CodeTable::from_tree(&tree);
        tracing::debug!(
            symbols = codes.len(),
            max_code_len = codes.max_len(),
            "built encoder"
        );
        Self { tree, codes }
    }

    /// The tree the codes were derived from.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Per-symbol codes.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// Encode `data` into MSB-first packed bytes, zero-padded.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] for a byte the frequency table did not
    /// contain.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut packer = BitPacker::with_capacity(data.len());
        for &b in data {
            let code = self.codes.get(b).ok_or(Error::UnknownSymbol(b))?;
            packer.push_code(code);
        }
        tracing::trace!(bits = packer.bit_len(), "encoded payload");
        Ok(packer.finish())
    }
}

/// Huffman decoder.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    tree: HuffmanTree,
    total: u64,
}

impl HuffmanDecoder {
    /// Create a new Huffman decoder from symbol frequencies.
    pub fn new(table: &FrequencyTable) -> Self {
        Self {
            tree: HuffmanTree::build(table),
            total: table.total(),
        }
    }

    /// The rebuilt tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Number of symbols [`decode`](Self::decode) will emit.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Decode a packed payload.
    ///
    /// # Errors
    /// [`Error::TruncatedPayload`] if the bits run out early,
    /// [`Error::Corrupt`] if the walk cannot descend, and [`Error::TooLarge`]
    /// if the output cannot be allocated.
    pub fn decode(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let expected = self.total;
        let len = usize::try_from(expected).map_err(|_| Error::TooLarge(expected))?;

        let root = match self.tree.root() {
            None => return Ok(Vec::new()),
            Some(Node::Leaf { symbol, .. }) => {
                let mut out = Vec::new();
                out.try_reserve_exact(len)
                    .map_err(|_| Error::TooLarge(expected))?;
                out.resize(len, *symbol);
                return Ok(out);
            }
            Some(root) => root,
        };

        // Every symbol costs at least one bit.
        let mut out = Vec::with_capacity(len.min(payload.len().saturating_mul(8)));
        let mut cursor = DecodeCursor::new(root);
        let mut bits = BitReader::new(payload);
        while out.len() < len {
            let Some(bit) = bits.next() else {
                return Err(Error::TruncatedPayload {
                    expected,
                    decoded: out.len() as u64,
                });
            };
            if let Some(symbol) = cursor.step(bit)? {
                out.push(symbol);
            }
        }
        tracing::trace!(
            consumed = bits.position(),
            ignored = bits.remaining(),
            "decoded payload"
        );
        Ok(out)
    }
}

/// The decode automaton: a cursor that follows one bit at a time from the
/// root and jumps back to the root after each emitted symbol.
#[derive(Debug, Clone)]
pub struct DecodeCursor<'t> {
    root: &'t Node,
    at: &'t Node,
}

impl<'t> DecodeCursor<'t> {
    /// Start at `root`.
    pub fn new(root: &'t Node) -> Self {
        Self { root, at: root }
    }

    /// Follow `bit` (`false` = left). Returns the symbol when a leaf is reached.
    ///
    /// # Errors
    /// [`Error::Corrupt`] if the current node has no child to follow, which
    /// only happens when the root itself is a leaf.
    pub fn step(&mut self, bit: bool) -> Result<Option<u8>> {
        let next = self
            .at
            .child(bit)
            .ok_or(Error::Corrupt("walk reached a node with no children"))?;
        match next {
            Node::Leaf { symbol, .. } => {
                self.at = self.root;
                Ok(Some(*symbol))
            }
            Node::Internal { .. } => {
                self.at = next;
                Ok(None)
            }
        }
    }

    /// True between symbols.
    pub fn at_root(&self) -> bool {
        std::ptr::eq(self.at, self.root)
    }
}
