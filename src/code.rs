//! Code tables derived from a Huffman tree.

use bitvec::prelude::*;

use crate::frequency::ALPHABET_SIZE;
use crate::tree::{HuffmanTree, Node};

/// Symbol → root-to-leaf bit path (left = `0`, right = `1`).
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<BitVec<u8, Msb0>>>,
}

impl CodeTable {
    /// Derive codes by a depth-first walk of `tree`.
    ///
    /// A lone-leaf tree assigns its symbol the empty code; the codec writes no
    /// payload bits for it and the decoder reconstructs it from the count.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        if let Some(root) = tree.root() {
            Self::build_codes(root, &mut BitVec::new(), &mut codes);
        }
        Self { codes }
    }

    fn build_codes(
        node: &Node,
        prefix: &mut BitVec<u8, Msb0>,
        codes: &mut [Option<BitVec<u8, Msb0>>],
    ) {
        match node {
            Node::Leaf { symbol, .. } => {
                codes[*symbol as usize] = Some(prefix.clone());
            }
            Node::Internal { left, right, .. } => {
                prefix.push(false);
                Self::build_codes(left, prefix, codes);
                prefix.pop();

                prefix.push(true);
                Self::build_codes(right, prefix, codes);
                prefix.pop();
            }
        }
    }

    /// Code for `symbol`, if it appears in the tree.
    pub fn get(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes[symbol as usize].as_deref()
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Longest code length in bits.
    pub fn max_len(&self) -> usize {
        self.codes.iter().flatten().map(|c| c.len()).max().unwrap_or(0)
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, c)| c.as_deref().map(|c| (s as u8, c)))
    }
}
