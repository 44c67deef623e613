//! # Static Huffman Compression
//!
//! *Lossless byte compression with minimum-redundancy prefix codes.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot and `Q` four symbols because `E` is far
//! more common. Huffman coding does the same thing optimally: count how often
//! each byte occurs, then give frequent bytes short bit strings and rare bytes
//! long ones, arranged so that no code is a prefix of another. A decoder can
//! then read the bits left to right and always know where one symbol ends.
//!
//! ## The Problem
//!
//! Fixed-width bytes spend 8 bits on every symbol regardless of how often it
//! appears. For skewed distributions (text, logs, sparse binary) most of those
//! bits are redundant. A static Huffman code removes that redundancy with a
//! single pass to count and a single pass to emit, at the price of shipping the
//! frequency table alongside the data.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down, not always optimal
//! 1952  Huffman     Bottom-up merging: optimal among prefix codes
//! 1978  Gallager    Adaptive Huffman coding
//! 1993  Katz        DEFLATE pairs LZ77 with canonical Huffman
//! ```
//!
//! ## Algorithm
//!
//! Seed a min-priority queue with one leaf per distinct byte. Pop the two
//! lightest subtrees, join them under a new node whose weight is their sum,
//! push it back, and repeat until one tree remains. A symbol's code is its
//! root-to-leaf path with left = `0` and right = `1`.
//!
//! The encoder and the decoder each rebuild the tree from the persisted
//! frequency table, so ties are broken by a fixed rule (frequency, then
//! smallest symbol in the subtree) rather than by container order.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n + k \log k)$ to encode $n$ bytes over $k \le 256$ symbols;
//!   decoding is $O(\text{bits})$.
//! - **Space**: $O(n)$ for the buffered input and output, $O(k)$ for the tree.
//!
//! ## Failure Modes
//!
//! 1. **Header overhead**: every distinct byte costs 9 header bytes, so tiny or
//!    uniformly random inputs grow.
//! 2. **Corrupt artifacts**: there is no checksum. A damaged payload decodes to
//!    the wrong bytes unless it is short enough to be caught as truncated.
//!
//! ## Implementation Notes
//!
//! - [`codec`]: whole-buffer [`compress`] / [`decompress`] and [`inspect`].
//! - [`huffman`]: [`HuffmanEncoder`] / [`HuffmanDecoder`] over a payload.
//! - [`format`]: the header layout.
//! - [`tree`], [`code`], [`frequency`], [`bits`]: the building blocks.
//!
//! ```
//! let packed = huffpack::compress(b"abracadabra")?;
//! assert_eq!(huffpack::decompress(&packed)?, b"abracadabra");
//! # Ok::<(), huffpack::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M. & Thomas, J. A. (2006). *Elements of Information Theory*, ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod code;
pub mod codec;
pub mod error;
pub mod format;
pub mod frequency;
pub mod huffman;
pub mod tree;

pub use code::CodeTable;
pub use codec::{compress, compress_to, decompress, decompress_from, inspect, Summary};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use huffman::{DecodeCursor, HuffmanDecoder, HuffmanEncoder};
pub use tree::{HuffmanTree, Node};
