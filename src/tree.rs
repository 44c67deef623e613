//! Huffman tree construction.
//!
//! The tree is rebuilt independently by the encoder and the decoder from the
//! same [`FrequencyTable`], so construction must be a pure function of the
//! table's contents. Subtrees waiting to be merged are ordered by
//! `(frequency, smallest symbol in the subtree)`, both ascending. Live subtrees
//! are disjoint, so the secondary key is unique and the order is total: no
//! tie is ever resolved by heap layout or insertion order.
//!
//! The first subtree popped becomes the left (`0`) child, the second the right
//! (`1`) child.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use crate::frequency::FrequencyTable;

/// Huffman tree node.
///
/// A leaf carries a symbol; an internal node always owns exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A coded symbol.
    Leaf {
        /// Byte value.
        symbol: u8,
        /// Occurrence count.
        freq: u64,
    },
    /// A branch; `left` is reached by bit `0`, `right` by bit `1`.
    Internal {
        /// Subtree for bit `0`.
        left: Box<Node>,
        /// Subtree for bit `1`.
        right: Box<Node>,
        /// Sum of both subtrees' frequencies.
        freq: u64,
    },
}

impl Node {
    /// Aggregate frequency of this subtree.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// Symbol carried by a leaf.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child selected by `bit` (`false` = left). Leaves have none.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    fn node_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    fn collect_symbols(&self, out: &mut Vec<u8>) {
        match self {
            Node::Leaf { symbol, .. } => out.push(*symbol),
            Node::Internal { left, right, .. } => {
                left.collect_symbols(out);
                right.collect_symbols(out);
            }
        }
    }

    fn fmt_preorder(&self, f: &mut fmt::Formatter<'_>, indent: &str, label: &str) -> fmt::Result {
        match self {
            Node::Leaf { symbol, freq } => {
                write!(f, "{indent}{label}Leaf: ")?;
                if symbol.is_ascii_graphic() || *symbol == b' ' {
                    write!(f, "'{}' ", *symbol as char)?;
                }
                writeln!(f, "({symbol:#04x}) freq: {freq}")
            }
            Node::Internal { left, right, freq } => {
                writeln!(f, "{indent}{label}Internal: freq={freq}")?;
                let child_indent = format!("{indent}  ");
                left.fmt_preorder(f, &child_indent, "L: ")?;
                right.fmt_preorder(f, &child_indent, "R: ")
            }
        }
    }
}

/// A subtree waiting in the merge queue.
struct Pending {
    freq: u64,
    // Smallest symbol in `node`.
    key: u8,
    node: Node,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we want the minimum on top.
        (other.freq, other.key).cmp(&(self.freq, self.key))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

/// A Huffman tree, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HuffmanTree {
    root: Option<Node>,
}

impl HuffmanTree {
    /// Build the tree for `table`.
    ///
    /// An empty table yields an empty tree and a single-symbol table yields a
    /// lone leaf.
    pub fn build(table: &FrequencyTable) -> Self {
        let mut pq: BinaryHeap<Pending> = table
            .iter()
            .map(|(symbol, freq)| Pending {
                freq,
                key: symbol,
                node: Node::Leaf { symbol, freq },
            })
            .collect();

        let root = loop {
            let Some(left) = pq.pop() else {
                break None;
            };
            let Some(right) = pq.pop() else {
                break Some(left.node);
            };
            let freq = left.freq + right.freq;
            pq.push(Pending {
                freq,
                key: left.key.min(right.key),
                node: Node::Internal {
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                    freq,
                },
            });
        };

        Self { root }
    }

    /// Root node, if the tree is not empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// True if the tree was built from an empty table.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, Node::height)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::node_count)
    }

    /// Number of leaves, equal to the number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        // A full binary tree with n leaves has 2n - 1 nodes.
        self.node_count().div_ceil(2)
    }

    /// Leaf symbols in left-to-right order.
    pub fn symbols(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            root.collect_symbols(&mut out);
        }
        out
    }
}

/// Indented pre-order dump, one node per line.
impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => root.fmt_preorder(f, "", ""),
            None => writeln!(f, "(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(u8, u64)]) -> FrequencyTable {
        let mut t = FrequencyTable::new();
        for &(s, c) in pairs {
            t.insert(s, c).unwrap();
        }
        t
    }

    #[test]
    fn test_empty_table_gives_empty_tree() {
        let tree = HuffmanTree::build(&FrequencyTable::new());
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn test_single_symbol_is_lone_leaf() {
        let tree = HuffmanTree::build(&table(&[(b'a', 4)]));
        assert_eq!(
            tree.root(),
            Some(&Node::Leaf {
                symbol: b'a',
                freq: 4
            })
        );
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_lower_frequency_goes_left() {
        let tree = HuffmanTree::build(&table(&[(b'a', 5), (b'b', 2)]));
        let root = tree.root().unwrap();
        assert_eq!(root.freq(), 7);
        assert_eq!(root.child(false).and_then(Node::symbol), Some(b'b'));
        assert_eq!(root.child(true).and_then(Node::symbol), Some(b'a'));
    }

    #[test]
    fn test_equal_frequencies_break_on_symbol() {
        // All weights equal: merge order is fixed by symbol value alone.
        let tree = HuffmanTree::build(&table(&[(b'd', 1), (b'c', 1), (b'b', 1), (b'a', 1)]));
        // (a,b) and (c,d) pair up first; the (a,b) subtree has the smaller key.
        assert_eq!(tree.symbols(), vec![b'a', b'b', b'c', b'd']);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_internal_tie_uses_min_symbol() {
        // After merging x(1)+y(1) -> 2, it ties with a(2); 'a' < 'x' so the leaf wins left.
        let tree = HuffmanTree::build(&table(&[(b'x', 1), (b'y', 1), (b'a', 2)]));
        let root = tree.root().unwrap();
        assert_eq!(root.child(false).and_then(Node::symbol), Some(b'a'));
        assert!(!root.child(true).unwrap().is_leaf());
    }

    #[test]
    fn test_leaf_count_matches_table() {
        let t = FrequencyTable::from_bytes(b"the quick brown fox jumps over the lazy dog");
        let tree = HuffmanTree::build(&t);
        assert_eq!(tree.leaf_count(), t.len());
        let mut symbols = tree.symbols();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), t.len());
        assert_eq!(tree.root().unwrap().freq(), t.total());
    }

    #[test]
    fn test_display_preorder() {
        let tree = HuffmanTree::build(&table(&[(b'a', 5), (0x00, 2)]));
        let dump = tree.to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[0], "Internal: freq=7");
        assert_eq!(lines[1], "  L: Leaf: (0x00) freq: 2");
        assert_eq!(lines[2], "  R: Leaf: 'a' (0x61) freq: 5");
    }
}
