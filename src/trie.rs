//! Huffman trie construction and code derivation.
//!
//! Builds the prefix-free code tree for a corpus: count symbol frequencies,
//! seed a min-heap with one leaf per symbol (plus the [`TERMINATOR`]
//! sentinel at frequency 1), then greedily merge the two lightest nodes
//! until one tree remains. The merge order is total and deterministic, so
//! the same corpus always yields the same tree shape and the same codes.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, BTreeMap};

use bitvec::prelude::*;
use log::debug;

/// Reserved end-of-message sentinel (ASCII ETB).
///
/// Inserted into every frequency table at weight 1 before the merge. Its
/// code marks the end of a compressed message so that padding bits are
/// never misread as data. A corpus containing this character literally
/// violates the codec's precondition.
pub const TERMINATOR: char = '\x17';

/// A symbol's codeword: its root-to-leaf path, one bit per edge.
pub type Code = BitBox<u8, Msb0>;

/// A vertex of the code tree.
///
/// Internal nodes always own exactly two children; leaves own none.
/// Nodes are immutable once the tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        zero: Box<Node>,
        one: Box<Node>,
    },
}

impl Node {
    fn leaf(symbol: char, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    fn merge(zero: Node, one: Node) -> Self {
        Node::Internal {
            weight: zero.weight() + one.weight(),
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    pub(crate) fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A pending tree in the merge heap.
///
/// `representative` is the leaf's own symbol, or for a merged tree the
/// smallest symbol among its descendant leaves. Leaf symbols are distinct,
/// so no two entries share a representative and [`merge_order`] is total.
#[derive(Debug)]
struct Entry {
    weight: u64,
    representative: char,
    node: Node,
}

/// Merge priority: lighter trees first, weight ties by representative
/// symbol. Fixing this order fixes the exact tree shape, and with it the
/// exact compressed output.
fn merge_order(a: &Entry, b: &Entry) -> Ordering {
    a.weight
        .cmp(&b.weight)
        .then(a.representative.cmp(&b.representative))
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        merge_order(self, other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        merge_order(self, other)
    }
}

/// Count each distinct character of `corpus`.
pub(crate) fn frequency_table(corpus: &str) -> BTreeMap<char, u64> {
    let mut freqs = BTreeMap::new();
    for symbol in corpus.chars() {
        *freqs.entry(symbol).or_insert(0) += 1;
    }
    freqs
}

/// Build the code tree for `freqs` plus the terminator sentinel.
///
/// An empty table degenerates to a lone terminator leaf as the root,
/// whose code is the empty bit-string.
pub(crate) fn build_trie(freqs: &BTreeMap<char, u64>) -> Node {
    debug_assert!(
        !freqs.contains_key(&TERMINATOR),
        "terminator sentinel must not appear in the corpus",
    );

    let mut heap: BinaryHeap<Reverse<Entry>> = freqs
        .iter()
        .map(|(&symbol, &weight)| {
            Reverse(Entry {
                weight,
                representative: symbol,
                node: Node::leaf(symbol, weight),
            })
        })
        .collect();
    heap.push(Reverse(Entry {
        weight: 1,
        representative: TERMINATOR,
        node: Node::leaf(TERMINATOR, 1),
    }));

    debug!("building huffman trie over {} leaves", heap.len());

    while heap.len() > 1 {
        // The heap hands back the lighter (or, on a weight tie, the
        // smaller-symbol) tree first; it takes the zero edge.
        let Reverse(zero) = heap.pop().unwrap();
        let Reverse(one) = heap.pop().unwrap();

        heap.push(Reverse(Entry {
            weight: zero.weight + one.weight,
            representative: zero.representative.min(one.representative),
            node: Node::merge(zero.node, one.node),
        }));
    }

    // The terminator leaf is always seeded, so the heap is never empty.
    heap.pop().unwrap().0.node
}

/// Derive each leaf's codeword by walking the tree depth-first,
/// accumulating `0` per zero edge and `1` per one edge.
pub(crate) fn derive_codes(root: &Node) -> BTreeMap<char, Code> {
    fn walk(node: &Node, path: &mut BitVec<u8, Msb0>, codes: &mut BTreeMap<char, Code>) {
        match node {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, path.clone().into_boxed_bitslice());
            }
            Node::Internal { zero, one, .. } => {
                path.push(false);
                walk(zero, path, codes);
                path.pop();

                path.push(true);
                walk(one, path, codes);
                path.pop();
            }
        }
    }

    let mut path = BitVec::new();
    let mut codes = BTreeMap::new();
    walk(root, &mut path, &mut codes);
    codes
}
