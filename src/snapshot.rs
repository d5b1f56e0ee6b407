//! Persistable form of a trained codec.
//!
//! Construction is deterministic, so the corpus frequency table alone is
//! enough to revive a codec with bit-identical codes. The snapshot carries
//! exactly that table, in whatever serde format the caller picks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec::HuffmanCodec;
use crate::trie::{Node, TERMINATOR};

/// The frequency table of a trained [`HuffmanCodec`], ready to serialize.
///
/// The terminator's implicit entry is not stored; reviving the codec
/// reinserts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecSnapshot {
    frequencies: BTreeMap<char, u64>,
}

impl From<&HuffmanCodec> for CodecSnapshot {
    fn from(codec: &HuffmanCodec) -> Self {
        fn walk(node: &Node, frequencies: &mut BTreeMap<char, u64>) {
            match node {
                Node::Leaf { symbol, weight } => {
                    if *symbol != TERMINATOR {
                        frequencies.insert(*symbol, *weight);
                    }
                }
                Node::Internal { zero, one, .. } => {
                    walk(zero, frequencies);
                    walk(one, frequencies);
                }
            }
        }

        let mut frequencies = BTreeMap::new();
        walk(codec.root(), &mut frequencies);
        CodecSnapshot { frequencies }
    }
}

impl From<CodecSnapshot> for HuffmanCodec {
    fn from(snapshot: CodecSnapshot) -> Self {
        HuffmanCodec::from_frequencies(snapshot.frequencies)
    }
}
