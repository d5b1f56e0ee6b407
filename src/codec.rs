//! The reusable codec: one trained trie, many messages.

use std::collections::BTreeMap;

use bitvec::prelude::*;
use log::{debug, trace};

use crate::error::{CodecError, Result};
use crate::trie::{self, Code, Node, TERMINATOR};

/// A prefix-free text codec trained on a single corpus.
///
/// Construction builds the Huffman trie and the symbol-to-code map once;
/// both are immutable afterwards, so one instance can serve any number of
/// [`compress`](Self::compress) / [`decompress`](Self::decompress) calls,
/// including concurrently from multiple threads.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    root: Node,
    encoding_map: BTreeMap<char, Code>,
}

impl HuffmanCodec {
    /// Train a codec on `corpus`.
    ///
    /// Every distinct character of the corpus receives a code, as does the
    /// reserved [`TERMINATOR`] sentinel. An empty corpus is accepted and
    /// yields a degenerate trie holding only the terminator.
    pub fn new(corpus: &str) -> Self {
        Self::from_frequencies(trie::frequency_table(corpus))
    }

    pub(crate) fn from_frequencies(frequencies: BTreeMap<char, u64>) -> Self {
        let root = trie::build_trie(&frequencies);
        let encoding_map = trie::derive_codes(&root);
        debug!(
            "trained codec: {} codes, corpus weight {}",
            encoding_map.len(),
            root.weight(),
        );
        HuffmanCodec { root, encoding_map }
    }

    /// Compress `message` into a byte sequence.
    ///
    /// Concatenates the code of each character, appends the terminator
    /// code, zero-pads to a byte boundary, and packs MSB-first. The output
    /// is always `ceil(bits / 8)` bytes.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownSymbol`] if `message` contains a character the
    /// corpus did not. A message containing the terminator character itself
    /// encodes without error but decodes short at that point.
    pub fn compress(&self, message: &str) -> Result<Vec<u8>> {
        let mut bits: BitVec<u8, Msb0> = BitVec::new();
        for symbol in message.chars() {
            let code = self
                .encoding_map
                .get(&symbol)
                .ok_or(CodecError::UnknownSymbol(symbol))?;
            bits.extend_from_bitslice(code);
        }
        bits.extend_from_bitslice(&self.encoding_map[&TERMINATOR]);

        while bits.len() % 8 != 0 {
            bits.push(false);
        }

        trace!("compressed message into {} bytes", bits.len() / 8);
        Ok(bits.into_vec())
    }

    /// Decompress `bytes` back into the original message.
    ///
    /// Walks the trie one bit at a time, emitting a symbol and resetting to
    /// the root at every leaf, until the terminator leaf is reached. Bits
    /// after the terminator are padding and are ignored.
    ///
    /// # Errors
    ///
    /// [`CodecError::TruncatedMessage`] if the bits run out before the
    /// terminator is seen.
    pub fn decompress(&self, bytes: &[u8]) -> Result<String> {
        // Terminator-only trie: its code is empty, so every message is
        // empty and all input bits are padding.
        if self.root.is_leaf() {
            return Ok(String::new());
        }

        let mut message = String::new();
        let mut cursor = &self.root;
        for bit in bytes.view_bits::<Msb0>().iter().by_vals() {
            cursor = match cursor {
                Node::Internal { zero, one, .. } => {
                    if bit {
                        one
                    } else {
                        zero
                    }
                }
                Node::Leaf { .. } => unreachable!("decode cursor never rests on a leaf"),
            };

            if let Node::Leaf { symbol, .. } = cursor {
                if *symbol == TERMINATOR {
                    trace!("decompressed {} symbols", message.chars().count());
                    return Ok(message);
                }
                message.push(*symbol);
                cursor = &self.root;
            }
        }

        Err(CodecError::TruncatedMessage)
    }

    /// An independent copy of the symbol-to-code map.
    ///
    /// Mutating the returned map has no effect on the codec.
    pub fn encoding_map(&self) -> BTreeMap<char, Code> {
        self.encoding_map.clone()
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compresses_against_the_fixed_tree() {
        // From the "aaab" tree: a = 1, b = 01, terminator = 00.
        // "aab" -> 1 1 01 00, padded to 11010000.
        let codec = HuffmanCodec::new("aaab");
        assert_eq!(codec.compress("aab").unwrap(), vec![0b1101_0000]);
    }

    #[test]
    fn round_trips_through_the_fixed_tree() {
        let codec = HuffmanCodec::new("aaab");
        let packed = codec.compress("aab").unwrap();
        assert_eq!(codec.decompress(&packed).unwrap(), "aab");
    }

    #[test]
    fn empty_message_is_just_the_padded_terminator() {
        // Terminator code is 00; padding fills the rest of the byte.
        let codec = HuffmanCodec::new("aaab");
        assert_eq!(codec.compress("").unwrap(), vec![0b0000_0000]);
        assert_eq!(codec.decompress(&[0b0000_0000]).unwrap(), "");
    }

    #[test]
    fn single_symbol_corpus() {
        // Terminator = 0, a = 1. "aaa" -> 1110 padded to 11100000.
        let codec = HuffmanCodec::new("aaa");
        let packed = codec.compress("aaa").unwrap();
        assert_eq!(packed, vec![0b1110_0000]);
        assert_eq!(codec.decompress(&packed).unwrap(), "aaa");
    }

    #[test]
    fn empty_corpus_degenerates_cleanly() {
        let codec = HuffmanCodec::new("");

        // The terminator's code is empty, so compressing the empty message
        // produces no bits at all.
        assert_eq!(codec.compress("").unwrap(), Vec::<u8>::new());
        assert_eq!(codec.decompress(&[]).unwrap(), "");
        // Pure padding decodes to the empty message too.
        assert_eq!(codec.decompress(&[0, 0]).unwrap(), "");

        assert_eq!(
            codec.compress("x"),
            Err(CodecError::UnknownSymbol('x')),
        );
    }

    #[test]
    fn unknown_symbol_is_reported_not_dropped() {
        let codec = HuffmanCodec::new("aaab");
        assert_eq!(
            codec.compress("abq"),
            Err(CodecError::UnknownSymbol('q')),
        );
    }

    #[test]
    fn missing_terminator_is_a_truncation_error() {
        // All-ones bits decode to 'a' forever on the "aaab" tree and never
        // reach the terminator.
        let codec = HuffmanCodec::new("aaab");
        assert_eq!(
            codec.decompress(&[0b1111_1111]),
            Err(CodecError::TruncatedMessage),
        );
    }

    #[test]
    fn truncating_the_compressed_tail_fails() {
        let codec = HuffmanCodec::new("the quick brown fox jumps over the lazy dog");
        let packed = codec.compress("quick fox").unwrap();
        // Dropping the final byte removes the terminator bits.
        assert_eq!(
            codec.decompress(&packed[..packed.len() - 1]),
            Err(CodecError::TruncatedMessage),
        );
    }

    #[test]
    fn non_ascii_symbols_round_trip() {
        let codec = HuffmanCodec::new("héllo wörld ☃☃☃");
        let packed = codec.compress("hö☃").unwrap();
        assert_eq!(codec.decompress(&packed).unwrap(), "hö☃");
    }

    #[test]
    fn encoding_map_is_an_independent_copy() {
        let codec = HuffmanCodec::new("aaab");
        let mut map = codec.encoding_map();
        map.clear();

        // The codec still compresses with its internal map.
        assert_eq!(codec.compress("aab").unwrap(), vec![0b1101_0000]);
        assert_eq!(codec.encoding_map().len(), 3);
    }
}
