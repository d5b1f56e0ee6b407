//! A reusable prefix-free text codec.
//!
//! Train a [`HuffmanCodec`] once over a corpus; the resulting trie and
//! code map are immutable and serve any number of compress/decompress
//! calls for messages drawn from that alphabet. A reserved terminator
//! sentinel marks end-of-message in the bitstream, so byte-alignment
//! padding is never misread as data.
//!
//! ```
//! use huffman_codec::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new("abracadabra");
//! let packed = codec.compress("cabra").unwrap();
//! assert_eq!(codec.decompress(&packed).unwrap(), "cabra");
//! ```

mod codec;
mod error;
mod snapshot;
mod trie;

pub use codec::HuffmanCodec;
pub use error::{CodecError, Result};
pub use snapshot::CodecSnapshot;
pub use trie::{Code, TERMINATOR};
