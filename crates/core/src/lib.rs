//! huffman-text-core: lossless text compression with static Huffman codes
//!
//! This library provides the core components to:
//! - Count symbol frequencies of a text
//! - Build a Huffman code tree with a reproducible tie-break order
//! - Derive a prefix-free code table and persist it as a text "scheme"
//! - Encode text to a bit-string and decode it back
//! - Pack bit-strings into bytes with a sentinel bit, and unpack them
//!
//! # Architecture
//!
//! Leaf-first:
//! - `frequency`: symbol counts, in first-occurrence order
//! - `tree`: greedy bottom-up code tree construction
//! - `code_table`: symbol <-> code mapping
//! - `scheme`: persisted text form of a code table
//! - `bits` / `bitpack`: bit-strings and their byte packing
//! - `transcoder`: encode/decode and the compress/decompress pipeline
//! - `stats`: sizes and timing of a compression run
//!
//! # Example
//!
//! ```
//! use huffman_text_core::{compress, decompress};
//!
//! let compressed = compress("abracadabra").unwrap();
//! let text = decompress(&compressed.scheme, &compressed.payload).unwrap();
//! assert_eq!(text, "abracadabra");
//! ```

pub mod bitpack;
pub mod bits;
pub mod code_table;
pub mod error;
pub mod frequency;
pub mod scheme;
pub mod stats;
pub mod transcoder;
pub mod tree;

/// The atomic unit of text: one Unicode scalar value.
pub type Symbol = char;

// Re-export commonly used types
pub use bits::BitString;
pub use code_table::CodeTable;
pub use error::{Error, Result};
pub use transcoder::{compress, decode, decompress, encode, encode_with, Compressed, Encoding};
