//! Error types for the huffman-text system.
//!
//! All operations return structured errors rather than panicking. None of
//! them are transient: each one means the input, the scheme, or the packed
//! payload is invalid or does not belong together.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Huffman: tree construction, encoding and decoding
/// - Scheme: parsing a persisted code table
/// - Bit packing: packing/unpacking a bit-string to bytes
/// - I/O: file system operations (app layer)
#[derive(Debug, Error)]
pub enum Error {
    /// Huffman coding error (e.g., empty input, undecodable remainder)
    #[error("huffman error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Persisted code table is malformed
    #[error("malformed scheme: {0}")]
    Scheme(#[from] SchemeError),

    /// Bit packing error (e.g., missing sentinel bit)
    #[error("bit packing error: {0}")]
    BitPack(#[from] BitPackError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Huffman coding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// No symbols to build a code tree from
    #[error("empty input: cannot build a code tree without symbols")]
    EmptyInput,

    /// The remaining bits match no code in the table
    #[error("undecodable bit sequence starting at bit {position}")]
    UndecodableSequence { position: usize },

    /// Text contains a symbol that the code table has no code for
    #[error("symbol {symbol:?} has no code in the table")]
    UnknownSymbol { symbol: char },
}

/// Errors raised while parsing or validating a persisted code table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemeError {
    /// Entry does not split into exactly `<symbol>:<bits>`
    #[error("entry {entry:?} is not of the form <symbol>:<bits>")]
    MalformedEntry { entry: String },

    /// Symbol field is not a decimal Unicode scalar value
    #[error("invalid symbol value {value:?}")]
    InvalidSymbol { value: String },

    /// Bit field contains something other than '0' or '1'
    #[error("invalid bit {found:?} at offset {offset}")]
    InvalidBit { found: char, offset: usize },

    /// A symbol is bound to an empty code
    #[error("symbol {symbol:?} has an empty code")]
    EmptyCode { symbol: char },

    /// Two symbols share the same code
    #[error("code {code} is assigned to more than one symbol")]
    DuplicateCode { code: String },

    /// A symbol appears in more than one entry
    #[error("symbol {symbol:?} appears more than once")]
    DuplicateSymbol { symbol: char },

    /// One code is a prefix of another, so decoding would be ambiguous
    #[error("code {prefix} is a prefix of code {code}")]
    NotPrefixFree { prefix: String, code: String },
}

/// Bit packing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitPackError {
    /// Packed bytes contain no `1` bit, so the end of the payload is unknown
    #[error("no sentinel bit found in packed data")]
    NoSentinelFound,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
