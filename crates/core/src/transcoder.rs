//! Text <-> bit-string transcoding.
//!
//! [`encode`] builds a code table for a text and concatenates each symbol's
//! code. [`decode`] scans a bit-string left to right, growing a prefix until
//! it matches a code. Because the codes are prefix-free the first match is
//! the only possible one, so no backtracking is needed.
//!
//! [`compress`] and [`decompress`] add the persisted forms on top: the scheme
//! string and the packed payload bytes.

use crate::bitpack;
use crate::bits::BitString;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::scheme;
use crate::tree;

/// A text encoded under its own code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    pub table: CodeTable,
    pub bits: BitString,
}

/// The persisted form of an encoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    /// Code table in scheme form
    pub scheme: String,
    /// Packed payload (sentinel-terminated, zero-padded)
    pub payload: Vec<u8>,
}

/// Build a code table for `text` and encode it.
///
/// The empty text encodes to an empty table and an empty bit-string.
pub fn encode(text: &str) -> Result<Encoding> {
    let frequencies = FrequencyTable::from_text(text);
    if frequencies.is_empty() {
        return Ok(Encoding {
            table: CodeTable::default(),
            bits: BitString::new(),
        });
    }

    let root = tree::build(frequencies.occurrences())?;
    let table = CodeTable::derive(&root);
    let payload_bits = frequencies
        .iter()
        .filter_map(|(symbol, count)| Some(table.code(symbol)?.len() * count as usize))
        .sum();
    let bits = encode_into(&table, text, payload_bits)?;

    log::debug!(
        "encoded {} symbols ({} distinct) into {} bits",
        frequencies.total(),
        frequencies.len(),
        bits.len()
    );
    Ok(Encoding { table, bits })
}

/// Encode `text` under an existing code table.
///
/// # Errors
/// `HuffmanError::UnknownSymbol` if `text` contains a symbol without a code.
pub fn encode_with(table: &CodeTable, text: &str) -> Result<BitString> {
    encode_into(table, text, text.len())
}

fn encode_into(table: &CodeTable, text: &str, capacity: usize) -> Result<BitString> {
    let mut bits = BitString::with_capacity(capacity);
    for symbol in text.chars() {
        let code = table
            .code(symbol)
            .ok_or(HuffmanError::UnknownSymbol { symbol })?;
        bits.extend_from_bits(code);
    }
    Ok(bits)
}

/// Decode `bits` under `table`.
///
/// # Errors
/// `HuffmanError::UndecodableSequence` if some remainder of `bits` starts
/// with no code of the table, e.g. a truncated or corrupted stream or a
/// mismatched table. `position` is the bit offset of that remainder.
pub fn decode(table: &CodeTable, bits: &BitString) -> Result<String> {
    let max_len = table.max_code_len();
    let mut text = String::new();
    let mut start = 0;

    while start < bits.len() {
        let longest = max_len.min(bits.len() - start);
        let matched = (1..=longest).find_map(|len| {
            table
                .symbol(&bits[start..start + len])
                .map(|symbol| (symbol, len))
        });

        match matched {
            Some((symbol, len)) => {
                text.push(symbol);
                start += len;
            }
            None => {
                return Err(HuffmanError::UndecodableSequence { position: start }.into());
            }
        }
    }

    Ok(text)
}

/// Encode `text` and produce its persisted form.
pub fn compress(text: &str) -> Result<Compressed> {
    let encoding = encode(text)?;
    Ok(Compressed::from(&encoding))
}

/// Reverse [`compress`]: parse the scheme, unpack the payload and decode.
///
/// # Errors
/// Any scheme parsing error, `BitPackError::NoSentinelFound` for a payload
/// without sentinel, or `HuffmanError::UndecodableSequence`.
pub fn decompress(scheme_text: &str, payload: &[u8]) -> Result<String> {
    let table = scheme::parse_scheme(scheme_text)?;
    let bits = bitpack::unpack(payload)?;
    decode(&table, &bits)
}

impl From<&Encoding> for Compressed {
    fn from(encoding: &Encoding) -> Self {
        Self {
            scheme: scheme::to_scheme(&encoding.table),
            payload: bitpack::pack(&encoding.bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn scenario_table() -> CodeTable {
        "97:1-98:01-99:001-100:0001".parse().unwrap()
    }

    #[test]
    fn test_encode_with_external_table() {
        let bits = encode_with(&scenario_table(), "abcddcba").unwrap();
        assert_eq!(bits.to_string(), "10100100010001001011");
    }

    #[test]
    fn test_decode_with_external_table() {
        let bits: BitString = "10100100010001001011".parse().unwrap();
        assert_eq!(decode(&scenario_table(), &bits).unwrap(), "abcddcba");
    }

    #[test]
    fn test_encode_with_unknown_symbol() {
        let result = encode_with(&scenario_table(), "abe");
        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::UnknownSymbol { symbol: 'e' }))
        ));
    }

    #[test]
    fn test_single_symbol_text() {
        let encoding = encode("aaaa").unwrap();

        assert_eq!(encoding.table.len(), 1);
        assert_eq!(encoding.table.code('a').unwrap().to_string(), "0");
        assert_eq!(encoding.bits.to_string(), "0000");
        assert_eq!(decode(&encoding.table, &encoding.bits).unwrap(), "aaaa");
    }

    #[test]
    fn test_empty_text() {
        let encoding = encode("").unwrap();
        assert!(encoding.table.is_empty());
        assert!(encoding.bits.is_empty());
        assert_eq!(decode(&encoding.table, &encoding.bits).unwrap(), "");
    }

    #[test]
    fn test_round_trip_mixed_text() {
        let text = "The Quick, brown fox; JUMPS over the lazy dog?! 123 (äöü) ∑ 🎉\n\ttabs";
        let encoding = encode(text).unwrap();
        assert_eq!(decode(&encoding.table, &encoding.bits).unwrap(), text);
    }

    #[test]
    fn test_frequent_symbols_get_short_codes() {
        let encoding = encode("aaaaaaaabbbbccd").unwrap();
        let len = |c| encoding.table.code(c).unwrap().len();

        assert!(len('a') <= len('b'));
        assert!(len('b') <= len('c'));
        assert!(len('c') <= len('d'));
    }

    #[test]
    fn test_encode_reserves_payload_sized_buffer() {
        // One dominant symbol plus a long tail of rare ones.
        let mut text = "a".repeat(2000);
        text.extend(('b'..='z').chain('A'..='Z'));
        let encoding = encode(&text).unwrap();

        let bits = encoding.bits.len();
        assert!(bits < 2 * text.len());
        assert!(encoding.bits.capacity() >= bits);
        assert!(encoding.bits.capacity() < 2 * bits);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let text = "mississippi river banks";
        assert_eq!(encode(text).unwrap(), encode(text).unwrap());
    }

    #[test]
    fn test_truncated_stream_is_undecodable() {
        let table = scenario_table();
        let mut bits = encode_with(&table, "abcd").unwrap();
        assert_eq!(bits.to_string(), "1010010001");

        // Without its last bit, "0001" becomes "000", which matches no code.
        bits.pop();
        let result = decode(&table, &bits);
        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::UndecodableSequence { position: 6 }))
        ));
    }

    #[test]
    fn test_decode_with_empty_table() {
        let bits: BitString = "0".parse().unwrap();
        let result = decode(&CodeTable::default(), &bits);
        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::UndecodableSequence { position: 0 }))
        ));
    }

    #[test]
    fn test_compress_decompress() {
        let text = "abracadabra";
        let compressed = compress(text).unwrap();

        assert!(!compressed.scheme.is_empty());
        assert_eq!(decompress(&compressed.scheme, &compressed.payload).unwrap(), text);
    }

    #[test]
    fn test_decompress_all_zero_payload() {
        let compressed = compress("abc").unwrap();
        let result = decompress(&compressed.scheme, &[0, 0]);
        assert!(matches!(
            result,
            Err(Error::BitPack(crate::error::BitPackError::NoSentinelFound))
        ));
    }
}
