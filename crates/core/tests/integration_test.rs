//! Integration tests for the full huffman-text pipeline.
//!
//! These tests verify end-to-end behavior: text -> code table + bit-string ->
//! scheme + packed bytes -> code table + bit-string -> text, with verification
//! that output matches input.

use huffman_text_core::{
    bitpack::{pack, unpack},
    compress, decode, decompress, encode,
    error::{BitPackError, Error, HuffmanError, SchemeError},
    scheme::{parse_scheme, to_scheme},
    BitString,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn assert_prefix_free(codes: &[&BitString]) {
    for (i, a) in codes.iter().enumerate() {
        for (j, b) in codes.iter().enumerate() {
            if i != j {
                assert!(!b.starts_with(a), "{a} is a prefix of {b}");
            }
        }
    }
}

fn random_text(rng: &mut ChaCha8Rng, len: usize) -> String {
    let alphabet: Vec<char> = "aaaaeeeiioouu  bcdfgHIJ.,;!?\n\tßλ😀".chars().collect();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Encode, persist, reload, decode.
#[test]
fn test_full_pipeline() {
    let text = "hello world! this is a test of the full pipeline with some repetition: \
                aaaaaaaaaa bbbbbbbbbb cccccccccc";

    // Step 1: Encode
    let encoding = encode(text).expect("encode failed");

    // Step 2: Persist
    let scheme = to_scheme(&encoding.table);
    let payload = pack(&encoding.bits);
    assert!(payload.len() < text.len());

    // Step 3: Reload
    let table = parse_scheme(&scheme).expect("scheme parsing failed");
    assert_eq!(table, encoding.table);
    let bits = unpack(&payload).expect("unpack failed");
    assert_eq!(bits, encoding.bits);

    // Step 4: Decode
    let decoded = decode(&table, &bits).expect("decode failed");
    assert_eq!(decoded, text, "output doesn't match input");
}

#[test]
fn test_round_trip_edge_texts() {
    let texts = [
        "",
        "a",
        "aaaa",
        "ab",
        "\n",
        "The Quick Brown Fox, Jumps Over: The Lazy Dog! (1234567890) ?-_+=/\\\"'",
        "Grüße aus Zürich, 東京, and 🦀🦀🦀",
    ];

    for text in texts {
        let compressed = compress(text).expect("compress failed");
        let decoded =
            decompress(&compressed.scheme, &compressed.payload).expect("decompress failed");
        assert_eq!(decoded, text);
    }
}

/// Seeded random texts, including heavily skewed and tiny alphabets.
#[test]
fn test_random_texts_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..200 {
        let len = rng.gen_range(0..400);
        let text = random_text(&mut rng, len);

        let encoding = encode(&text).unwrap();
        let codes: Vec<&BitString> = encoding.table.iter().map(|(_, code)| code).collect();
        assert_prefix_free(&codes);

        let compressed = compress(&text).unwrap();
        assert_eq!(
            decompress(&compressed.scheme, &compressed.payload).unwrap(),
            text
        );
    }
}

#[test]
fn test_random_bit_strings_pack_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..500 {
        let len = rng.gen_range(1..100);
        let bits: BitString = (0..len).map(|_| rng.gen_bool(0.3)).collect();
        assert_eq!(unpack(&pack(&bits)).unwrap(), bits);
    }
}

#[test]
fn test_single_symbol_alphabet() {
    let encoding = encode("aaaa").unwrap();

    assert_eq!(to_scheme(&encoding.table), "97:0");
    assert_eq!(encoding.bits.to_string(), "0000");
    // "0000" + sentinel + 3 padding bits
    assert_eq!(pack(&encoding.bits), vec![0b0000_1000]);
}

#[test]
fn test_large_text() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(2000);

    let compressed = compress(&text).unwrap();
    // 29 distinct symbols: well under 6 bits each
    assert!(compressed.payload.len() < text.len() * 3 / 4);

    let decoded = decompress(&compressed.scheme, &compressed.payload).unwrap();
    assert_eq!(decoded, text);
}

#[test]
fn test_all_zero_payload_has_no_sentinel() {
    let compressed = compress("abc").unwrap();
    let result = decompress(&compressed.scheme, &[0u8; 4]);
    assert!(matches!(
        result,
        Err(Error::BitPack(BitPackError::NoSentinelFound))
    ));
}

#[test]
fn test_mismatched_scheme() {
    // A table without "0" cannot decode a payload that starts with it.
    let payload = pack(&"0".parse().unwrap());
    let result = decompress("97:1", &payload);
    assert!(matches!(
        result,
        Err(Error::Huffman(HuffmanError::UndecodableSequence { position: 0 }))
    ));
}

#[test]
fn test_corrupted_scheme() {
    let compressed = compress("corrupted scheme").unwrap();
    let broken = compressed.scheme.replacen(':', ";", 1);

    let result = decompress(&broken, &compressed.payload);
    assert!(matches!(
        result,
        Err(Error::Scheme(SchemeError::MalformedEntry { .. }))
    ));
}
